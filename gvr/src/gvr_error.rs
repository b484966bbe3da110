use gvr_api::ControllerApiStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GvrError {
    #[error("the VR runtime could not create a context")]
    ContextCreation,

    #[error("the VR runtime could not create a render params list")]
    RenderParamsListCreation,

    #[error("render params index {index} is out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("the context already runs a controller session")]
    ControllerSessionActive,

    /// The controller API reported a permanent failure.
    #[error("controller API unavailable: {0}")]
    ControllerApi(ControllerApiStatus),
}
