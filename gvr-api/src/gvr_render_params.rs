use bytemuck::Zeroable;
use crate::{Eye, Rectf};

/// Where to find one region (usually one eye) of the client's render target.
///
/// The runtime normally produces these through its recommended or screen
/// render-params lists, but a client may build its own list to customize the
/// distortion pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct RenderParams {
    /// Viewport bounds on the render target, in target coordinates.
    pub eye_viewport_bounds: Rectf,
    /// The eye's field of view, in degrees.
    pub eye_fov: Rectf,
    /// Which eye the region was rendered for. Viewport, distortion and
    /// transformation are computed differently per eye.
    pub eye_type: Eye,
}

impl RenderParams {
    pub fn new(eye_type: Eye, eye_viewport_bounds: Rectf, eye_fov: Rectf) -> Self {
        Self {
            eye_viewport_bounds: eye_viewport_bounds,
            eye_fov: eye_fov,
            eye_type: eye_type,
        }
    }
}
