use crate::context::Context;
use crate::gvr_error::GvrError;
use crate::runtime::ControllerRuntime;
use crate::utils;
use gvr_api::{ControllerApiOptions, ControllerApiStatus, ControllerState};

/// A controller session on a context.
///
/// Each [`poll`](Controller::poll) overwrites the held snapshot with the
/// runtime's latest one.
pub struct Controller<'a, R: ControllerRuntime> {
    context: &'a Context<R>,
    options: ControllerApiOptions,
    state: ControllerState,
    controller_id: u32,
}

impl<'a, R: ControllerRuntime> Controller<'a, R> {
    /// Starts the controller API. Fails when the context already runs a
    /// controller session, or when the runtime reports anything but
    /// [`ControllerApiStatus::Ok`], since every other status is permanent.
    pub fn new(context: &'a Context<R>, options: ControllerApiOptions) -> Result<Self, GvrError> {
        if !context.claim_controller() {
            warn!("context {:p} already runs a controller session", context.as_ptr());
            return Err(GvrError::ControllerSessionActive);
        }
        let mut controller = Controller {
            context: context,
            options: options,
            state: ControllerState::default(),
            controller_id: utils::new_id(),
        };
        unsafe {
            context.runtime().controller_init(context.as_ptr(), &options);
        }
        controller.poll();

        let api_status = controller.state.api_status;
        if api_status != ControllerApiStatus::Ok {
            warn!("controller API failed to start: {}", api_status);
            // Dropping `controller` shuts the API down again.
            return Err(GvrError::ControllerApi(api_status));
        }
        debug!("controller {} started with {:?}", controller.controller_id, options);

        Ok(controller)
    }

    pub fn id(&self) -> u32 {
        self.controller_id
    }

    pub fn options(&self) -> &ControllerApiOptions {
        &self.options
    }

    /// Fetches a fresh snapshot from the runtime.
    pub fn poll(&mut self) -> &ControllerState {
        unsafe {
            self.context.runtime().controller_update(self.context.as_ptr(), &mut self.state);
        }
        trace!("controller {} polled: {:?}", self.controller_id, self.state.connection_state);
        &self.state
    }

    /// The snapshot from the last poll.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }
}

impl<'a, R: ControllerRuntime> Drop for Controller<'a, R> {
    fn drop(&mut self) {
        debug!("shutting down controller {}", self.controller_id);
        unsafe {
            self.context.runtime().controller_shutdown(self.context.as_ptr());
        }
        self.context.release_controller();
    }
}
