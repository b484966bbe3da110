use crate::gvr_error::GvrError;
use crate::render_params_list::RenderParamsList;
use crate::runtime::GvrRuntime;
use gvr_api::ffi::gvr_context;
use gvr_api::{BoolParameter, BoolParameters, ClockTimePoint, HeadPose};
use std::cell::Cell;
use std::fmt;
use std::ptr::NonNull;
use std::sync::Arc;
use std::time::Duration;

// A good estimate of the time between frame submission (without vsync) and
// the moment the image reaches the physical pixels of the display.
pub const PREDICTION_OFFSET: Duration = Duration::from_millis(50);

/// Owned handle to a runtime context.
///
/// The context is created by the runtime in [`Context::new`] and handed back
/// to it on drop. The handle can be neither cloned nor copied. At most one
/// [`Controller`](crate::Controller) session runs on a context at a time.
pub struct Context<R: GvrRuntime> {
    runtime: Arc<R>,
    ctx: NonNull<gvr_context>,
    controller_active: Cell<bool>,
}

impl<R: GvrRuntime> Context<R> {
    pub fn new(runtime: Arc<R>) -> Result<Context<R>, GvrError> {
        let ctx = match runtime.create_context() {
            Some(ctx) => ctx,
            None => {
                warn!("VR runtime refused to create a context");
                return Err(GvrError::ContextCreation);
            }
        };
        debug!("created gvr context {:p}", ctx);

        Ok(Context {
            runtime: runtime,
            ctx: ctx,
            controller_active: Cell::new(false),
        })
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn as_ptr(&self) -> NonNull<gvr_context> {
        self.ctx
    }

    pub fn has_controller(&self) -> bool {
        self.controller_active.get()
    }

    // Marks the controller session as taken. Returns false if it already was.
    pub(crate) fn claim_controller(&self) -> bool {
        !self.controller_active.replace(true)
    }

    pub(crate) fn release_controller(&self) {
        self.controller_active.set(false);
    }

    pub fn time_point_now(&self) -> ClockTimePoint {
        self.runtime.time_point_now()
    }

    pub fn head_pose(&self, time: ClockTimePoint) -> HeadPose {
        unsafe { self.runtime.head_pose_in_start_space(self.ctx, time) }
    }

    /// Head pose predicted for when a frame rendered now reaches the display.
    pub fn predicted_head_pose(&self) -> HeadPose {
        self.head_pose(self.time_point_now() + PREDICTION_OFFSET)
    }

    pub fn reset_tracking(&self) {
        debug!("resetting tracking on {:p}", self.ctx);
        unsafe { self.runtime.reset_tracking(self.ctx) }
    }

    pub fn bool_parameter(&self, param: BoolParameter) -> bool {
        unsafe { self.runtime.bool_parameter(self.ctx, param) }
    }

    pub fn set_bool_parameter(&self, param: BoolParameter, value: bool) {
        unsafe { self.runtime.set_bool_parameter(self.ctx, param, value) }
    }

    /// Reads every bool parameter at once.
    pub fn bool_parameters(&self) -> BoolParameters {
        let mut params = BoolParameters::default();
        for param in BoolParameter::ALL {
            params.set(*param, self.bool_parameter(*param));
        }
        params
    }

    /// Writes every bool parameter at once.
    pub fn apply_bool_parameters(&self, params: &BoolParameters) {
        for param in BoolParameter::ALL {
            self.set_bool_parameter(*param, params.get(*param));
        }
    }

    pub fn empty_render_params_list(&self) -> Result<RenderParamsList<'_, R>, GvrError> {
        RenderParamsList::new(self)
    }

    /// The runtime's recommended parameters, one entry per eye.
    pub fn recommended_render_params(&self) -> Result<RenderParamsList<'_, R>, GvrError> {
        let list = RenderParamsList::new(self)?;
        unsafe {
            self.runtime.fill_recommended_render_params(self.ctx, list.as_ptr());
        }
        Ok(list)
    }
}

impl<R: GvrRuntime> Drop for Context<R> {
    fn drop(&mut self) {
        debug!("destroying gvr context {:p}", self.ctx);
        unsafe {
            self.runtime.destroy_context(self.ctx);
        }
    }
}

impl<R: GvrRuntime> fmt::Debug for Context<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Context")
         .field("ctx", &self.ctx)
         .field("controller_active", &self.controller_active.get())
         .finish()
    }
}
