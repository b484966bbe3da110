use gvr_api::ffi::{gvr_context, gvr_render_params_list};
use gvr_api::{BoolParameter, ClockTimePoint, ControllerApiOptions, ControllerState, HeadPose,
              RenderParams};
use std::ptr::NonNull;

/// Entry points of the external VR runtime.
///
/// Every pointer a `create_*` method hands out is owned by the runtime and
/// stays valid until it is passed to the matching `destroy_*` method. The
/// `unsafe` methods require pointers obtained that way and not yet destroyed;
/// the handle types in this crate uphold that for their callers.
pub trait GvrRuntime {
    /// Creates a context, or `None` if the runtime cannot start.
    fn create_context(&self) -> Option<NonNull<gvr_context>>;

    unsafe fn destroy_context(&self, ctx: NonNull<gvr_context>);

    /// The current point on the runtime's monotonic clock.
    fn time_point_now(&self) -> ClockTimePoint;

    /// The head pose predicted for `time`, in start space.
    unsafe fn head_pose_in_start_space(&self, ctx: NonNull<gvr_context>, time: ClockTimePoint) -> HeadPose;

    /// Re-centers the reference space on the current head orientation.
    unsafe fn reset_tracking(&self, ctx: NonNull<gvr_context>);

    unsafe fn bool_parameter(&self, ctx: NonNull<gvr_context>, param: BoolParameter) -> bool;

    unsafe fn set_bool_parameter(&self, ctx: NonNull<gvr_context>, param: BoolParameter, value: bool);

    /// Creates an empty render params list owned by `ctx`.
    unsafe fn create_render_params_list(&self, ctx: NonNull<gvr_context>)
                                        -> Option<NonNull<gvr_render_params_list>>;

    unsafe fn destroy_render_params_list(&self, list: NonNull<gvr_render_params_list>);

    /// Replaces the contents of `list` with the runtime's recommended
    /// per-eye parameters.
    unsafe fn fill_recommended_render_params(&self, ctx: NonNull<gvr_context>,
                                             list: NonNull<gvr_render_params_list>);

    unsafe fn render_params_list_len(&self, list: NonNull<gvr_render_params_list>) -> usize;

    /// `index` must be below the list length.
    unsafe fn render_params_list_get(&self, list: NonNull<gvr_render_params_list>, index: usize)
                                     -> RenderParams;

    /// Replaces the entry at `index`, or appends when `index` equals the list
    /// length.
    unsafe fn render_params_list_set(&self, list: NonNull<gvr_render_params_list>, index: usize,
                                     params: &RenderParams);
}

/// Controller entry points of the external runtime.
///
/// The runtime is responsible for the snapshot contract of
/// [`ControllerState`]: transient flags are set for exactly one update after
/// their event, and the last touch position is kept after release.
pub trait ControllerRuntime: GvrRuntime {
    /// Starts controller reporting on `ctx` with the given options.
    unsafe fn controller_init(&self, ctx: NonNull<gvr_context>, options: &ControllerApiOptions);

    /// Overwrites `state` with the latest snapshot.
    unsafe fn controller_update(&self, ctx: NonNull<gvr_context>, state: &mut ControllerState);

    unsafe fn controller_shutdown(&self, ctx: NonNull<gvr_context>);
}
