use super::{MockControlMsg, MockRuntimeInit};
use crate::runtime::{ControllerRuntime, GvrRuntime};
use gvr_api::ffi::{gvr_context, gvr_render_params_list};
use gvr_api::{BoolParameter, BoolParameters, ClockTimePoint, ControllerApiOptions,
              ControllerApiStatus, ControllerState, HeadPose, Mat3f, Quatf, RenderParams};
use std::collections::HashMap;
use std::ptr::NonNull;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

/// An in-process runtime for tests and headless runs.
///
/// Handles are plain tokens that are never dereferenced. Controller events are
/// queued as [`MockControlMsg`]s and folded into the state of every active
/// controller session, filtered by that session's options. Each
/// `controller_update` hands out the session's current snapshot and then
/// clears its transient flags, so each event is reported by exactly one
/// update per session.
pub struct MockRuntime {
    state: Mutex<MockState>,
}

struct MockState {
    receiver: Option<Receiver<MockControlMsg>>,
    pinned_clock: Option<ClockTimePoint>,
    head_pose: HeadPose,
    recommended: Vec<RenderParams>,
    next_handle: usize,
    contexts: HashMap<usize, MockContext>,
    lists: HashMap<usize, Vec<RenderParams>>,
    // The physical controller, with every kind of event enabled. New sessions
    // start from it.
    device: ControllerState,
}

#[derive(Default)]
struct MockContext {
    params: BoolParameters,
    session: Option<MockSession>,
}

struct MockSession {
    options: ControllerApiOptions,
    state: ControllerState,
}

impl MockRuntime {
    pub fn new(init: MockRuntimeInit) -> Arc<MockRuntime> {
        Arc::new(MockRuntime {
            state: Mutex::new(MockState::new(init, None)),
        })
    }

    /// A runtime plus a sender that can drive it from any thread. Messages are
    /// picked up on the runtime's next call.
    pub fn new_with_remote(init: MockRuntimeInit) -> (Arc<MockRuntime>, Sender<MockControlMsg>) {
        let (send, rcv) = channel();
        let runtime = MockRuntime {
            state: Mutex::new(MockState::new(init, Some(rcv))),
        };
        (Arc::new(runtime), send)
    }

    /// Applies a message right away.
    pub fn send(&self, msg: MockControlMsg) {
        let mut state = self.lock();
        state.drain();
        state.handle_msg(msg);
    }

    pub fn live_contexts(&self) -> usize {
        self.lock().contexts.len()
    }

    pub fn live_render_params_lists(&self) -> usize {
        self.lock().lists.len()
    }

    /// Number of contexts with a controller session.
    pub fn live_controller_sessions(&self) -> usize {
        self.lock().contexts.values().filter(|c| c.session.is_some()).count()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // Poisoning is ignored: the state stays consistent between messages.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MockState {
    fn new(init: MockRuntimeInit, receiver: Option<Receiver<MockControlMsg>>) -> MockState {
        let mut device = ControllerState::default();
        device.api_status = init.api_status;
        device.connection_state = init.connection_state;
        device.orientation = Quatf::IDENTITY;

        MockState {
            receiver: receiver,
            pinned_clock: None,
            head_pose: init.head_pose,
            recommended: init.recommended_render_params,
            next_handle: 0,
            contexts: HashMap::new(),
            lists: HashMap::new(),
            device: device,
        }
    }

    fn new_handle(&mut self) -> usize {
        // Tokens start at 1 so they are never null, and step by 16 so they
        // look like aligned addresses in logs.
        self.next_handle += 1;
        self.next_handle * 16
    }

    fn now(&self) -> ClockTimePoint {
        match self.pinned_clock {
            Some(time) => time,
            None => ClockTimePoint::from_nanos(time::precise_time_ns() as i64),
        }
    }

    fn drain(&mut self) {
        let msgs: Vec<MockControlMsg> = match self.receiver {
            Some(ref rcv) => rcv.try_iter().collect(),
            None => return,
        };
        for msg in msgs {
            self.handle_msg(msg);
        }
    }

    fn handle_msg(&mut self, msg: MockControlMsg) {
        match msg {
            MockControlMsg::SetHeadPose(pose) => self.head_pose = pose,
            MockControlMsg::SetTime(time) => self.pinned_clock = Some(time),
            MockControlMsg::AdvanceTime(delta) => match self.pinned_clock {
                Some(time) => self.pinned_clock = Some(time + delta),
                None => warn!("mock clock is not pinned, ignoring {:?}", delta),
            },
            msg => {
                if let MockControlMsg::TouchMove(_) = msg {
                    if !self.device.is_touching {
                        warn!("touch move without an active touch");
                    }
                }
                let now = self.now().nanos();
                apply_event(&mut self.device, &ControllerApiOptions::all(), &msg, now);
                self.device.clear_transients();
                for session in self.contexts.values_mut().filter_map(|c| c.session.as_mut()) {
                    apply_event(&mut session.state, &session.options, &msg, now);
                }
            }
        }
    }
}

// Folds a controller event into `controller`, skipping kinds that `options`
// disables.
fn apply_event(controller: &mut ControllerState, options: &ControllerApiOptions,
               msg: &MockControlMsg, now: i64) {
    match *msg {
        MockControlMsg::SetApiStatus(status) => controller.api_status = status,
        MockControlMsg::SetConnectionState(state) => controller.connection_state = state,
        MockControlMsg::SetOrientation(q) if options.enable_orientation => {
            controller.orientation = q;
            controller.last_orientation_timestamp = now;
        }
        MockControlMsg::SetGyro(v) if options.enable_gyro => {
            controller.gyro = v;
            controller.last_gyro_timestamp = now;
        }
        MockControlMsg::SetAccel(v) if options.enable_accel => {
            controller.accel = v;
            controller.last_accel_timestamp = now;
        }
        MockControlMsg::TouchDown(pos) if options.enable_touch => {
            if !controller.is_touching {
                controller.touch_down = true;
            }
            controller.is_touching = true;
            controller.touch_pos = pos;
            controller.last_touch_timestamp = now;
        }
        MockControlMsg::TouchMove(pos) if options.enable_touch => {
            if controller.is_touching {
                controller.touch_pos = pos;
                controller.last_touch_timestamp = now;
            }
        }
        MockControlMsg::TouchUp if options.enable_touch => {
            if controller.is_touching {
                controller.is_touching = false;
                controller.touch_up = true;
                controller.last_touch_timestamp = now;
            }
        }
        MockControlMsg::ButtonDown(button) => {
            if !controller.button_state[button] {
                controller.button_state[button] = true;
                controller.button_down[button] = true;
                controller.last_button_timestamp = now;
            }
        }
        MockControlMsg::ButtonUp(button) => {
            if controller.button_state[button] {
                controller.button_state[button] = false;
                controller.button_up[button] = true;
                controller.last_button_timestamp = now;
            }
        }
        MockControlMsg::RecenterStart => controller.recentering = true,
        MockControlMsg::RecenterEnd => {
            if controller.recentering {
                controller.recentering = false;
                controller.recentered = true;
                // Orientation is relative to the new center from now on.
                controller.orientation = Quatf::IDENTITY;
                controller.last_orientation_timestamp = now;
            }
        }
        ref msg => trace!("controller event disabled by options: {:?}", msg),
    }
}

// Starting snapshot of a session opened while the device is in `device`. Kinds
// the session does not listen to keep their zero values.
fn session_state(device: &ControllerState, options: &ControllerApiOptions) -> ControllerState {
    let mut state = ControllerState::default();
    state.api_status = device.api_status;
    state.connection_state = device.connection_state;
    state.recentering = device.recentering;
    state.button_state = device.button_state;
    state.last_button_timestamp = device.last_button_timestamp;
    state.orientation = if options.enable_orientation {
        state.last_orientation_timestamp = device.last_orientation_timestamp;
        device.orientation
    } else {
        Quatf::IDENTITY
    };
    if options.enable_gyro {
        state.gyro = device.gyro;
        state.last_gyro_timestamp = device.last_gyro_timestamp;
    }
    if options.enable_accel {
        state.accel = device.accel;
        state.last_accel_timestamp = device.last_accel_timestamp;
    }
    if options.enable_touch {
        state.is_touching = device.is_touching;
        state.touch_pos = device.touch_pos;
        state.last_touch_timestamp = device.last_touch_timestamp;
    }
    state
}

impl GvrRuntime for MockRuntime {
    fn create_context(&self) -> Option<NonNull<gvr_context>> {
        let mut state = self.lock();
        let handle = state.new_handle();
        state.contexts.insert(handle, MockContext::default());
        NonNull::new(handle as *mut gvr_context)
    }

    unsafe fn destroy_context(&self, ctx: NonNull<gvr_context>) {
        if self.lock().contexts.remove(&(ctx.as_ptr() as usize)).is_none() {
            warn!("destroying unknown mock context {:p}", ctx);
        }
    }

    fn time_point_now(&self) -> ClockTimePoint {
        let mut state = self.lock();
        state.drain();
        state.now()
    }

    unsafe fn head_pose_in_start_space(&self, _ctx: NonNull<gvr_context>, _time: ClockTimePoint)
                                       -> HeadPose {
        let mut state = self.lock();
        state.drain();
        state.head_pose
    }

    unsafe fn reset_tracking(&self, _ctx: NonNull<gvr_context>) {
        let mut state = self.lock();
        state.drain();
        state.head_pose.rotation = Mat3f::IDENTITY;
        for row in 0..3 {
            for col in 0..3 {
                state.head_pose.object_from_reference_matrix.m[row][col] =
                    if row == col { 1.0 } else { 0.0 };
            }
        }
    }

    unsafe fn bool_parameter(&self, ctx: NonNull<gvr_context>, param: BoolParameter) -> bool {
        match self.lock().contexts.get(&(ctx.as_ptr() as usize)) {
            Some(context) => context.params.get(param),
            None => {
                warn!("bool parameter read on unknown mock context {:p}", ctx);
                false
            }
        }
    }

    unsafe fn set_bool_parameter(&self, ctx: NonNull<gvr_context>, param: BoolParameter, value: bool) {
        match self.lock().contexts.get_mut(&(ctx.as_ptr() as usize)) {
            Some(context) => context.params.set(param, value),
            None => warn!("bool parameter write on unknown mock context {:p}", ctx),
        }
    }

    unsafe fn create_render_params_list(&self, ctx: NonNull<gvr_context>)
                                        -> Option<NonNull<gvr_render_params_list>> {
        let mut state = self.lock();
        if !state.contexts.contains_key(&(ctx.as_ptr() as usize)) {
            return None;
        }
        let handle = state.new_handle();
        state.lists.insert(handle, Vec::new());
        NonNull::new(handle as *mut gvr_render_params_list)
    }

    unsafe fn destroy_render_params_list(&self, list: NonNull<gvr_render_params_list>) {
        if self.lock().lists.remove(&(list.as_ptr() as usize)).is_none() {
            warn!("destroying unknown mock render params list {:p}", list);
        }
    }

    unsafe fn fill_recommended_render_params(&self, _ctx: NonNull<gvr_context>,
                                             list: NonNull<gvr_render_params_list>) {
        let mut state = self.lock();
        let recommended = state.recommended.clone();
        if let Some(entries) = state.lists.get_mut(&(list.as_ptr() as usize)) {
            *entries = recommended;
        }
    }

    unsafe fn render_params_list_len(&self, list: NonNull<gvr_render_params_list>) -> usize {
        self.lock().lists.get(&(list.as_ptr() as usize)).map_or(0, |l| l.len())
    }

    unsafe fn render_params_list_get(&self, list: NonNull<gvr_render_params_list>, index: usize)
                                     -> RenderParams {
        self.lock()
            .lists
            .get(&(list.as_ptr() as usize))
            .and_then(|l| l.get(index).cloned())
            .unwrap_or_default()
    }

    unsafe fn render_params_list_set(&self, list: NonNull<gvr_render_params_list>, index: usize,
                                     params: &RenderParams) {
        let mut state = self.lock();
        let entries = match state.lists.get_mut(&(list.as_ptr() as usize)) {
            Some(entries) => entries,
            None => return,
        };
        if index < entries.len() {
            entries[index] = *params;
        } else if index == entries.len() {
            entries.push(*params);
        }
    }
}

impl ControllerRuntime for MockRuntime {
    unsafe fn controller_init(&self, ctx: NonNull<gvr_context>, options: &ControllerApiOptions) {
        let mut state = self.lock();
        state.drain();
        let device = state.device;
        match state.contexts.get_mut(&(ctx.as_ptr() as usize)) {
            Some(context) => {
                if context.session.is_some() {
                    warn!("restarting the controller session on {:p}", ctx);
                }
                context.session = Some(MockSession {
                    options: *options,
                    state: session_state(&device, options),
                });
            }
            None => warn!("controller init on unknown mock context {:p}", ctx),
        }
    }

    unsafe fn controller_update(&self, ctx: NonNull<gvr_context>, out: &mut ControllerState) {
        let mut state = self.lock();
        state.drain();

        let session = match state.contexts
                                 .get_mut(&(ctx.as_ptr() as usize))
                                 .and_then(|c| c.session.as_mut()) {
            Some(session) => session,
            None => {
                warn!("controller update without a controller session on {:p}", ctx);
                *out = ControllerState::default();
                out.api_status = ControllerApiStatus::Unavailable;
                return;
            }
        };

        if !session.state.api_status.is_ok() {
            // A failed API reports nothing but its status.
            *out = ControllerState::default();
            out.api_status = session.state.api_status;
            return;
        }

        *out = session.state;
        session.state.clear_transients();
    }

    unsafe fn controller_shutdown(&self, ctx: NonNull<gvr_context>) {
        if let Some(context) = self.lock().contexts.get_mut(&(ctx.as_ptr() as usize)) {
            context.session = None;
        }
    }
}
