use gvr::api::{MockControlMsg, MockRuntime, MockRuntimeInit};
use gvr::{ClockTimePoint, Context, Controller, ControllerApiOptions, ControllerApiStatus,
          ControllerButton, ControllerConnectionState, GamepadState, GvrError, Quatf, Vec2f, Vec3f};
use std::thread;
use std::time::Duration;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn runtime() -> std::sync::Arc<MockRuntime> {
    init_logging();
    MockRuntime::new(MockRuntimeInit::default())
}

#[test]
fn touch_events_are_transient() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let mut controller = Controller::new(&context, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::TouchDown(Vec2f::new(0.2, 0.4)));
    let state = *controller.poll();
    assert!(state.is_touching);
    assert!(state.touch_down);
    assert_eq!(state.touch_pos, Vec2f::new(0.2, 0.4));

    let state = *controller.poll();
    assert!(state.is_touching);
    assert!(!state.touch_down);

    runtime.send(MockControlMsg::TouchMove(Vec2f::new(0.6, 0.8)));
    runtime.send(MockControlMsg::TouchUp);
    let state = *controller.poll();
    assert!(!state.is_touching);
    assert!(state.touch_up);
    // The last known position survives the release.
    assert_eq!(state.touch_pos, Vec2f::new(0.6, 0.8));

    let state = *controller.poll();
    assert!(!state.touch_up);
    assert_eq!(state.touch_pos, Vec2f::new(0.6, 0.8));
}

#[test]
fn touch_move_without_touch_keeps_last_position() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let mut controller = Controller::new(&context, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::TouchDown(Vec2f::new(0.5, 0.5)));
    runtime.send(MockControlMsg::TouchUp);
    runtime.send(MockControlMsg::TouchMove(Vec2f::new(0.9, 0.9)));
    let state = *controller.poll();
    assert!(state.touch_down && state.touch_up);
    assert_eq!(state.touch_pos, Vec2f::new(0.5, 0.5));
}

#[test]
fn recentering_spans_polls_and_recentered_lasts_one() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let mut controller = Controller::new(&context, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::SetOrientation(Quatf::new(0.0, 0.3826834, 0.0, 0.9238795)));
    runtime.send(MockControlMsg::RecenterStart);
    for _ in 0..3 {
        let state = controller.poll();
        assert!(state.recentering);
        assert!(!state.recentered);
    }

    runtime.send(MockControlMsg::RecenterEnd);
    let state = *controller.poll();
    assert!(state.recentered);
    assert!(!state.recentering);
    assert_eq!(state.orientation, Quatf::IDENTITY);

    let state = controller.poll();
    assert!(!state.recentered);
    assert!(!state.recentering);
}

#[test]
fn button_edges_are_transient() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let mut controller = Controller::new(&context, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::ButtonDown(ControllerButton::Click));
    let state = *controller.poll();
    assert!(state.is_pressed(ControllerButton::Click));
    assert!(state.just_pressed(ControllerButton::Click));
    assert!(!state.just_pressed(ControllerButton::Home));

    let state = *controller.poll();
    assert!(state.is_pressed(ControllerButton::Click));
    assert!(!state.just_pressed(ControllerButton::Click));

    runtime.send(MockControlMsg::ButtonUp(ControllerButton::Click));
    let state = *controller.poll();
    assert!(!state.is_pressed(ControllerButton::Click));
    assert!(state.just_released(ControllerButton::Click));

    let state = *controller.poll();
    assert!(!state.just_released(ControllerButton::Click));
    assert!(!state.has_transients());
}

#[test]
fn event_timestamps_follow_the_clock() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let mut controller = Controller::new(&context, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::SetTime(ClockTimePoint::from_nanos(5_000)));
    runtime.send(MockControlMsg::SetGyro(Vec3f::new(0.0, 0.1, 0.0)));
    runtime.send(MockControlMsg::AdvanceTime(Duration::from_nanos(1_000)));
    runtime.send(MockControlMsg::ButtonDown(ControllerButton::App));

    let state = controller.poll();
    assert_eq!(state.last_gyro_timestamp, 5_000);
    assert_eq!(state.last_button_timestamp, 6_000);
    assert_eq!(state.last_touch_timestamp, 0);
}

#[test]
fn disabled_event_kinds_are_not_reported() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let options = ControllerApiOptions {
        enable_orientation: true,
        enable_touch: true,
        ..ControllerApiOptions::default()
    };
    let mut controller = Controller::new(&context, options).unwrap();
    assert_eq!(controller.options(), &options);

    runtime.send(MockControlMsg::SetGyro(Vec3f::new(1.0, 2.0, 3.0)));
    runtime.send(MockControlMsg::SetAccel(Vec3f::new(0.0, -9.8, 0.0)));
    runtime.send(MockControlMsg::TouchDown(Vec2f::new(0.1, 0.1)));
    let state = controller.poll();
    assert_eq!(state.gyro, Vec3f::default());
    assert_eq!(state.accel, Vec3f::default());
    assert_eq!(state.last_gyro_timestamp, 0);
    assert!(state.is_touching);
}

#[test]
fn failed_api_refuses_to_start() {
    init_logging();
    let runtime = MockRuntime::new(MockRuntimeInit {
        api_status: ControllerApiStatus::NotAuthorized,
        ..MockRuntimeInit::default()
    });
    let context = Context::new(runtime.clone()).unwrap();
    let result = Controller::new(&context, ControllerApiOptions::all());
    match result {
        Err(err) => {
            assert_eq!(err, GvrError::ControllerApi(ControllerApiStatus::NotAuthorized));
            assert_eq!(err.to_string(),
                       "controller API unavailable: GVR_CONTROLLER_API_NOT_AUTHORIZED");
        }
        Ok(_) => panic!("controller started with a failed API"),
    }
    // The refused session is shut down again and the context stays usable.
    assert_eq!(runtime.live_controller_sessions(), 0);
    assert!(!context.has_controller());
}

#[test]
fn every_session_sees_each_event_once() {
    let runtime = runtime();
    let first = Context::new(runtime.clone()).unwrap();
    let second = Context::new(runtime.clone()).unwrap();
    let mut a = Controller::new(&first, ControllerApiOptions::all()).unwrap();
    let mut b = Controller::new(&second, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::ButtonDown(ControllerButton::App));
    assert!(a.poll().just_pressed(ControllerButton::App));
    let state = *b.poll();
    assert!(state.just_pressed(ControllerButton::App));
    assert!(state.is_pressed(ControllerButton::App));

    assert!(!a.poll().just_pressed(ControllerButton::App));
    assert!(!b.poll().just_pressed(ControllerButton::App));
    assert!(b.state().is_pressed(ControllerButton::App));
}

#[test]
fn sessions_filter_events_by_their_own_options() {
    let runtime = runtime();
    let first = Context::new(runtime.clone()).unwrap();
    let second = Context::new(runtime.clone()).unwrap();
    let touch_only = ControllerApiOptions {
        enable_touch: true,
        ..ControllerApiOptions::default()
    };
    let mut a = Controller::new(&first, touch_only).unwrap();
    let mut b = Controller::new(&second, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::SetGyro(Vec3f::new(0.0, 1.0, 0.0)));
    runtime.send(MockControlMsg::TouchDown(Vec2f::new(0.3, 0.3)));
    let state = *a.poll();
    assert_eq!(state.gyro, Vec3f::default());
    assert!(state.touch_down);
    let state = *b.poll();
    assert_eq!(state.gyro, Vec3f::new(0.0, 1.0, 0.0));
    assert!(state.touch_down);
}

#[test]
fn late_session_starts_from_held_inputs_without_edges() {
    let runtime = runtime();
    let first = Context::new(runtime.clone()).unwrap();
    let second = Context::new(runtime.clone()).unwrap();
    let _a = Controller::new(&first, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::ButtonDown(ControllerButton::Home));
    runtime.send(MockControlMsg::TouchDown(Vec2f::new(0.7, 0.2)));
    let b = Controller::new(&second, ControllerApiOptions::all()).unwrap();
    let state = b.state();
    assert!(state.is_pressed(ControllerButton::Home));
    assert!(state.is_touching);
    assert_eq!(state.touch_pos, Vec2f::new(0.7, 0.2));
    assert!(!state.has_transients());
}

#[test]
fn one_controller_session_per_context() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let mut first = Controller::new(&context, ControllerApiOptions::all()).unwrap();
    assert!(context.has_controller());

    let second = Controller::new(&context, ControllerApiOptions::all());
    assert_eq!(second.err(), Some(GvrError::ControllerSessionActive));

    // The refused second session must not tear down the first one.
    assert_eq!(first.poll().api_status, ControllerApiStatus::Ok);
    assert_eq!(runtime.live_controller_sessions(), 1);

    drop(first);
    assert!(!context.has_controller());
    assert_eq!(runtime.live_controller_sessions(), 0);
    let mut again = Controller::new(&context, ControllerApiOptions::all()).unwrap();
    assert_eq!(again.poll().api_status, ControllerApiStatus::Ok);
}

#[test]
fn status_failure_after_start_reports_only_status() {
    let runtime = runtime();
    let context = Context::new(runtime.clone()).unwrap();
    let mut controller = Controller::new(&context, ControllerApiOptions::all()).unwrap();

    runtime.send(MockControlMsg::ButtonDown(ControllerButton::Home));
    runtime.send(MockControlMsg::SetApiStatus(ControllerApiStatus::Malfunction));
    let state = controller.poll();
    assert_eq!(state.api_status, ControllerApiStatus::Malfunction);
    assert!(!state.is_pressed(ControllerButton::Home));
}

#[test]
fn remote_drives_connection_from_another_thread() {
    init_logging();
    let (runtime, remote) = MockRuntime::new_with_remote(MockRuntimeInit {
        connection_state: ControllerConnectionState::Disconnected,
        ..MockRuntimeInit::default()
    });
    let context = Context::new(runtime).unwrap();
    let mut controller = Controller::new(&context, ControllerApiOptions::all()).unwrap();
    assert_eq!(controller.state().connection_state, ControllerConnectionState::Disconnected);

    thread::spawn(move || {
        for state in &[ControllerConnectionState::Scanning,
                       ControllerConnectionState::Connecting,
                       ControllerConnectionState::Connected] {
            remote.send(MockControlMsg::SetConnectionState(*state)).unwrap();
        }
        remote.send(MockControlMsg::ButtonDown(ControllerButton::VolumeUp)).unwrap();
    }).join().unwrap();

    let state = *controller.poll();
    assert!(state.connection_state.is_connected());
    assert!(state.just_pressed(ControllerButton::VolumeUp));

    let pad = GamepadState::from_controller(controller.id(), &state);
    assert!(pad.connected);
    assert!(pad.buttons[3].pressed);
}
