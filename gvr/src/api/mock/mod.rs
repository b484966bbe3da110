mod runtime;

pub use self::runtime::MockRuntime;

use gvr_api::{ClockTimePoint, ControllerApiStatus, ControllerButton, ControllerConnectionState,
              Eye, HeadPose, Quatf, Rectf, RenderParams, Vec2f, Vec3f};
use std::time::Duration;

/// Drives a [`MockRuntime`], either through its remote sender or
/// [`MockRuntime::send`].
#[derive(Debug, Clone, PartialEq)]
pub enum MockControlMsg {
    SetHeadPose(HeadPose),
    /// Pins the runtime clock to the given point.
    SetTime(ClockTimePoint),
    /// Moves a pinned clock forward. Ignored while the clock is not pinned.
    AdvanceTime(Duration),
    SetApiStatus(ControllerApiStatus),
    SetConnectionState(ControllerConnectionState),
    SetOrientation(Quatf),
    SetGyro(Vec3f),
    SetAccel(Vec3f),
    TouchDown(Vec2f),
    /// Moves an ongoing touch. Ignored while not touching.
    TouchMove(Vec2f),
    TouchUp,
    ButtonDown(ControllerButton),
    ButtonUp(ControllerButton),
    RecenterStart,
    RecenterEnd,
}

/// Initial state of a [`MockRuntime`].
#[derive(Debug, Clone)]
pub struct MockRuntimeInit {
    pub head_pose: HeadPose,
    pub api_status: ControllerApiStatus,
    pub connection_state: ControllerConnectionState,
    pub recommended_render_params: Vec<RenderParams>,
}

impl Default for MockRuntimeInit {
    fn default() -> MockRuntimeInit {
        // Simulates a Daydream View headset on a 2560x1440 phone, each eye
        // rendered into one half of the target.
        let left_fov = Rectf::new(50.28, 38.77, 47.24, 47.24);
        let right_fov = Rectf::new(38.77, 50.28, 47.24, 47.24);
        MockRuntimeInit {
            head_pose: HeadPose::IDENTITY,
            api_status: ControllerApiStatus::Ok,
            connection_state: ControllerConnectionState::Connected,
            recommended_render_params: vec![
                RenderParams::new(Eye::Left, Rectf::new(0.0, 0.5, 0.0, 1.0), left_fov),
                RenderParams::new(Eye::Right, Rectf::new(0.5, 1.0, 0.0, 1.0), right_fov),
            ],
        }
    }
}
