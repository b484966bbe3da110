use gvr_api::{ControllerButton, ControllerState};

// Order in which the physical buttons are reported. The touchpad click comes
// first so that it lines up with the touchpad axes.
const BUTTON_ORDER: [ControllerButton; 5] = [ControllerButton::Click,
                                            ControllerButton::Home,
                                            ControllerButton::App,
                                            ControllerButton::VolumeUp,
                                            ControllerButton::VolumeDown];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct GamepadButton {
    pub pressed: bool,
    pub touched: bool,
}

/// A controller snapshot reshaped as a generic gamepad: normalized axes, a
/// flat button list and an orientation-only pose.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct GamepadState {
    pub gamepad_id: u32,
    pub connected: bool,
    /// Latest event timestamp of any kind, in nanoseconds.
    pub timestamp: i64,
    /// Touchpad position mapped to `[-1, 1]` on both axes; `[0, 0]` when not
    /// touching.
    pub axes: [f64; 2],
    pub buttons: Vec<GamepadButton>,
    pub orientation: Option<[f32; 4]>,
    pub angular_velocity: Option<[f32; 3]>,
    pub linear_acceleration: Option<[f32; 3]>,
}

impl GamepadState {
    pub fn from_controller(gamepad_id: u32, state: &ControllerState) -> GamepadState {
        let mut out = GamepadState::default();
        out.gamepad_id = gamepad_id;
        out.connected = state.connection_state.is_connected();
        out.timestamp = *[state.last_orientation_timestamp,
                          state.last_gyro_timestamp,
                          state.last_accel_timestamp,
                          state.last_touch_timestamp,
                          state.last_button_timestamp].iter().max().unwrap_or(&0);

        // Touchpad: (0,0) is the top-left and (1,1) the bottom-right.
        out.axes = if state.is_touching {
            [state.touch_pos.x as f64 * 2.0 - 1.0,
             state.touch_pos.y as f64 * 2.0 - 1.0]
        } else {
            [0.0, 0.0]
        };

        for button in &BUTTON_ORDER {
            let pressed = state.button_state[*button];
            // Only the touchpad can be touched without being pressed.
            let touched = if *button == ControllerButton::Click {
                state.is_touching || pressed
            } else {
                pressed
            };
            out.buttons.push(GamepadButton {
                pressed: pressed,
                touched: touched,
            });
        }

        if !out.connected {
            return out;
        }
        out.orientation = Some(state.orientation.into());
        out.angular_velocity = Some(state.gyro.into());
        out.linear_acceleration = Some(state.accel.into());
        out
    }
}
