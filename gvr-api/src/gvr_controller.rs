use bytemuck::Zeroable;
use std::convert::TryFrom;
use std::ops::{Index, IndexMut};
use crate::error::ButtonCountError;
use crate::{Quatf, Vec2f, Vec3f};

/// The C++ names of the controller's vector types.
pub type ControllerVec2 = Vec2f;
pub type ControllerVec3 = Vec3f;
pub type ControllerQuat = Quatf;

/// Controller initialization options: which kinds of events to report.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ControllerApiOptions {
    pub enable_orientation: bool,
    pub enable_touch: bool,
    pub enable_gyro: bool,
    pub enable_accel: bool,
    pub enable_gestures: bool,
}

impl ControllerApiOptions {
    /// Every kind of event enabled.
    pub fn all() -> Self {
        Self {
            enable_orientation: true,
            enable_touch: true,
            enable_gyro: true,
            enable_accel: true,
            enable_gestures: true,
        }
    }
}

gvr_enum! {
    /// Health of the controller API.
    ///
    /// `Ok` only says that the underlying service works, not that a
    /// controller is connected. Every other value is a permanent failure that
    /// needs external action, such as granting a permission or upgrading the
    /// VR service.
    pub enum ControllerApiStatus as "gvr_controller_api_status" {
        Ok = 0 => "GVR_CONTROLLER_API_OK",
        /// The device does not support controllers.
        Unsupported = 1 => "GVR_CONTROLLER_API_UNSUPPORTED",
        /// The app is not authorized to use the service.
        NotAuthorized = 2 => "GVR_CONTROLLER_API_NOT_AUTHORIZED",
        /// The VR service is not present.
        Unavailable = 3 => "GVR_CONTROLLER_API_UNAVAILABLE",
        /// The VR service is too old.
        ServiceObsolete = 4 => "GVR_CONTROLLER_API_SERVICE_OBSOLETE",
        /// The VR service is too new for this client.
        ClientObsolete = 5 => "GVR_CONTROLLER_API_CLIENT_OBSOLETE",
        /// The VR service is malfunctioning.
        Malfunction = 6 => "GVR_CONTROLLER_API_MALFUNCTION",
    }
}

impl ControllerApiStatus {
    pub fn is_ok(self) -> bool {
        self == ControllerApiStatus::Ok
    }
}

gvr_enum! {
    /// Connection state of the controller. The runtime moves through these in
    /// order and may drop back to `Disconnected` from any of them.
    pub enum ControllerConnectionState as "gvr_controller_connection_state" {
        Disconnected = 0 => "GVR_CONTROLLER_DISCONNECTED",
        Scanning = 1 => "GVR_CONTROLLER_SCANNING",
        Connecting = 2 => "GVR_CONTROLLER_CONNECTING",
        Connected = 3 => "GVR_CONTROLLER_CONNECTED",
    }
}

impl ControllerConnectionState {
    pub fn is_connected(self) -> bool {
        self == ControllerConnectionState::Connected
    }
}

gvr_enum! {
    /// Controller buttons. There are five physical buttons; `None` is a
    /// placeholder that keeps the per-button arrays indexable by ordinal.
    pub enum ControllerButton as "gvr_controller_button" {
        None = 0 => "GVR_CONTROLLER_BUTTON_NONE",
        /// Touchpad click.
        Click = 1 => "GVR_CONTROLLER_BUTTON_CLICK",
        Home = 2 => "GVR_CONTROLLER_BUTTON_HOME",
        App = 3 => "GVR_CONTROLLER_BUTTON_APP",
        VolumeUp = 4 => "GVR_CONTROLLER_BUTTON_VOLUME_UP",
        VolumeDown = 5 => "GVR_CONTROLLER_BUTTON_VOLUME_DOWN",
    }
}

/// One flag per [`ControllerButton`], laid out exactly like the C
/// `bool[GVR_CONTROLLER_BUTTON_COUNT]` arrays.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ButtonSet([bool; ControllerButton::COUNT]);

impl ButtonSet {
    pub fn new(flags: [bool; ControllerButton::COUNT]) -> Self {
        ButtonSet(flags)
    }

    pub fn as_array(&self) -> &[bool; ControllerButton::COUNT] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0 = [false; ControllerButton::COUNT];
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|b| *b)
    }

    /// Buttons whose flag is set, in ordinal order.
    pub fn iter_set(&self) -> impl Iterator<Item = ControllerButton> + '_ {
        ControllerButton::ALL.iter().cloned().filter(move |b| self[*b])
    }
}

impl<'a> TryFrom<&'a [bool]> for ButtonSet {
    type Error = ButtonCountError;

    fn try_from(flags: &'a [bool]) -> Result<ButtonSet, ButtonCountError> {
        if flags.len() != ControllerButton::COUNT {
            return Err(ButtonCountError {
                expected: ControllerButton::COUNT,
                actual: flags.len(),
            });
        }
        let mut set = ButtonSet::default();
        set.0.copy_from_slice(flags);
        Ok(set)
    }
}

impl Index<ControllerButton> for ButtonSet {
    type Output = bool;

    fn index(&self, button: ControllerButton) -> &bool {
        &self.0[button as usize]
    }
}

impl IndexMut<ControllerButton> for ButtonSet {
    fn index_mut(&mut self, button: ControllerButton) -> &mut bool {
        &mut self.0[button as usize]
    }
}

/// The controller state at a given moment, as filled in by the runtime on
/// each poll.
///
/// Some fields are *transient*: they report an event and are true for exactly
/// one snapshot after it. Resetting them is up to the runtime that produces
/// the snapshots; this type does not enforce it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ControllerState {
    pub api_status: ControllerApiStatus,
    pub connection_state: ControllerConnectionState,

    /// Controller orientation in Start Space: +X right, +Y up, +Z forward,
    /// where "right" and "forward" are fixed when the controller initializes
    /// and redefined by a recenter. The controller's Start Space may drift
    /// from the headset's; recentering brings them back in sync.
    pub orientation: Quatf,
    /// Latest gyro reading, in Start Space.
    pub gyro: Vec3f,
    /// Latest accelerometer reading, in Start Space.
    pub accel: Vec3f,

    pub is_touching: bool,
    /// Normalized touch position, (0,0) top-left to (1,1) bottom-right. When
    /// not touching, the position of the last touch.
    pub touch_pos: Vec2f,
    /// Touch started (transient).
    pub touch_down: bool,
    /// Touch ended (transient).
    pub touch_up: bool,

    /// A recenter just finished (transient). When set, `orientation` is
    /// already relative to the new center.
    pub recentered: bool,
    /// True on every snapshot while the recenter gesture is in progress.
    /// Prefer `recentered` unless something must happen during the gesture.
    pub recentering: bool,

    /// Whether each button is pressed right now.
    pub button_state: ButtonSet,
    /// Whether each button was just pressed (transient).
    pub button_down: ButtonSet,
    /// Whether each button was just released (transient).
    pub button_up: ButtonSet,

    pub last_orientation_timestamp: i64,
    pub last_gyro_timestamp: i64,
    pub last_accel_timestamp: i64,
    pub last_touch_timestamp: i64,
    pub last_button_timestamp: i64,
}

impl ControllerState {
    pub fn is_pressed(&self, button: ControllerButton) -> bool {
        self.button_state[button]
    }

    pub fn just_pressed(&self, button: ControllerButton) -> bool {
        self.button_down[button]
    }

    pub fn just_released(&self, button: ControllerButton) -> bool {
        self.button_up[button]
    }

    /// Clears every transient flag, leaving the persistent fields intact.
    pub fn clear_transients(&mut self) {
        self.touch_down = false;
        self.touch_up = false;
        self.recentered = false;
        self.button_down.clear();
        self.button_up.clear();
    }

    pub fn has_transients(&self) -> bool {
        self.touch_down || self.touch_up || self.recentered ||
            self.button_down.any() || self.button_up.any()
    }
}
