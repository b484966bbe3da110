//! Data-layout contract shared between a client application and the Google VR
//! runtime.
//!
//! Every type in this crate is a plain `#[repr(C)]` value that can cross the
//! boundary to the runtime unchanged. The runtime itself is opaque: it is only
//! ever reached through the handles defined in the [`ffi`] module.

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;

pub mod error;
pub mod ffi;
pub mod gvr_audio;
pub mod gvr_bool_parameter;
pub mod gvr_clock;
pub mod gvr_controller;
pub mod gvr_eye;
pub mod gvr_geometry;
pub mod gvr_head_pose;
pub mod gvr_render_params;

pub use error::{ButtonCountError, DiscriminantError};
pub use gvr_audio::{AudioMaterialName, AudioMaterialType, AudioRenderingMode, AudioSoundId};
pub use gvr_bool_parameter::{BoolParameter, BoolParameterId, BoolParameters};
pub use gvr_clock::ClockTimePoint;
pub use gvr_controller::{ButtonSet, ControllerApiOptions, ControllerApiStatus, ControllerButton,
                         ControllerConnectionState, ControllerQuat, ControllerState,
                         ControllerVec2, ControllerVec3};
pub use gvr_eye::Eye;
pub use gvr_geometry::{Mat3f, Mat4f, Quatf, Recti, Rectf, Sizei, Vec2f, Vec3f};
pub use gvr_head_pose::HeadPose;
pub use gvr_render_params::RenderParams;
