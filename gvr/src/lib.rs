//! Handles over an external Google VR runtime.
//!
//! The runtime is reached through the [`GvrRuntime`] and
//! [`ControllerRuntime`] traits. [`Context`], [`RenderParamsList`] and
//! [`Controller`] own the runtime resources they wrap and give them back on
//! drop. All data crossing the boundary is defined in `gvr_api`, which this
//! crate re-exports.

extern crate gvr_api;
#[macro_use]
extern crate log;
#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod api;
mod context;
mod controller;
mod gamepad;
mod gvr_error;
mod render_params_list;
mod runtime;
mod utils;

pub use gvr_api::*;
pub use context::{Context, PREDICTION_OFFSET};
pub use controller::Controller;
pub use gamepad::{GamepadButton, GamepadState};
pub use gvr_error::GvrError;
pub use render_params_list::RenderParamsList;
pub use runtime::{ControllerRuntime, GvrRuntime};
