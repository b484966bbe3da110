//! C-side names of the contract.
//!
//! The structs are the same types as the crate root exports; only the
//! spelling differs. The two handle types are opaque: they can never be
//! constructed or moved from Rust, only pointed to.

#![allow(non_camel_case_types)]

use std::marker::{PhantomData, PhantomPinned};

/// Primary context for invoking the runtime. Created and destroyed by the
/// runtime only.
#[repr(C)]
pub struct gvr_context {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Runtime-owned list of [`gvr_render_params`].
#[repr(C)]
pub struct gvr_render_params_list {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

pub type gvr_bool_parameter = crate::BoolParameter;
pub type gvr_eye = crate::Eye;
pub type gvr_sizei = crate::Sizei;
pub type gvr_recti = crate::Recti;
pub type gvr_rectf = crate::Rectf;
pub type gvr_vec2f = crate::Vec2f;
pub type gvr_vec3f = crate::Vec3f;
pub type gvr_mat3f = crate::Mat3f;
pub type gvr_mat4f = crate::Mat4f;
pub type gvr_quatf = crate::Quatf;
pub type gvr_clock_time_point = crate::ClockTimePoint;
pub type gvr_head_pose = crate::HeadPose;
pub type gvr_render_params = crate::RenderParams;
pub type gvr_controller_api_options = crate::ControllerApiOptions;
pub type gvr_controller_api_status = crate::ControllerApiStatus;
pub type gvr_controller_connection_state = crate::ControllerConnectionState;
pub type gvr_controller_button = crate::ControllerButton;
pub type gvr_controller_state = crate::ControllerState;
pub type gvr_audio_rendering_mode = crate::AudioRenderingMode;
pub type gvr_audio_material_type = crate::AudioMaterialType;
pub type gvr_audio_sound_id = crate::AudioSoundId;

pub const GVR_CHROMATIC_ABERRATION_CORRECTION_ENABLED: i32 = 0;
pub const GVR_SCANLINE_RACING_ENABLED: i32 = 1;
pub const GVR_NUM_BOOL_PARAMETERS: i32 = 2;

pub const GVR_LEFT_EYE: i32 = 0;
pub const GVR_RIGHT_EYE: i32 = 1;
pub const GVR_NUM_EYES: i32 = 2;

pub const GVR_CONTROLLER_API_OK: i32 = 0;
pub const GVR_CONTROLLER_API_UNSUPPORTED: i32 = 1;
pub const GVR_CONTROLLER_API_NOT_AUTHORIZED: i32 = 2;
pub const GVR_CONTROLLER_API_UNAVAILABLE: i32 = 3;
pub const GVR_CONTROLLER_API_SERVICE_OBSOLETE: i32 = 4;
pub const GVR_CONTROLLER_API_CLIENT_OBSOLETE: i32 = 5;
pub const GVR_CONTROLLER_API_MALFUNCTION: i32 = 6;

pub const GVR_CONTROLLER_DISCONNECTED: i32 = 0;
pub const GVR_CONTROLLER_SCANNING: i32 = 1;
pub const GVR_CONTROLLER_CONNECTING: i32 = 2;
pub const GVR_CONTROLLER_CONNECTED: i32 = 3;

pub const GVR_CONTROLLER_BUTTON_NONE: i32 = 0;
pub const GVR_CONTROLLER_BUTTON_CLICK: i32 = 1;
pub const GVR_CONTROLLER_BUTTON_HOME: i32 = 2;
pub const GVR_CONTROLLER_BUTTON_APP: i32 = 3;
pub const GVR_CONTROLLER_BUTTON_VOLUME_UP: i32 = 4;
pub const GVR_CONTROLLER_BUTTON_VOLUME_DOWN: i32 = 5;
pub const GVR_CONTROLLER_BUTTON_COUNT: i32 = 6;

pub const GVR_AUDIO_RENDERING_STEREO_PANNING: i32 = 0;
pub const GVR_AUDIO_RENDERING_BINAURAL_LOW_QUALITY: i32 = 1;
pub const GVR_AUDIO_RENDERING_BINAURAL_HIGH_QUALITY: i32 = 2;

pub const GVR_AUDIO_MATERIAL_TRANSPARENT: i32 = 0;
pub const GVR_AUDIO_MATERIAL_ACOUSTIC_CEILING_TILES: i32 = 1;
pub const GVR_AUDIO_MATERIAL_BRICK_BARE: i32 = 2;
pub const GVR_AUDIO_MATERIAL_BRICK_PAINTED: i32 = 3;
pub const GVR_AUDIO_MATERIAL_CONCRETE_BLOCK_COARSE: i32 = 4;
pub const GVR_AUDIO_MATERIAL_CONCRETE_BLOCK_PAINTED: i32 = 5;
pub const GVR_AUDIO_MATERIAL_CURTAIN_HEAVY: i32 = 6;
pub const GVR_AUDIO_MATERIAL_FIBER_GLASS_INSULATION: i32 = 7;
pub const GVR_AUDIO_MATERIAL_GLASS_THIN: i32 = 8;
pub const GVR_AUDIO_MATERIAL_GLASS_THICK: i32 = 9;
pub const GVR_AUDIO_MATERIAL_GRASS: i32 = 10;
pub const GVR_AUDIO_MATERIAL_LINOLEUM_ON_CONCRETE: i32 = 11;
pub const GVR_AUDIO_MATERIAL_MARBLE: i32 = 12;
pub const GVR_AUDIO_MATERIAL_PARQUET_ON_CONCRETE: i32 = 13;
pub const GVR_AUDIO_MATERIAL_PLASTER_ROUGH: i32 = 14;
pub const GVR_AUDIO_MATERIAL_PLASTER_SMOOTH: i32 = 15;
pub const GVR_AUDIO_MATERIAL_PLYWOOD_PANEL: i32 = 16;
pub const GVR_AUDIO_MATERIAL_POLISHED_CONCRETE_OR_TILE: i32 = 17;
pub const GVR_AUDIO_MATERIAL_SHEET_ROCK: i32 = 18;
pub const GVR_AUDIO_MATERIAL_WATER_OR_ICE_SURFACE: i32 = 19;
pub const GVR_AUDIO_MATERIAL_WOOD_CEILING: i32 = 20;
pub const GVR_AUDIO_MATERIAL_WOOD_PANEL: i32 = 21;
