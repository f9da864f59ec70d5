//! Register map for the fixed-function lighting unit.
//!
//! Register ids index the command-buffer register space (one 32-bit word per
//! id). Named register types wrap a raw word and expose its fields.
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::unnecessary_cast)]

pub mod components;
pub mod encode;
pub mod ids;
pub mod reg;

pub use crate::components::lighting_regs::*;
pub use crate::components::{
    bump_mode_e::BumpModeE, fresnel_sel_e::FresnelSelE, lut_id_e::LutIdE,
    lut_input_e::LutInputE, lut_scale_e::LutScaleE, lut_select_e::LutSelectE,
};
pub use crate::ids::*;
pub use crate::reg::Register;
