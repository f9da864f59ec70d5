//! Register and field enum definitions
#![allow(non_camel_case_types)] // needed for type normalization suffixes

pub mod bump_mode_e;
pub mod fresnel_sel_e;
pub mod lighting_regs;
pub mod lut_id_e;
pub mod lut_input_e;
pub mod lut_scale_e;
pub mod lut_select_e;
