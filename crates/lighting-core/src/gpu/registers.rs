//! Lighting register ids, register images and field enums.
//!
//! Re-exported from the `lighting-registers` crate (single source of truth).

pub use lighting_registers::*;
