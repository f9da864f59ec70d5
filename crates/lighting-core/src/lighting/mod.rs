//! Lighting environments, light sources, lookup tables and their
//! synchronization to the GPU.

pub mod env;
pub mod light;
pub mod lut;
pub mod material;
pub mod sync;

pub use env::{
    shared_slot, EnvDirty, LightEnvConf, LightingEnvironment, ShadowMode, SHARED_LUT_IDS,
    SHARED_LUT_SLOTS,
};
pub use light::{LightConf, LightDirty, LightSource};
pub use lut::{
    AttenuationRange, DistanceAttenuation, LightLut, LutHandle, LutSource, LUT_BURST, LUT_SAMPLES,
};
pub use material::{bgr, LightColors, Material};
