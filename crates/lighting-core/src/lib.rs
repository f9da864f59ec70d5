//! Fixed-function lighting state for a PICA200-class GPU.
//!
//! A [`LightingEnvironment`] holds the CPU-side lighting configuration and
//! tracks which parts changed. [`LightingEnvironment::update`] turns the
//! changes into the minimal set of register writes on a [`CommandStream`].
//! A [`RenderContext`] decides which environment is live.
#![no_std]

extern crate alloc;

pub mod context;
pub mod error;
pub mod gpu;
pub mod lighting;
pub mod math;

pub use context::{RenderContext, SharedLightEnv};
pub use error::LightingError;
pub use gpu::{CommandList, CommandListError, CommandStream};
pub use lighting::{
    DistanceAttenuation, LightLut, LightSource, LightingEnvironment, LutHandle, LutSource,
    Material,
};
