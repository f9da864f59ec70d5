//! Material response and the color blends derived from it.

use crate::gpu::registers::LightColorReg;
use crate::math::fixed::f32_to_unorm8;

/// Reorder an RGB triple into register channel order (B, G, R).
pub const fn bgr(r: f32, g: f32, b: f32) -> [f32; 3] {
    [b, g, r]
}

/// Surface response to light. Every channel triple is in B, G, R order
/// (see [`bgr`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular0: [f32; 3],
    pub specular1: [f32; 3],
    pub emission: [f32; 3],
}

/// The four per-light color words derived from a material and a light color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightColors {
    pub specular0: LightColorReg,
    pub specular1: LightColorReg,
    pub diffuse: LightColorReg,
    pub ambient: LightColorReg,
}

fn pack(channels: [f32; 3]) -> LightColorReg {
    LightColorReg::from_bgr(channels.map(f32_to_unorm8))
}

fn modulate(a: &[f32; 3], b: &[f32; 3]) -> [f32; 3] {
    [a[0] * b[0], a[1] * b[1], a[2] * b[2]]
}

impl Material {
    /// Environment ambient register: `emission + ambient * ambient_input`
    /// per channel, each rounded and clamped to 8 bits.
    pub fn blend_ambient(&self, ambient_input: &[f32; 3]) -> LightColorReg {
        let lit = modulate(&self.ambient, ambient_input);
        pack([
            self.emission[0] + lit[0],
            self.emission[1] + lit[1],
            self.emission[2] + lit[2],
        ])
    }

    /// Color words of one light: each reflectance channel of the material
    /// scaled by the light color.
    pub fn blend_light(&self, color: &[f32; 3]) -> LightColors {
        LightColors {
            specular0: pack(modulate(&self.specular0, color)),
            specular1: pack(modulate(&self.specular1, color)),
            diffuse: pack(modulate(&self.diffuse, color)),
            ambient: pack(modulate(&self.ambient, color)),
        }
    }
}
