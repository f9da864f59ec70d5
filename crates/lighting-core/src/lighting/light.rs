//! A single light source and its register block image.

use glam::{Vec3, Vec4};

use crate::gpu::registers::{LightColorReg, LightConfigReg, Register, LIGHT_WORDS};
use crate::lighting::lut::{AttenuationRange, LutHandle};
use crate::lighting::material::{bgr, Material};
use crate::math::fixed::{f32_to_f16, f32_to_f20, f32_to_fixed13};

/// Stale parts of one light's state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightDirty {
    /// Color words must be re-derived from the environment material.
    pub material: bool,
    /// The 12-word register block must be re-sent.
    pub general: bool,
    /// The spot table must be re-uploaded.
    pub sp: bool,
    /// The distance attenuation table must be re-uploaded.
    pub da: bool,
}

impl LightDirty {
    pub fn is_clean(&self) -> bool {
        !(self.material || self.general || self.sp || self.da)
    }
}

/// Register block image of one light unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightConf {
    pub specular0: LightColorReg,
    pub specular1: LightColorReg,
    pub diffuse: LightColorReg,
    pub ambient: LightColorReg,
    /// x, y, z as float16.
    pub position: [u16; 3],
    /// Negated unit spot direction as 1.1.11 fixed-point.
    pub spot_direction: [u16; 3],
    pub config: LightConfigReg,
    /// float20
    pub dist_attn_bias: u32,
    /// float20
    pub dist_attn_scale: u32,
}

impl LightConf {
    /// Words in register order, starting at the unit's SPECULAR0.
    pub fn words(&self) -> [u32; LIGHT_WORDS] {
        [
            self.specular0.to_raw(),
            self.specular1.to_raw(),
            self.diffuse.to_raw(),
            self.ambient.to_raw(),
            u32::from(self.position[0]) | (u32::from(self.position[1]) << 16),
            u32::from(self.position[2]),
            u32::from(self.spot_direction[0]) | (u32::from(self.spot_direction[1]) << 16),
            u32::from(self.spot_direction[2]),
            0,
            self.config.to_raw(),
            self.dist_attn_bias,
            self.dist_attn_scale,
        ]
    }
}

/// Per-light configuration.
///
/// A light is attached to at most one [`LightingEnvironment`] slot, which
/// owns it while attached. Features whose enable bit lives in the
/// environment (enable, shadow, spot, distance attenuation) are switched
/// through the environment.
///
/// [`LightingEnvironment`]: crate::lighting::LightingEnvironment
#[derive(Clone, Debug, PartialEq)]
pub struct LightSource {
    pub(crate) enabled: bool,
    pub(crate) shadow: bool,
    pub(crate) spot: bool,
    pub(crate) dist_attn: bool,
    /// B, G, R
    pub(crate) color: [f32; 3],
    pub(crate) conf: LightConf,
    pub(crate) sp_lut: Option<LutHandle>,
    pub(crate) da_lut: Option<LutHandle>,
    pub(crate) dirty: LightDirty,
}

impl LightSource {
    /// Enabled white light at the origin with every feature off. Its color
    /// words are derived on the first pass after attachment.
    pub fn new() -> Self {
        Self {
            enabled: true,
            shadow: false,
            spot: false,
            dist_attn: false,
            color: [1.0; 3],
            conf: LightConf::default(),
            sp_lut: None,
            da_lut: None,
            dirty: LightDirty {
                material: true,
                general: true,
                sp: false,
                da: false,
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn shadow_enabled(&self) -> bool {
        self.shadow
    }

    pub fn spot_enabled(&self) -> bool {
        self.spot
    }

    pub fn dist_attn_enabled(&self) -> bool {
        self.dist_attn
    }

    /// Light color in B, G, R order.
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn conf(&self) -> &LightConf {
        &self.conf
    }

    pub fn dirty(&self) -> &LightDirty {
        &self.dirty
    }

    pub fn sp_lut(&self) -> Option<LutHandle> {
        self.sp_lut
    }

    pub fn da_lut(&self) -> Option<LutHandle> {
        self.da_lut
    }

    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = bgr(r, g, b);
        self.dirty.material = true;
    }

    /// Position for point lights, or direction when `position.w == 0`.
    pub fn set_position(&mut self, position: Vec4) {
        self.conf.position = [
            f32_to_f16(position.x),
            f32_to_f16(position.y),
            f32_to_f16(position.z),
        ];
        self.conf.config.set_directional(position.w == 0.0);
        self.dirty.general = true;
    }

    pub fn set_two_side_diffuse(&mut self, enable: bool) {
        self.conf.config.set_two_side_diffuse(enable);
        self.dirty.general = true;
    }

    /// Toggle geometric factor `index` (0 or 1) in the specular term.
    pub fn set_geo_factor(&mut self, index: usize, enable: bool) {
        self.conf.config.set_geo_factor(index, enable);
        self.dirty.general = true;
    }

    /// Re-upload both per-light tables on the next pass, after the caller
    /// rewrote a table this light shares.
    pub fn mark_luts_dirty(&mut self) {
        self.dirty.sp |= self.sp_lut.is_some();
        self.dirty.da |= self.da_lut.is_some();
    }

    pub(crate) fn set_spot_direction(&mut self, direction: Vec3) {
        let dir = -direction.normalize_or_zero();
        self.conf.spot_direction = [
            f32_to_fixed13(dir.x),
            f32_to_fixed13(dir.y),
            f32_to_fixed13(dir.z),
        ];
        self.dirty.general = true;
    }

    pub(crate) fn set_sp_lut(&mut self, lut: Option<LutHandle>) {
        self.sp_lut = lut;
        self.dirty.sp = lut.is_some();
    }

    pub(crate) fn set_da(&mut self, da: Option<(LutHandle, AttenuationRange)>) {
        match da {
            Some((lut, range)) => {
                self.conf.dist_attn_bias = f32_to_f20(range.bias);
                self.conf.dist_attn_scale = f32_to_f20(range.scale);
                self.da_lut = Some(lut);
                self.dirty.general = true;
                self.dirty.da = true;
            }
            None => {
                self.da_lut = None;
                self.dirty.da = false;
            }
        }
    }

    /// Full resend of this light's block and tables.
    pub(crate) fn mark_all_dirty(&mut self) {
        self.dirty.general = true;
        self.mark_luts_dirty();
    }

    /// Re-derive the color words from `material`.
    pub(crate) fn blend_material(&mut self, material: &Material) {
        let colors = material.blend_light(&self.color);
        self.conf.specular0 = colors.specular0;
        self.conf.specular1 = colors.specular1;
        self.conf.diffuse = colors.diffuse;
        self.conf.ambient = colors.ambient;
        self.dirty.material = false;
        self.dirty.general = true;
    }
}

impl Default for LightSource {
    fn default() -> Self {
        Self::new()
    }
}
