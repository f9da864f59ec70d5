//! The lighting environment: ambient, material, light slots, shared tables.

use glam::{Vec3, Vec4};

use crate::gpu::registers::{
    BumpModeE, Config0Reg, Config1Reg, FresnelSelE, LightColorReg, LutIdE, LutInputAbsReg,
    LutInputE, LutInputScaleReg, LutInputSelectReg, LutScaleE, NumLightsReg, PermutationReg,
    Register, LIGHT_UNITS,
};
use crate::lighting::light::LightSource;
use crate::lighting::lut::{AttenuationRange, LutHandle};
use crate::lighting::material::{bgr, Material};

/// Environment-wide table slots.
pub const SHARED_LUT_SLOTS: usize = 6;

/// Public id of the table held by each shared slot.
pub const SHARED_LUT_IDS: [LutIdE; SHARED_LUT_SLOTS] = [
    LutIdE::D0,
    LutIdE::D1,
    LutIdE::Fr,
    LutIdE::Rb,
    LutIdE::Rg,
    LutIdE::Rr,
];

/// Shared slot for a public table id. The per-light ids have none.
pub const fn shared_slot(id: LutIdE) -> Option<usize> {
    match id {
        LutIdE::D0 => Some(0),
        LutIdE::D1 => Some(1),
        LutIdE::Fr => Some(2),
        LutIdE::Rb => Some(3),
        LutIdE::Rg => Some(4),
        LutIdE::Rr => Some(5),
        LutIdE::Sp | LutIdE::Da => None,
    }
}

/// Stale parts of an environment's state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvDirty {
    /// Light count and permutation must be rebuilt.
    pub connectivity: bool,
    /// Ambient color must be re-derived from the material.
    pub material: bool,
    /// The general register block must be re-sent.
    pub general: bool,
    /// Per shared slot: the table must be re-uploaded.
    pub luts: [bool; SHARED_LUT_SLOTS],
}

impl EnvDirty {
    pub fn any_lut(&self) -> bool {
        self.luts.iter().any(|&d| d)
    }

    pub fn is_clean(&self) -> bool {
        !(self.connectivity || self.material || self.general || self.any_lut())
    }
}

/// Shadow attenuation flags (LIGHTING_CONFIG0 bits 16..=19).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShadowMode {
    pub primary: bool,
    pub secondary: bool,
    pub invert: bool,
    pub alpha: bool,
}

impl ShadowMode {
    fn bits(&self) -> u8 {
        u8::from(self.primary)
            | (u8::from(self.secondary) << 1)
            | (u8::from(self.invert) << 2)
            | (u8::from(self.alpha) << 3)
    }
}

/// General register block image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightEnvConf {
    pub ambient: LightColorReg,
    pub num_lights: NumLightsReg,
    pub config0: Config0Reg,
    pub config1: Config1Reg,
    pub lut_input_abs: LutInputAbsReg,
    pub lut_input_select: LutInputSelectReg,
    pub lut_input_scale: LutInputScaleReg,
    pub permutation: PermutationReg,
}

impl LightEnvConf {
    /// NUM_LIGHTS, CONFIG0, CONFIG1.
    pub fn light_count_words(&self) -> [u32; 3] {
        [
            self.num_lights.to_raw(),
            self.config0.to_raw(),
            self.config1.to_raw(),
        ]
    }

    /// LUTINPUT_ABS, LUTINPUT_SELECT, LUTINPUT_SCALE.
    pub fn lut_input_words(&self) -> [u32; 3] {
        [
            self.lut_input_abs.to_raw(),
            self.lut_input_select.to_raw(),
            self.lut_input_scale.to_raw(),
        ]
    }
}

/// CPU-side description of one lighting configuration.
///
/// Setters only stage values and mark state dirty; [`update`] emits the
/// register writes. Slot and table ids outside the hardware range are
/// ignored.
///
/// [`update`]: LightingEnvironment::update
#[derive(Clone, Debug, PartialEq)]
pub struct LightingEnvironment {
    /// B, G, R
    pub(crate) ambient: [f32; 3],
    pub(crate) material: Material,
    pub(crate) lights: [Option<LightSource>; LIGHT_UNITS],
    pub(crate) luts: [Option<LutHandle>; SHARED_LUT_SLOTS],
    pub(crate) conf: LightEnvConf,
    pub(crate) dirty: EnvDirty,
}

impl LightingEnvironment {
    /// Empty environment. Only the general block is dirty, so the first pass
    /// programs the default configuration.
    pub fn new() -> Self {
        Self {
            ambient: [0.0; 3],
            material: Material::default(),
            lights: Default::default(),
            luts: [None; SHARED_LUT_SLOTS],
            conf: LightEnvConf::default(),
            dirty: EnvDirty {
                general: true,
                ..EnvDirty::default()
            },
        }
    }

    pub fn conf(&self) -> &LightEnvConf {
        &self.conf
    }

    pub fn dirty(&self) -> &EnvDirty {
        &self.dirty
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Ambient input in B, G, R order.
    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Replace the material. Every attached light re-derives its colors.
    pub fn set_material(&mut self, material: &Material) {
        self.material = *material;
        self.dirty.material = true;
        for light in self.lights.iter_mut().flatten() {
            light.dirty.material = true;
        }
    }

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = bgr(r, g, b);
        self.dirty.material = true;
    }

    /// Attach (`Some`) or remove (`None`) the shared table for `id`, and
    /// select the scalar that drives it.
    ///
    /// With `abs` the hardware takes the absolute value of the input. `Sp`
    /// and `Da` are per-light tables; passing them changes nothing.
    pub fn set_lut(&mut self, id: LutIdE, input: LutInputE, abs: bool, lut: Option<LutHandle>) {
        let Some(slot) = shared_slot(id) else {
            log::debug!("ignoring shared table for per-light id {id:?}");
            return;
        };

        self.luts[slot] = lut;
        self.dirty.luts[slot] = lut.is_some();
        self.conf.config1.set_lut_disabled(id, lut.is_none());
        self.conf.lut_input_select.set_input(id, input);
        self.conf.lut_input_abs.set_abs_disabled(id, !abs);
        self.dirty.general = true;
    }

    /// Table attached for `id`, if any.
    pub fn lut(&self, id: LutIdE) -> Option<LutHandle> {
        shared_slot(id).and_then(|slot| self.luts[slot])
    }

    /// Output multiplier for table `id`.
    pub fn set_lut_scale(&mut self, id: LutIdE, scale: LutScaleE) {
        self.conf.lut_input_scale.set_scale(id, scale);
        self.dirty.general = true;
    }

    /// Re-upload the shared table for `id` after the caller rewrote it.
    pub fn mark_lut_dirty(&mut self, id: LutIdE) {
        if let Some(slot) = shared_slot(id) {
            self.dirty.luts[slot] |= self.luts[slot].is_some();
        }
    }

    pub fn set_fresnel(&mut self, selector: FresnelSelE) {
        self.conf.config0.set_fresnel_sel(selector.bits());
        self.dirty.general = true;
    }

    pub fn set_bump_mode(&mut self, mode: BumpModeE) {
        self.conf.config0.set_bump_mode(mode.bits());
        self.dirty.general = true;
    }

    /// Texture unit (0..=3) sampled for the bump map.
    pub fn set_bump_texture(&mut self, unit: u8) {
        self.conf.config0.set_bump_sel(unit);
        self.dirty.general = true;
    }

    /// Renormalize the perturbed normal (recover z from x and y).
    pub fn set_bump_renormalize(&mut self, enable: bool) {
        self.conf.config0.set_bump_renorm_disable(u8::from(!enable));
        self.dirty.general = true;
    }

    /// Texture unit (0..=3) sampled for the shadow map.
    pub fn set_shadow_texture(&mut self, unit: u8) {
        self.conf.config0.set_shadow_sel(unit);
        self.dirty.general = true;
    }

    pub fn set_shadow_mode(&mut self, mode: ShadowMode) {
        let bits = mode.bits();
        self.conf.config0.set_shadow_mode(bits);
        self.conf.config0.set_shadow_enable(u8::from(bits != 0));
        self.dirty.general = true;
    }

    pub fn set_clamp_highlights(&mut self, clamp: bool) {
        self.conf.config0.set_clamp_highlights(u8::from(clamp));
        self.dirty.general = true;
    }

    /// Light in `slot`, if any.
    pub fn light(&self, slot: usize) -> Option<&LightSource> {
        self.lights.get(slot)?.as_ref()
    }

    /// Light in `slot` for changing light-local parameters.
    pub fn light_mut(&mut self, slot: usize) -> Option<&mut LightSource> {
        self.lights.get_mut(slot)?.as_mut()
    }

    /// Occupied slots in slot order.
    pub fn lights(&self) -> impl Iterator<Item = (usize, &LightSource)> {
        self.lights
            .iter()
            .enumerate()
            .filter_map(|(slot, light)| light.as_ref().map(|l| (slot, l)))
    }

    /// Put `light` into `slot`, returning whichever light no longer has a
    /// slot: the previous occupant, or `light` itself if `slot` is out of
    /// range.
    pub fn attach_light(&mut self, slot: usize, light: LightSource) -> Option<LightSource> {
        if slot >= LIGHT_UNITS {
            log::debug!("ignoring light attach to slot {slot}");
            return Some(light);
        }

        let mut light = light;
        light.dirty.material = true;
        light.mark_all_dirty();
        self.apply_light_features(slot, &light);
        self.dirty.connectivity = true;
        self.lights[slot].replace(light)
    }

    /// Attach to the lowest free slot. Gives the light back if all are taken.
    pub fn attach_light_first_free(&mut self, light: LightSource) -> Result<usize, LightSource> {
        match self.lights.iter().position(Option::is_none) {
            Some(slot) => {
                self.attach_light(slot, light);
                Ok(slot)
            }
            None => Err(light),
        }
    }

    /// Remove and return the light in `slot`.
    pub fn detach_light(&mut self, slot: usize) -> Option<LightSource> {
        let light = self.lights.get_mut(slot)?.take()?;
        self.conf.config1.set_shadow_disabled(slot, true);
        self.conf.config1.set_spot_disabled(slot, true);
        self.conf.config1.set_dist_attn_disabled(slot, true);
        self.dirty.connectivity = true;
        Some(light)
    }

    fn occupied(&mut self, slot: usize) -> Option<&mut LightSource> {
        let light = self.light_mut(slot);
        if light.is_none() {
            log::debug!("no light in slot {slot}");
        }
        light
    }

    pub fn set_light_enabled(&mut self, slot: usize, enable: bool) {
        let Some(light) = self.occupied(slot) else {
            return;
        };
        if light.enabled == enable {
            return;
        }
        light.enabled = enable;
        self.dirty.connectivity = true;
    }

    pub fn set_light_color(&mut self, slot: usize, r: f32, g: f32, b: f32) {
        if let Some(light) = self.occupied(slot) {
            light.set_color(r, g, b);
        }
    }

    /// See [`LightSource::set_position`].
    pub fn set_light_position(&mut self, slot: usize, position: Vec4) {
        if let Some(light) = self.occupied(slot) {
            light.set_position(position);
        }
    }

    pub fn set_light_two_side_diffuse(&mut self, slot: usize, enable: bool) {
        if let Some(light) = self.occupied(slot) {
            light.set_two_side_diffuse(enable);
        }
    }

    pub fn set_light_geo_factor(&mut self, slot: usize, index: usize, enable: bool) {
        if let Some(light) = self.occupied(slot) {
            light.set_geo_factor(index, enable);
        }
    }

    /// Re-upload the tables of the light in `slot`.
    pub fn mark_light_luts_dirty(&mut self, slot: usize) {
        if let Some(light) = self.occupied(slot) {
            light.mark_luts_dirty();
        }
    }

    pub fn set_light_shadow(&mut self, slot: usize, enable: bool) {
        let Some(light) = self.occupied(slot) else {
            return;
        };
        light.shadow = enable;
        self.conf.config1.set_shadow_disabled(slot, !enable);
        self.dirty.general = true;
    }

    pub fn set_light_spot(&mut self, slot: usize, enable: bool) {
        let Some(light) = self.occupied(slot) else {
            return;
        };
        light.spot = enable;
        self.conf.config1.set_spot_disabled(slot, !enable);
        self.dirty.general = true;
    }

    /// Toggle distance attenuation without changing the attached table.
    pub fn set_light_dist_attn_enabled(&mut self, slot: usize, enable: bool) {
        let Some(light) = self.occupied(slot) else {
            return;
        };
        light.dist_attn = enable;
        self.conf.config1.set_dist_attn_disabled(slot, !enable);
        self.dirty.general = true;
    }

    /// Point the spot cone along `direction` and enable the spot term.
    pub fn set_light_spot_direction(&mut self, slot: usize, direction: Vec3) {
        let Some(light) = self.occupied(slot) else {
            return;
        };
        light.set_spot_direction(direction);
        self.set_light_spot(slot, true);
    }

    /// Attach or remove the spot table; the spot term follows its presence.
    pub fn set_light_spot_lut(&mut self, slot: usize, lut: Option<LutHandle>) {
        let Some(light) = self.occupied(slot) else {
            return;
        };
        light.set_sp_lut(lut);
        self.set_light_spot(slot, lut.is_some());
    }

    /// Attach a distance attenuation table sampled over `range`, or remove it.
    pub fn set_light_dist_attn(
        &mut self,
        slot: usize,
        attenuation: Option<(LutHandle, AttenuationRange)>,
    ) {
        let Some(light) = self.occupied(slot) else {
            return;
        };
        light.set_da(attenuation);
        self.set_light_dist_attn_enabled(slot, attenuation.is_some());
    }

    /// Force a full resend: general block, every attached shared table, and
    /// every light's block and tables. Derived values are assumed current,
    /// so connectivity and material are left alone.
    pub fn mark_all_dirty(&mut self) {
        self.dirty.general = true;
        for (dirty, lut) in self.dirty.luts.iter_mut().zip(&self.luts) {
            *dirty |= lut.is_some();
        }
        for light in self.lights.iter_mut().flatten() {
            light.mark_all_dirty();
        }
    }

    fn apply_light_features(&mut self, slot: usize, light: &LightSource) {
        self.conf.config1.set_shadow_disabled(slot, !light.shadow);
        self.conf.config1.set_spot_disabled(slot, !light.spot);
        self.conf.config1.set_dist_attn_disabled(slot, !light.dist_attn);
        self.dirty.general = true;
    }
}

impl Default for LightingEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
