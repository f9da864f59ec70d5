//! Incremental synchronization of an environment to a command stream.
//!
//! Pass order:
//!
//! 1. connectivity: rebuild light count and permutation
//! 2. material: re-derive the ambient color
//! 3. general: AMBIENT, NUM_LIGHTS..CONFIG1, LUTINPUT_ABS..SCALE, PERMUTATION
//! 4. shared tables
//! 5. per light in slot order: colors, register block, spot table, attenuation table
//!
//! Each flag is cleared only after its writes were accepted, so a pass that
//! fails part way leaves the remainder dirty for the next one.

use crate::error::LightingError;
use crate::gpu::registers::{
    light_block, LutIndexReg, LutSelectE, PermutationReg, Register, LIGHTING_AMBIENT,
    LIGHTING_LIGHT_PERMUTATION, LIGHTING_LUTINPUT_ABS, LIGHTING_LUT_DATA0, LIGHTING_LUT_INDEX,
    LIGHTING_NUM_LIGHTS,
};
use crate::gpu::CommandStream;
use crate::lighting::env::{LightingEnvironment, SHARED_LUT_IDS};
use crate::lighting::lut::{LutHandle, LutSource, LUT_BURST};

impl LightingEnvironment {
    /// Emit the writes for every dirty part of this environment.
    ///
    /// Clean state emits nothing. `luts` resolves the table handles held by
    /// the environment and its lights.
    pub fn update<S, L>(&mut self, luts: &L, stream: &mut S) -> Result<(), LightingError<S::Error>>
    where
        S: CommandStream,
        L: LutSource + ?Sized,
    {
        if self.dirty.connectivity {
            self.recompute_connectivity();
        }

        if self.dirty.material {
            self.conf.ambient = self.material.blend_ambient(&self.ambient);
            self.dirty.material = false;
            self.dirty.general = true;
        }

        if self.dirty.general {
            log::trace!("lighting: general block {:?}", self.conf);
            stream.write_register(LIGHTING_AMBIENT, self.conf.ambient.to_raw())?;
            stream.write_registers_incremental(LIGHTING_NUM_LIGHTS, &self.conf.light_count_words())?;
            stream.write_registers_incremental(LIGHTING_LUTINPUT_ABS, &self.conf.lut_input_words())?;
            stream.write_register(LIGHTING_LIGHT_PERMUTATION, self.conf.permutation.to_raw())?;
            self.dirty.general = false;
        }

        if self.dirty.any_lut() {
            for (slot, id) in SHARED_LUT_IDS.iter().enumerate() {
                if !self.dirty.luts[slot] {
                    continue;
                }
                if let Some(handle) = self.luts[slot] {
                    upload_lut(luts, handle, LutSelectE::Common, id.bits(), stream)?;
                }
                self.dirty.luts[slot] = false;
            }
        }

        for (slot, entry) in self.lights.iter_mut().enumerate() {
            let Some(light) = entry else {
                continue;
            };

            if light.dirty.material {
                light.blend_material(&self.material);
            }

            if light.dirty.general {
                log::trace!("lighting: light {slot} block {:?}", light.conf);
                stream.write_registers_incremental(light_block(slot), &light.conf.words())?;
                light.dirty.general = false;
            }

            if light.dirty.sp {
                if let Some(handle) = light.sp_lut {
                    upload_lut(luts, handle, LutSelectE::Sp, slot as u8, stream)?;
                }
                light.dirty.sp = false;
            }

            if light.dirty.da {
                if let Some(handle) = light.da_lut {
                    upload_lut(luts, handle, LutSelectE::Da, slot as u8, stream)?;
                }
                light.dirty.da = false;
            }
        }

        Ok(())
    }

    /// Pack enabled lights into consecutive permutation entries.
    fn recompute_connectivity(&mut self) {
        let mut permutation = PermutationReg::default();
        let mut count = 0;
        for (slot, light) in self.lights.iter().enumerate() {
            if light.as_ref().is_some_and(|l| l.enabled) {
                permutation.set_unit(count, slot as u8);
                count += 1;
            }
        }

        log::debug!("lighting: {count} active lights, permutation {permutation:?}");
        self.conf
            .num_lights
            .set_count_minus_one(count.saturating_sub(1) as u8);
        self.conf.permutation = permutation;
        self.dirty.connectivity = false;
        self.dirty.general = true;
    }
}

/// Select the table at `group`/`sub_id` and stream its samples to the data
/// port in bursts.
fn upload_lut<S, L>(
    luts: &L,
    handle: LutHandle,
    group: LutSelectE,
    sub_id: u8,
    stream: &mut S,
) -> Result<(), LightingError<S::Error>>
where
    S: CommandStream,
    L: LutSource + ?Sized,
{
    let Some(lut) = luts.lut(handle) else {
        log::warn!("lighting: no table for {handle:?} ({group:?}/{sub_id}), skipping upload");
        return Ok(());
    };

    log::trace!("lighting: upload {handle:?} to {group:?}/{sub_id}");
    stream.write_register(LIGHTING_LUT_INDEX, LutIndexReg::new(group, sub_id, 0).to_raw())?;
    for burst in lut.data().chunks(LUT_BURST) {
        stream.write_registers_bulk(LIGHTING_LUT_DATA0, burst)?;
    }
    Ok(())
}
