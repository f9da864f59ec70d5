//! Register: LIGHTING_CONFIG1

/// Per-light and per-table disable masks. A set bit disables the feature.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Config1Reg(u32);

crate::components::lighting_regs::impl_register!(Config1Reg, Config1Reg::RESET);

impl Config1Reg {
    /// Everything disabled.
    pub const RESET: u32 = 0xFFFF_FFFF;

    pub const SHADOW_DISABLE_OFFSET: usize = 0;
    pub const SPOT_DISABLE_OFFSET: usize = 8;
    pub const LUT_DISABLE_OFFSET: usize = 16;
    pub const DIST_ATTN_DISABLE_OFFSET: usize = 24;

    #[inline(always)]
    const fn bit(&self, offset: usize, index: usize) -> bool {
        (self.0 >> (offset + index)) & 1 != 0
    }

    #[inline(always)]
    fn set_bit(&mut self, offset: usize, index: usize, val: bool) {
        let bit = 1u32 << (offset + index);
        if val {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }

    /// SHADOW_DISABLE[unit]
    #[inline(always)]
    #[must_use]
    pub const fn shadow_disabled(&self, unit: usize) -> bool {
        self.bit(Self::SHADOW_DISABLE_OFFSET, unit)
    }

    /// SHADOW_DISABLE[unit]
    #[inline(always)]
    pub fn set_shadow_disabled(&mut self, unit: usize, val: bool) {
        self.set_bit(Self::SHADOW_DISABLE_OFFSET, unit, val);
    }

    /// SPOT_DISABLE[unit]
    #[inline(always)]
    #[must_use]
    pub const fn spot_disabled(&self, unit: usize) -> bool {
        self.bit(Self::SPOT_DISABLE_OFFSET, unit)
    }

    /// SPOT_DISABLE[unit]
    #[inline(always)]
    pub fn set_spot_disabled(&mut self, unit: usize, val: bool) {
        self.set_bit(Self::SPOT_DISABLE_OFFSET, unit, val);
    }

    /// LUT_DISABLE[id], indexed by public LUT id
    #[inline(always)]
    #[must_use]
    pub const fn lut_disabled(&self, id: crate::LutIdE) -> bool {
        self.bit(Self::LUT_DISABLE_OFFSET, id.bits() as usize)
    }

    /// LUT_DISABLE[id], indexed by public LUT id
    #[inline(always)]
    pub fn set_lut_disabled(&mut self, id: crate::LutIdE, val: bool) {
        self.set_bit(Self::LUT_DISABLE_OFFSET, id.bits() as usize, val);
    }

    /// DIST_ATTN_DISABLE[unit]
    #[inline(always)]
    #[must_use]
    pub const fn dist_attn_disabled(&self, unit: usize) -> bool {
        self.bit(Self::DIST_ATTN_DISABLE_OFFSET, unit)
    }

    /// DIST_ATTN_DISABLE[unit]
    #[inline(always)]
    pub fn set_dist_attn_disabled(&mut self, unit: usize, val: bool) {
        self.set_bit(Self::DIST_ATTN_DISABLE_OFFSET, unit, val);
    }
}

impl core::fmt::Debug for Config1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config1Reg")
            .field("shadow_disable", &format_args!("{:#04x}", self.0 & 0xFF))
            .field("spot_disable", &format_args!("{:#04x}", (self.0 >> 8) & 0xFF))
            .field("lut_disable", &format_args!("{:#04x}", (self.0 >> 16) & 0xFF))
            .field("dist_attn_disable", &format_args!("{:#04x}", self.0 >> 24))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;
    use crate::LutIdE;

    #[test]
    fn test_default() {
        let reg = Config1Reg::default();
        assert_eq!(reg.to_raw(), 0xFFFF_FFFF);
        assert!(reg.lut_disabled(LutIdE::D0));
        assert!(reg.spot_disabled(7));
    }

    #[test]
    fn masks_are_independent() {
        let mut reg = Config1Reg::default();
        reg.set_lut_disabled(LutIdE::Fr, false);
        reg.set_spot_disabled(1, false);
        reg.set_dist_attn_disabled(7, false);
        assert_eq!(reg.to_raw(), !((1u32 << 19) | (1 << 9) | (1 << 31)));
    }
}
