//! Register: LIGHTn_CONFIG

/// Per-light mode bits (word 9 of a light unit block).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LightConfigReg(u32);

crate::components::lighting_regs::impl_register!(LightConfigReg, 0x0);

impl LightConfigReg {
    pub const DIRECTIONAL_BIT: u32 = 1 << 0;
    pub const TWO_SIDE_DIFFUSE_BIT: u32 = 1 << 1;
    pub const GEO_FACTOR0_BIT: u32 = 1 << 2;
    pub const GEO_FACTOR1_BIT: u32 = 1 << 3;

    #[inline(always)]
    fn set_flag(&mut self, bit: u32, val: bool) {
        if val {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }

    /// DIRECTIONAL: position is a direction (w == 0)
    #[inline(always)]
    #[must_use]
    pub const fn directional(&self) -> bool {
        self.0 & Self::DIRECTIONAL_BIT != 0
    }

    /// DIRECTIONAL: position is a direction (w == 0)
    #[inline(always)]
    pub fn set_directional(&mut self, val: bool) {
        self.set_flag(Self::DIRECTIONAL_BIT, val);
    }

    /// TWO_SIDE_DIFFUSE
    #[inline(always)]
    #[must_use]
    pub const fn two_side_diffuse(&self) -> bool {
        self.0 & Self::TWO_SIDE_DIFFUSE_BIT != 0
    }

    /// TWO_SIDE_DIFFUSE
    #[inline(always)]
    pub fn set_two_side_diffuse(&mut self, val: bool) {
        self.set_flag(Self::TWO_SIDE_DIFFUSE_BIT, val);
    }

    /// GEO_FACTORn, `index` is 0 or 1
    #[inline(always)]
    #[must_use]
    pub const fn geo_factor(&self, index: usize) -> bool {
        self.0 & (Self::GEO_FACTOR0_BIT << index) != 0
    }

    /// GEO_FACTORn, `index` is 0 or 1; other indices are ignored
    #[inline(always)]
    pub fn set_geo_factor(&mut self, index: usize, val: bool) {
        if index < 2 {
            self.set_flag(Self::GEO_FACTOR0_BIT << index, val);
        }
    }
}

impl core::fmt::Debug for LightConfigReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LightConfigReg")
            .field("directional", &self.directional())
            .field("two_side_diffuse", &self.two_side_diffuse())
            .field("geo_factor0", &self.geo_factor(0))
            .field("geo_factor1", &self.geo_factor(1))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = LightConfigReg::default();
        assert!(!reg.directional());
        assert!(!reg.two_side_diffuse());
        assert!(!reg.geo_factor(0));
        assert!(!reg.geo_factor(1));
    }

    #[test]
    fn geo_factor_out_of_range_is_ignored() {
        let mut reg = LightConfigReg::default();
        reg.set_geo_factor(1, true);
        reg.set_geo_factor(2, true);
        assert_eq!(reg.to_raw(), 1 << 3);
    }
}
