//! Register: LIGHT_COLOR

/// Packed lighting color: three 10-bit fields, low 8 bits significant.
///
/// Used for the environment ambient register and the four color words of
/// each light unit. Field 0 holds blue, field 2 holds red.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LightColorReg(u32);

crate::components::lighting_regs::impl_register!(LightColorReg, 0x0);

impl LightColorReg {
    pub const B_OFFSET: usize = 0;
    pub const G_OFFSET: usize = 10;
    pub const R_OFFSET: usize = 20;
    pub const CHANNEL_WIDTH: usize = 8;
    pub const CHANNEL_MASK: u32 = 0xFF;

    /// Build from channels in register order (B, G, R).
    #[inline(always)]
    #[must_use]
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self(
            ((bgr[0] as u32) << Self::B_OFFSET)
                | ((bgr[1] as u32) << Self::G_OFFSET)
                | ((bgr[2] as u32) << Self::R_OFFSET),
        )
    }

    /// Channel `index` in register order (0 = B, 1 = G, 2 = R).
    #[inline(always)]
    #[must_use]
    pub const fn channel(&self, index: usize) -> u8 {
        ((self.0 >> (index * 10)) & Self::CHANNEL_MASK) as u8
    }

    /// B
    #[inline(always)]
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.channel(0)
    }

    /// G
    #[inline(always)]
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.channel(1)
    }

    /// R
    #[inline(always)]
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.channel(2)
    }

    #[inline(always)]
    pub fn set_channel(&mut self, index: usize, val: u8) {
        let offset = index * 10;
        self.0 = (self.0 & !(Self::CHANNEL_MASK << offset)) | ((val as u32) << offset);
    }
}

impl core::fmt::Debug for LightColorReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LightColorReg")
            .field("r", &self.r())
            .field("g", &self.g())
            .field("b", &self.b())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = LightColorReg::default();
        assert_eq!(reg.r(), 0);
        assert_eq!(reg.g(), 0);
        assert_eq!(reg.b(), 0);
    }

    #[test]
    fn channels_sit_on_ten_bit_boundaries() {
        let reg = LightColorReg::from_bgr([0x11, 0x22, 0x33]);
        assert_eq!(crate::reg::Register::to_raw(reg), 0x11 | (0x22 << 10) | (0x33 << 20));
        assert_eq!((reg.b(), reg.g(), reg.r()), (0x11, 0x22, 0x33));
    }
}
