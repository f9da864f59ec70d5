//! Register: NUM_LIGHTS

/// Active light count, stored as count minus one.
///
/// Zero and one active lights both encode as 0; whether lighting runs at
/// all is controlled by the enable registers.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct NumLightsReg(u32);

crate::components::lighting_regs::impl_register!(NumLightsReg, 0x0);

impl NumLightsReg {
    pub const COUNT_MINUS_ONE_OFFSET: usize = 0;
    pub const COUNT_MINUS_ONE_WIDTH: usize = 3;
    pub const COUNT_MINUS_ONE_MASK: u32 = 0x7;

    /// COUNT_MINUS_ONE
    #[inline(always)]
    #[must_use]
    pub const fn count_minus_one(&self) -> u8 {
        ((self.0 >> Self::COUNT_MINUS_ONE_OFFSET) & Self::COUNT_MINUS_ONE_MASK) as u8
    }

    /// COUNT_MINUS_ONE
    #[inline(always)]
    pub fn set_count_minus_one(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::COUNT_MINUS_ONE_MASK << Self::COUNT_MINUS_ONE_OFFSET))
            | ((val & Self::COUNT_MINUS_ONE_MASK) << Self::COUNT_MINUS_ONE_OFFSET);
    }
}

impl core::fmt::Debug for NumLightsReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NumLightsReg")
            .field("count_minus_one", &self.count_minus_one())
            .finish()
    }
}
