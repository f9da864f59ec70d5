//! Register: LIGHTING_LUTINPUT_SELECT

use crate::{LutIdE, LutInputE};

/// Per-table input selector, see [`crate::LutInputE`].
///
/// One 3-bit field per public LUT id on a 4-bit stride.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LutInputSelectReg(u32);

crate::components::lighting_regs::impl_register!(LutInputSelectReg, 0x0);

impl LutInputSelectReg {
    pub const FIELD_STRIDE: usize = 4;
    pub const FIELD_MASK: u32 = 0x7;

    /// Raw field for table `id`.
    #[inline(always)]
    #[must_use]
    pub const fn field(&self, id: LutIdE) -> u8 {
        ((self.0 >> (id.bits() as usize * Self::FIELD_STRIDE)) & Self::FIELD_MASK) as u8
    }

    /// Decoded field for table `id`.
    ///
    /// # Errors
    /// Returns an error if the field holds an unassigned encoding.
    pub const fn input(&self, id: LutIdE) -> Result<LutInputE, crate::encode::UnknownVariant<u8>> {
        LutInputE::from_bits(self.field(id))
    }

    #[inline(always)]
    pub fn set_input(&mut self, id: LutIdE, val: LutInputE) {
        let offset = id.bits() as usize * Self::FIELD_STRIDE;
        self.0 = (self.0 & !(0xF << offset)) | (((val.bits() as u32) & Self::FIELD_MASK) << offset);
    }
}

impl core::fmt::Debug for LutInputSelectReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LutInputSelectReg({:#010x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = LutInputSelectReg::default();
        assert_eq!(reg.input(LutIdE::D0), Ok(LutInputE::Nh));
    }

    #[test]
    fn fields_are_nibble_aligned() {
        let mut reg = LutInputSelectReg::default();
        reg.set_input(LutIdE::D1, LutInputE::Ln);
        reg.set_input(LutIdE::Rr, LutInputE::Cp);
        assert_eq!(reg.to_raw(), (3 << 4) | (5 << 24));
        reg.set_input(LutIdE::D1, LutInputE::Vh);
        assert_eq!(reg.input(LutIdE::D1), Ok(LutInputE::Vh));
    }
}
