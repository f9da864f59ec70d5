//! Register: LIGHTING_LUTINPUT_SCALE

use crate::{LutIdE, LutScaleE};

/// Per-table output scale, see [`crate::LutScaleE`].
///
/// One 3-bit field per public LUT id on a 4-bit stride.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LutInputScaleReg(u32);

crate::components::lighting_regs::impl_register!(LutInputScaleReg, 0x0);

impl LutInputScaleReg {
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
    pub const fn scale(&self, id: LutIdE) -> Result<LutScaleE, crate::encode::UnknownVariant<u8>> {
        LutScaleE::from_bits(self.field(id))
    }

    #[inline(always)]
    pub fn set_scale(&mut self, id: LutIdE, val: LutScaleE) {
        let offset = id.bits() as usize * Self::FIELD_STRIDE;
        self.0 = (self.0 & !(0xF << offset)) | (((val.bits() as u32) & Self::FIELD_MASK) << offset);
    }
}

impl core::fmt::Debug for LutInputScaleReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LutInputScaleReg({:#010x})", self.0)
    }
}
