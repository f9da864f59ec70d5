//! Register: LIGHTING_LUTINPUT_ABS

use crate::LutIdE;

/// Per-table absolute-value control. A set bit feeds the signed input
/// through unchanged; a clear bit takes its absolute value.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LutInputAbsReg(u32);

crate::components::lighting_regs::impl_register!(LutInputAbsReg, LutInputAbsReg::RESET);

impl LutInputAbsReg {
    /// Absolute value disabled for every table.
    pub const RESET: u32 = 0x0222_2222;
    pub const FIELD_STRIDE: usize = 4;
    pub const ABS_DISABLE_OFFSET: usize = 1;

    #[inline(always)]
    const fn bit(id: LutIdE) -> u32 {
        1 << (id.bits() as usize * Self::FIELD_STRIDE + Self::ABS_DISABLE_OFFSET)
    }

    /// ABS_DISABLE[id]
    #[inline(always)]
    #[must_use]
    pub const fn abs_disabled(&self, id: LutIdE) -> bool {
        self.0 & Self::bit(id) != 0
    }

    /// ABS_DISABLE[id]
    #[inline(always)]
    pub fn set_abs_disabled(&mut self, id: LutIdE, val: bool) {
        if val {
            self.0 |= Self::bit(id);
        } else {
            self.0 &= !Self::bit(id);
        }
    }
}

impl core::fmt::Debug for LutInputAbsReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LutInputAbsReg({:#010x})", self.0)
    }
}
