//! Register: LIGHT_PERMUTATION

/// Maps compact light index `i` to a hardware light unit, one nibble each.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PermutationReg(u32);

crate::components::lighting_regs::impl_register!(PermutationReg, 0x0);

impl PermutationReg {
    pub const ENTRY_WIDTH: usize = 4;
    pub const ENTRY_MASK: u32 = 0xF;

    /// Hardware unit assigned to compact index `index` (0..8).
    #[inline(always)]
    #[must_use]
    pub const fn unit(&self, index: usize) -> u8 {
        ((self.0 >> (index * Self::ENTRY_WIDTH)) & Self::ENTRY_MASK) as u8
    }

    #[inline(always)]
    pub fn set_unit(&mut self, index: usize, unit: u8) {
        let offset = index * Self::ENTRY_WIDTH;
        self.0 = (self.0 & !(Self::ENTRY_MASK << offset))
            | (((unit as u32) & Self::ENTRY_MASK) << offset);
    }
}

impl core::fmt::Debug for PermutationReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PermutationReg({:#010x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = PermutationReg::default();
        assert_eq!(reg.to_raw(), 0);
    }

    #[test]
    fn set_unit_replaces_only_its_nibble() {
        let mut reg = PermutationReg::from_raw(0xFFFF_FFFF);
        reg.set_unit(2, 5);
        assert_eq!(reg.to_raw(), 0xFFFF_F5FF);
        assert_eq!(reg.unit(2), 5);
    }
}
