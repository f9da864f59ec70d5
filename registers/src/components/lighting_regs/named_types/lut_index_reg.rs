//! Register: LIGHTING_LUT_INDEX

use crate::LutSelectE;

/// Selects the table and start sample for subsequent LUT_DATA writes.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LutIndexReg(u32);

crate::components::lighting_regs::impl_register!(LutIndexReg, 0x0);

impl LutIndexReg {
    pub const START_OFFSET: usize = 0;
    pub const START_MASK: u32 = 0xFF;
    pub const SUB_ID_OFFSET: usize = 8;
    pub const SUB_ID_MASK: u32 = 0x7;
    pub const GROUP_OFFSET: usize = 11;
    pub const GROUP_MASK: u32 = 0x3;

    /// Address table `sub_id` of `group`, starting at sample `start`.
    ///
    /// `sub_id` is the public LUT id for [`LutSelectE::Common`] and the light
    /// unit for the per-light groups.
    #[inline(always)]
    #[must_use]
    pub const fn new(group: LutSelectE, sub_id: u8, start: u8) -> Self {
        Self(
            ((start as u32) & Self::START_MASK)
                | (((sub_id as u32) & Self::SUB_ID_MASK) << Self::SUB_ID_OFFSET)
                | (((group.bits() as u32) & Self::GROUP_MASK) << Self::GROUP_OFFSET),
        )
    }

    /// START
    #[inline(always)]
    #[must_use]
    pub const fn start(&self) -> u8 {
        ((self.0 >> Self::START_OFFSET) & Self::START_MASK) as u8
    }

    /// SUB_ID
    #[inline(always)]
    #[must_use]
    pub const fn sub_id(&self) -> u8 {
        ((self.0 >> Self::SUB_ID_OFFSET) & Self::SUB_ID_MASK) as u8
    }

    /// GROUP
    ///
    /// # Errors
    /// Returns an error if the raw field holds the unused group encoding.
    pub const fn group(&self) -> Result<LutSelectE, crate::encode::UnknownVariant<u8>> {
        LutSelectE::from_bits(((self.0 >> Self::GROUP_OFFSET) & Self::GROUP_MASK) as u8)
    }
}

impl core::fmt::Debug for LutIndexReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LutIndexReg")
            .field("group", &self.group())
            .field("sub_id", &self.sub_id())
            .field("start", &self.start())
            .finish()
    }
}
