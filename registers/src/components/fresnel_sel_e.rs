//! Field Enum: FRESNEL_SEL

/// Which output alpha the fresnel table drives.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FresnelSelE {
    /// Fresnel table unused
    None = 0,
    /// Primary color alpha
    PrimaryAlpha = 1,
    /// Secondary color alpha
    SecondaryAlpha = 2,
    /// Both primary and secondary alpha
    BothAlpha = 3,
}

impl FresnelSelE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::None),
            1 => Ok(Self::PrimaryAlpha),
            2 => Ok(Self::SecondaryAlpha),
            3 => Ok(Self::BothAlpha),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
