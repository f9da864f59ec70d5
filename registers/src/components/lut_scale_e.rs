//! Field Enum: LUT_SCALE

/// Output multiplier applied to a lookup-table result.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutScaleE {
    X1 = 0,
    X2 = 1,
    X4 = 2,
    X8 = 3,
    Quarter = 6,
    Half = 7,
}

impl LutScaleE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::X1),
            1 => Ok(Self::X2),
            2 => Ok(Self::X4),
            3 => Ok(Self::X8),
            6 => Ok(Self::Quarter),
            7 => Ok(Self::Half),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
