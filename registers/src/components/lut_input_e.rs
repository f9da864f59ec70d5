//! Field Enum: LUT_INPUT

/// Scalar that drives a lookup-table evaluation.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutInputE {
    /// Normal dot half-vector
    Nh = 0,
    /// View dot half-vector
    Vh = 1,
    /// Normal dot view
    Nv = 2,
    /// Light dot normal
    Ln = 3,
    /// Negated light dot spot direction
    Sp = 4,
    /// Cosine of the half-vector projection angle
    Cp = 5,
}

impl LutInputE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Nh),
            1 => Ok(Self::Vh),
            2 => Ok(Self::Nv),
            3 => Ok(Self::Ln),
            4 => Ok(Self::Sp),
            5 => Ok(Self::Cp),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
