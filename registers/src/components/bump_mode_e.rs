//! Field Enum: BUMP_MODE

/// How the bump texture perturbs the shading frame.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpModeE {
    /// Bump texture ignored
    NotUsed = 0,
    /// Texture holds a perturbed normal
    AsBump = 1,
    /// Texture holds a tangent vector
    AsTangent = 2,
}

impl BumpModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::NotUsed),
            1 => Ok(Self::AsBump),
            2 => Ok(Self::AsTangent),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
