//! Field Enum: LUT_SELECT

/// Table group addressed by a LUT upload.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutSelectE {
    /// Environment-wide tables (D0, D1, FR, RB, RG, RR)
    Common = 0,
    /// Per-light spot tables, sub-id is the light unit
    Sp = 1,
    /// Per-light distance attenuation tables, sub-id is the light unit
    Da = 2,
}

impl LutSelectE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Common),
            1 => Ok(Self::Sp),
            2 => Ok(Self::Da),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
