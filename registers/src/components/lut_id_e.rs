//! Field Enum: LUT_ID

/// Public lookup-table id.
///
/// The input selection, absolute-value and scale registers carry one 4-bit
/// field per id. `Sp` and `Da` name the per-light tables and cannot be bound
/// as environment-wide tables.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LutIdE {
    /// Distribution 0
    D0 = 0,
    /// Distribution 1
    D1 = 1,
    /// Spotlight
    Sp = 2,
    /// Fresnel
    Fr = 3,
    /// Reflection, blue channel
    Rb = 4,
    /// Reflection, green channel
    Rg = 5,
    /// Reflection, red channel
    Rr = 6,
    /// Distance attenuation
    Da = 7,
}

impl LutIdE {
    pub const ALL: [Self; 8] = [
        Self::D0,
        Self::D1,
        Self::Sp,
        Self::Fr,
        Self::Rb,
        Self::Rg,
        Self::Rr,
        Self::Da,
    ];

    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::D0),
            1 => Ok(Self::D1),
            2 => Ok(Self::Sp),
            3 => Ok(Self::Fr),
            4 => Ok(Self::Rb),
            5 => Ok(Self::Rg),
            6 => Ok(Self::Rr),
            7 => Ok(Self::Da),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
