//! Common behaviour of typed register images.

/// A register image backed by a single raw hardware word.
pub trait Register: Copy {
    type Regwidth: num_traits::PrimInt;

    /// Wrap a raw register word. Every bit pattern is a valid image.
    fn from_raw(val: Self::Regwidth) -> Self;

    /// The raw word as written to the command stream.
    fn to_raw(self) -> Self::Regwidth;
}
