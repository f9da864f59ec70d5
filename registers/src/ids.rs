//! Lighting register ids.

/// Master lighting enable (1 = lighting evaluated).
pub const LIGHTING_ENABLE0: u16 = 0x008F;

/// First word of light unit 0's register block.
pub const LIGHT0_SPECULAR0: u16 = 0x0140;
/// Register id distance between consecutive light units.
pub const LIGHT_STRIDE: u16 = 0x10;
/// Words per light unit register block (SPECULAR0 ..= ATTENUATION_SCALE).
pub const LIGHT_WORDS: usize = 12;
/// Number of hardware light units.
pub const LIGHT_UNITS: usize = 8;

pub const LIGHTING_AMBIENT: u16 = 0x01C0;
pub const LIGHTING_NUM_LIGHTS: u16 = 0x01C2;
pub const LIGHTING_CONFIG0: u16 = 0x01C3;
pub const LIGHTING_CONFIG1: u16 = 0x01C4;
pub const LIGHTING_LUT_INDEX: u16 = 0x01C5;
/// Inverted lighting enable (1 = lighting bypassed).
pub const LIGHTING_ENABLE1: u16 = 0x01C6;
/// LUT sample port; DATA1..DATA7 alias it at 0x01C9..=0x01CF.
pub const LIGHTING_LUT_DATA0: u16 = 0x01C8;
pub const LIGHTING_LUTINPUT_ABS: u16 = 0x01D0;
pub const LIGHTING_LUTINPUT_SELECT: u16 = 0x01D1;
pub const LIGHTING_LUTINPUT_SCALE: u16 = 0x01D2;
pub const LIGHTING_LIGHT_PERMUTATION: u16 = 0x01D9;

/// Register id of the first word of light unit `unit`'s block.
///
/// `unit` must be below [`LIGHT_UNITS`].
#[inline(always)]
#[must_use]
pub const fn light_block(unit: usize) -> u16 {
    LIGHT0_SPECULAR0 + (unit as u16) * LIGHT_STRIDE
}
