//! Conversion helpers for lighting register number formats.
//!
//! - UNORM8 color channels (round to nearest, clamped)
//! - float16 (1.5.10) light positions
//! - float20 (1.7.12) distance attenuation bias/scale
//! - 1.1.11 signed fixed-point spot directions

use fixed::types::I5F11;

/// Convert a [0, 1] intensity to an 8-bit channel, rounding to nearest.
///
/// Out-of-range inputs clamp to 0 or 255; NaN maps to 0.
pub fn f32_to_unorm8(val: f32) -> u8 {
    let scaled = libm::roundf(val * 255.0);
    if scaled >= 255.0 {
        255
    } else if scaled > 0.0 {
        scaled as u8
    } else {
        0
    }
}

/// Pack an f32 into a sign/exponent/mantissa float with the given field
/// widths. Denormals flush to zero and out-of-range magnitudes saturate to
/// the largest finite value.
fn f32_to_float(val: f32, exp_bits: u32, mant_bits: u32) -> u32 {
    let bits = val.to_bits();
    let sign = (bits >> 31) << (exp_bits + mant_bits);
    let exp = ((bits >> 23) & 0xFF) as i32;
    let mant = bits & 0x7F_FFFF;

    if exp == 0 {
        return sign;
    }

    let max_exp = (1i32 << exp_bits) - 1;
    let mant_mask = (1u32 << mant_bits) - 1;
    if exp == 0xFF {
        return sign | (((max_exp - 1) as u32) << mant_bits) | mant_mask;
    }

    let biased = exp - 127 + ((1i32 << (exp_bits - 1)) - 1);
    if biased <= 0 {
        sign
    } else if biased >= max_exp {
        sign | (((max_exp - 1) as u32) << mant_bits) | mant_mask
    } else {
        sign | ((biased as u32) << mant_bits) | (mant >> (23 - mant_bits))
    }
}

/// Convert f32 to the 16-bit float (1.5.10) used for light positions.
pub fn f32_to_f16(val: f32) -> u16 {
    f32_to_float(val, 5, 10) as u16
}

/// Convert f32 to the 20-bit float (1.7.12) used for attenuation parameters.
pub fn f32_to_f20(val: f32) -> u32 {
    f32_to_float(val, 7, 12)
}

/// Convert f32 to 1.1.11 signed fixed-point, returned in the low 13 bits.
///
/// Range: -2.0 to +1.9995. NaN maps to 0.
pub fn f32_to_fixed13(val: f32) -> u16 {
    if val.is_nan() {
        return 0;
    }
    let fixed = I5F11::saturating_from_num(val.clamp(-2.0, 2.0 - 1.0 / 2048.0));
    (fixed.to_bits() as u16) & 0x1FFF
}
