//! Lighting lookup tables.
//!
//! A table holds 256 samples. Each sample packs the value at that point and
//! the delta to the next sample so the hardware can interpolate:
//!
//! ```text
//! [11:0]   value, unsigned 0.12 fixed-point
//! [23:12]  delta, sign-magnitude: [23] sign, [22:12] magnitude 0.11
//! ```
//!
//! Tables are owned by the caller and referenced by [`LutHandle`]. Mutating
//! a table that is already attached does not re-dirty its users; the caller
//! must mark every environment or light that references it.

use core::fmt;

use alloc::vec::Vec;

/// Samples per table.
pub const LUT_SAMPLES: usize = 256;

/// Samples per bulk write during upload.
pub const LUT_BURST: usize = 8;

const VALUE_MAX: u32 = 0xFFF;
const DELTA_SIGN: u32 = 0x800;
const DELTA_MAX: u32 = 0x7FF;

/// Index of a table in a caller-owned [`LutSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LutHandle(usize);

impl LutHandle {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Resolves handles to tables during a synchronization pass.
pub trait LutSource {
    fn lut(&self, handle: LutHandle) -> Option<&LightLut>;
}

impl LutSource for [LightLut] {
    fn lut(&self, handle: LutHandle) -> Option<&LightLut> {
        self.get(handle.index())
    }
}

impl<const N: usize> LutSource for [LightLut; N] {
    fn lut(&self, handle: LutHandle) -> Option<&LightLut> {
        self.get(handle.index())
    }
}

impl LutSource for Vec<LightLut> {
    fn lut(&self, handle: LutHandle) -> Option<&LightLut> {
        self.get(handle.index())
    }
}

/// A 256-sample lighting lookup table in upload format.
#[derive(Clone, PartialEq, Eq)]
pub struct LightLut {
    data: [u32; LUT_SAMPLES],
}

fn encode_value(value: f32) -> u32 {
    if value > 0.0 {
        let scaled = value * 4096.0;
        if scaled < 4096.0 {
            scaled as u32
        } else {
            VALUE_MAX
        }
    } else {
        0
    }
}

fn encode_delta(delta: f32) -> u32 {
    if delta == 0.0 || delta.is_nan() {
        return 0;
    }
    let sign = if delta < 0.0 { DELTA_SIGN } else { 0 };
    let scaled = delta.abs() * 2048.0;
    let magnitude = if scaled < 2048.0 {
        scaled as u32
    } else {
        DELTA_MAX
    };
    sign | magnitude
}

impl LightLut {
    /// All-zero table.
    pub const fn new() -> Self {
        Self {
            data: [0; LUT_SAMPLES],
        }
    }

    /// Build from per-sample values and deltas to the following sample.
    /// Values saturate to [0, 4095/4096], delta magnitudes to 2047/2048.
    pub fn from_samples(values: &[f32; LUT_SAMPLES], deltas: &[f32; LUT_SAMPLES]) -> Self {
        let mut lut = Self::new();
        for (word, (&value, &delta)) in lut.data.iter_mut().zip(values.iter().zip(deltas)) {
            *word = encode_value(value) | (encode_delta(delta) << 12);
        }
        lut
    }

    /// Sample `f(x, param)` across the input range.
    ///
    /// With `negative` the table covers x in [-1, 1): sample `i` holds
    /// x = i/128 for i < 128 and x = (i - 256)/128 above, matching the
    /// two's-complement index the hardware derives from a signed input.
    /// Otherwise x covers [0, 1) in steps of 1/256.
    pub fn from_fn<F>(f: F, param: f32, negative: bool) -> Self
    where
        F: Fn(f32, f32) -> f32,
    {
        let (min, max) = if negative { (-128i32, 128i32) } else { (0, 256) };
        let mut values = [0.0f32; LUT_SAMPLES];
        let mut deltas = [0.0f32; LUT_SAMPLES];
        for i in min..max {
            let value = f(i as f32 / max as f32, param);
            let next = f((i + 1) as f32 / max as f32, param);
            let idx = (i & 0xFF) as usize;
            values[idx] = value;
            deltas[idx] = next - value;
        }
        Self::from_samples(&values, &deltas)
    }

    /// Specular distribution `x^shininess`.
    pub fn phong(shininess: f32) -> Self {
        Self::from_fn(libm::powf, shininess, false)
    }

    /// Hard-edged spotlight: 1 inside `cutoff` radians of the spot axis,
    /// 0 outside. Driven by the signed spot input.
    pub fn spotlight(cutoff: f32) -> Self {
        Self::from_fn(
            |x, cutoff| if x >= libm::cosf(cutoff) { 1.0 } else { 0.0 },
            cutoff,
            true,
        )
    }

    /// Encoded samples in upload order.
    pub fn data(&self) -> &[u32; LUT_SAMPLES] {
        &self.data
    }

    /// Encoded samples for direct editing. Users of this table are not
    /// re-dirtied automatically.
    pub fn data_mut(&mut self) -> &mut [u32; LUT_SAMPLES] {
        &mut self.data
    }

    /// Value field of sample `index` (0.12 fixed-point).
    pub fn value(&self, index: usize) -> u16 {
        (self.data[index] & VALUE_MAX) as u16
    }

    /// Delta field of sample `index` as a signed 0.11 fixed-point integer.
    pub fn delta(&self, index: usize) -> i16 {
        let raw = (self.data[index] >> 12) & 0xFFF;
        let magnitude = (raw & DELTA_MAX) as i16;
        if raw & DELTA_SIGN != 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Default for LightLut {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LightLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightLut")
            .field("first", &self.value(0))
            .field("last", &self.value(LUT_SAMPLES - 1))
            .finish_non_exhaustive()
    }
}

/// Distance range mapped onto a distance attenuation table.
///
/// The hardware indexes the table with `distance * scale + bias`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttenuationRange {
    pub bias: f32,
    pub scale: f32,
}

impl AttenuationRange {
    /// Map `[from, to]` onto the table's [0, 1] input.
    pub fn new(from: f32, to: f32) -> Self {
        let scale = 1.0 / (to - from);
        Self {
            bias: -from * scale,
            scale,
        }
    }
}

/// A distance attenuation table together with the range it was sampled over.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceAttenuation {
    pub lut: LightLut,
    pub range: AttenuationRange,
}

impl DistanceAttenuation {
    /// Sample `f(distance, arg0, arg1)` over `[from, to]`.
    pub fn new<F>(f: F, from: f32, to: f32, arg0: f32, arg1: f32) -> Self
    where
        F: Fn(f32, f32, f32) -> f32,
    {
        let step = (to - from) / LUT_SAMPLES as f32;
        let mut values = [0.0f32; LUT_SAMPLES];
        let mut deltas = [0.0f32; LUT_SAMPLES];
        for i in 0..LUT_SAMPLES {
            let value = f(from + step * i as f32, arg0, arg1);
            let next = f(from + step * (i + 1) as f32, arg0, arg1);
            values[i] = value;
            deltas[i] = next - value;
        }
        Self {
            lut: LightLut::from_samples(&values, &deltas),
            range: AttenuationRange::new(from, to),
        }
    }

    /// `1 / (1 + linear*d + quadratic*d^2)` over `[from, to]`.
    pub fn quadratic(from: f32, to: f32, linear: f32, quadratic: f32) -> Self {
        Self::new(
            |d, linear, quadratic| 1.0 / (1.0 + linear * d + quadratic * d * d),
            from,
            to,
            linear,
            quadratic,
        )
    }
}
