//! Lookup table builders and sample packing.

use lighting_core::lighting::{AttenuationRange, DistanceAttenuation, LightLut, LUT_SAMPLES};

#[test]
fn test_phong_endpoints() {
    let lut = LightLut::phong(4.0);
    assert_eq!(lut.value(0), 0);
    assert_eq!(lut.value(128), 256); // 0.5^4 = 1/16
    // 255/256 ^ 4 just under one.
    assert!(lut.value(LUT_SAMPLES - 1) > 4000);
    assert!(lut.delta(LUT_SAMPLES - 1) > 0);
}

#[test]
fn test_phong_zero_shininess_is_flat() {
    let lut = LightLut::phong(0.0);
    for i in 0..LUT_SAMPLES {
        assert_eq!(lut.value(i), 0xFFF);
        assert_eq!(lut.delta(i), 0);
    }
}

#[test]
fn test_spotlight_steps_at_cutoff() {
    // cos(1.052) ~ 0.4957, between samples 63 (0.4921875) and 64 (0.5).
    let lut = LightLut::spotlight(1.052);

    // Index 64 is x = 0.5, just inside the cone; 63 is just outside.
    assert_eq!(lut.value(64), 0xFFF);
    assert_eq!(lut.value(63), 0);
    assert_eq!(lut.delta(63), 0x7FF);
    assert_eq!(lut.value(127), 0xFFF);

    // Upper half of the table holds negative inputs.
    assert_eq!(lut.value(128), 0);
    assert_eq!(lut.value(255), 0);
}

#[test]
fn test_samples_saturate() {
    let mut values = [0.0f32; LUT_SAMPLES];
    let mut deltas = [0.0f32; LUT_SAMPLES];
    values[0] = 2.0;
    deltas[0] = -3.0;
    values[1] = -1.0;
    deltas[1] = 0.25;
    values[2] = 0.5;
    deltas[2] = -0.5;

    let lut = LightLut::from_samples(&values, &deltas);
    assert_eq!(lut.data()[0], 0xFFF | (0xFFF << 12));
    assert_eq!(lut.value(0), 0xFFF);
    assert_eq!(lut.delta(0), -0x7FF);
    assert_eq!(lut.value(1), 0);
    assert_eq!(lut.delta(1), 512);
    assert_eq!(lut.value(2), 2048);
    assert_eq!(lut.delta(2), -1024);
    assert_eq!(lut.data()[3], 0);
}

#[test]
fn test_attenuation_range_maps_onto_unit_input() {
    let range = AttenuationRange::new(2.0, 6.0);
    assert_eq!(range.scale, 0.25);
    assert_eq!(range.bias, -0.5);
    assert_eq!(2.0 * range.scale + range.bias, 0.0);
    assert_eq!(6.0 * range.scale + range.bias, 1.0);
}

#[test]
fn test_quadratic_attenuation_falls_off() {
    let da = DistanceAttenuation::quadratic(0.0, 16.0, 0.5, 0.25);
    assert_eq!(da.lut.value(0), 0xFFF);
    for i in 1..LUT_SAMPLES {
        assert!(da.lut.value(i) <= da.lut.value(i - 1));
        assert!(da.lut.delta(i) <= 0);
    }
    assert_eq!(da.range, AttenuationRange::new(0.0, 16.0));
}
