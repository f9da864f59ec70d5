//! Tests for environment setters: staged register images and dirty flags.

mod support;

use glam::Vec4;
use lighting_core::gpu::registers::{
    BumpModeE, FresnelSelE, LutIdE, LutInputE, LutScaleE, Register, LIGHT_UNITS,
};
use lighting_core::lighting::{bgr, LightLut, LutHandle, ShadowMode};
use lighting_core::{LightSource, LightingEnvironment, Material};

use support::MockStream;

/// Environment with its initial state already sent.
fn synced_env() -> LightingEnvironment {
    let mut env = LightingEnvironment::new();
    env.update(&Vec::<LightLut>::new(), &mut MockStream::new())
        .unwrap();
    assert!(env.dirty().is_clean());
    env
}

// --- Shared tables ---

#[test]
fn test_set_lut_per_light_ids_change_nothing() {
    for id in [LutIdE::Sp, LutIdE::Da] {
        let mut env = synced_env();
        let before = *env.conf();
        env.set_lut(id, LutInputE::Sp, true, Some(LutHandle::new(0)));
        assert_eq!(*env.conf(), before);
        assert!(env.dirty().is_clean());
        assert_eq!(env.lut(id), None);
    }
}

#[test]
fn test_set_lut_stages_input_abs_and_enable() {
    let mut env = synced_env();
    env.set_lut(LutIdE::Rb, LutInputE::Ln, true, Some(LutHandle::new(3)));

    let conf = env.conf();
    assert!(!conf.config1.lut_disabled(LutIdE::Rb));
    assert!(conf.config1.lut_disabled(LutIdE::D0));
    assert_eq!(conf.lut_input_select.input(LutIdE::Rb), Ok(LutInputE::Ln));
    assert!(!conf.lut_input_abs.abs_disabled(LutIdE::Rb));
    assert!(conf.lut_input_abs.abs_disabled(LutIdE::D0));
    assert_eq!(env.lut(LutIdE::Rb), Some(LutHandle::new(3)));
    assert!(env.dirty().general);
    assert_eq!(env.dirty().luts, [false, false, false, true, false, false]);
}

#[test]
fn test_removing_lut_disables_it_again() {
    let mut env = synced_env();
    env.set_lut(LutIdE::D1, LutInputE::Nh, false, Some(LutHandle::new(0)));
    env.set_lut(LutIdE::D1, LutInputE::Nh, false, None);

    assert!(env.conf().config1.lut_disabled(LutIdE::D1));
    assert_eq!(env.lut(LutIdE::D1), None);
    assert!(!env.dirty().any_lut());
}

#[test]
fn test_mark_lut_dirty_requires_attached_table() {
    let mut env = synced_env();
    env.mark_lut_dirty(LutIdE::Fr);
    assert!(!env.dirty().any_lut());

    env.set_lut(LutIdE::Fr, LutInputE::Cp, false, Some(LutHandle::new(0)));
    env.update(&vec![LightLut::new()], &mut MockStream::new())
        .unwrap();
    env.mark_lut_dirty(LutIdE::Fr);
    assert_eq!(env.dirty().luts, [false, false, true, false, false, false]);
}

#[test]
fn test_set_lut_scale() {
    let mut env = synced_env();
    env.set_lut_scale(LutIdE::Sp, LutScaleE::Half);
    env.set_lut_scale(LutIdE::D1, LutScaleE::X2);

    assert_eq!(env.conf().lut_input_scale.scale(LutIdE::Sp), Ok(LutScaleE::Half));
    assert_eq!(env.conf().lut_input_scale.scale(LutIdE::D1), Ok(LutScaleE::X2));
    assert_eq!(env.conf().lut_input_scale.scale(LutIdE::D0), Ok(LutScaleE::X1));
    assert!(env.dirty().general);
}

// --- Config0 ---

#[test]
fn test_config0_setters() {
    let mut env = synced_env();
    env.set_fresnel(FresnelSelE::BothAlpha);
    env.set_bump_mode(BumpModeE::AsBump);
    env.set_bump_texture(2);
    env.set_bump_renormalize(false);
    env.set_shadow_texture(3);
    env.set_shadow_mode(ShadowMode {
        primary: true,
        alpha: true,
        ..ShadowMode::default()
    });
    env.set_clamp_highlights(false);

    let config0 = env.conf().config0;
    assert_eq!(config0.fresnel_sel(), 3);
    assert_eq!(config0.bump_mode(), 1);
    assert_eq!(config0.bump_sel(), 2);
    assert_eq!(config0.bump_renorm_disable(), 1);
    assert_eq!(config0.shadow_sel(), 3);
    assert_eq!(config0.shadow_mode(), 0b1001);
    assert_eq!(config0.shadow_enable(), 1);
    assert_eq!(config0.clamp_highlights(), 0);
    assert_eq!(config0.env_config(), 4);
    assert!(env.dirty().general);
}

#[test]
fn test_clearing_shadow_mode_disables_shadows() {
    let mut env = synced_env();
    env.set_shadow_mode(ShadowMode {
        invert: true,
        ..ShadowMode::default()
    });
    env.set_shadow_mode(ShadowMode::default());
    assert_eq!(env.conf().config0.shadow_enable(), 0);
    assert_eq!(env.conf().config0.shadow_mode(), 0);
}

// --- Attach / detach ---

#[test]
fn test_attach_marks_light_and_connectivity_dirty() {
    let mut env = synced_env();
    assert!(env.attach_light(4, LightSource::new()).is_none());

    assert!(env.dirty().connectivity);
    assert!(env.dirty().general);
    let light = env.light(4).unwrap();
    assert!(light.dirty().material);
    assert!(light.dirty().general);
}

#[test]
fn test_attach_returns_displaced_light() {
    let mut env = LightingEnvironment::new();
    let mut first = LightSource::new();
    first.set_color(1.0, 0.0, 0.0);
    env.attach_light(0, first);

    let displaced = env.attach_light(0, LightSource::new()).unwrap();
    assert_eq!(displaced.color(), bgr(1.0, 0.0, 0.0));
    assert_eq!(env.light(0).unwrap().color(), [1.0; 3]);
}

#[test]
fn test_attach_out_of_range_gives_light_back() {
    let mut env = synced_env();
    assert!(env.attach_light(LIGHT_UNITS, LightSource::new()).is_some());
    assert!(env.dirty().is_clean());
    assert_eq!(env.lights().count(), 0);
}

#[test]
fn test_attach_first_free_fills_lowest_slots() {
    let mut env = LightingEnvironment::new();
    env.attach_light(0, LightSource::new());
    env.attach_light(2, LightSource::new());

    assert_eq!(env.attach_light_first_free(LightSource::new()), Ok(1));
    assert_eq!(env.attach_light_first_free(LightSource::new()), Ok(3));
    for _ in 4..LIGHT_UNITS {
        assert!(env.attach_light_first_free(LightSource::new()).is_ok());
    }
    assert!(env.attach_light_first_free(LightSource::new()).is_err());
}

#[test]
fn test_detach_restores_disable_bits() {
    let mut env = LightingEnvironment::new();
    env.attach_light(6, LightSource::new());
    env.set_light_shadow(6, true);
    env.set_light_spot(6, true);
    env.set_light_dist_attn_enabled(6, true);
    assert!(!env.conf().config1.shadow_disabled(6));
    assert!(!env.conf().config1.spot_disabled(6));
    assert!(!env.conf().config1.dist_attn_disabled(6));
    env.update(&Vec::<LightLut>::new(), &mut MockStream::new())
        .unwrap();

    let light = env.detach_light(6).unwrap();
    assert!(light.shadow_enabled());
    assert!(env.conf().config1.shadow_disabled(6));
    assert!(env.conf().config1.spot_disabled(6));
    assert!(env.conf().config1.dist_attn_disabled(6));
    assert!(env.dirty().connectivity);
    assert!(env.light(6).is_none());
    assert!(env.detach_light(6).is_none());
}

#[test]
fn test_reattached_light_keeps_feature_bits() {
    let mut env = LightingEnvironment::new();
    env.attach_light(1, LightSource::new());
    env.set_light_spot(1, true);
    let light = env.detach_light(1).unwrap();

    env.attach_light(3, light);
    assert!(!env.conf().config1.spot_disabled(3));
    assert!(env.conf().config1.spot_disabled(1));
}

// --- Per-slot light setters ---

#[test]
fn test_slot_setters_ignore_empty_and_out_of_range_slots() {
    let mut env = synced_env();
    env.set_light_enabled(2, false);
    env.set_light_enabled(LIGHT_UNITS + 3, false);
    env.set_light_shadow(2, true);
    env.set_light_color(9, 1.0, 1.0, 1.0);
    env.set_light_position(2, Vec4::ONE);
    env.set_light_spot_lut(2, Some(LutHandle::new(0)));
    env.set_light_dist_attn_enabled(100, true);
    env.mark_light_luts_dirty(2);

    assert!(env.dirty().is_clean());
    assert_eq!(env.conf().config1.to_raw(), 0xFFFF_FFFF);
}

#[test]
fn test_light_setters_through_slot() {
    let mut env = LightingEnvironment::new();
    env.attach_light(5, LightSource::new());
    env.update(&Vec::<LightLut>::new(), &mut MockStream::new())
        .unwrap();

    env.set_light_color(5, 0.0, 1.0, 0.0);
    env.set_light_two_side_diffuse(5, true);
    env.set_light_geo_factor(5, 1, true);

    let light = env.light(5).unwrap();
    assert_eq!(light.color(), bgr(0.0, 1.0, 0.0));
    assert!(light.dirty().material);
    assert!(light.conf().config.two_side_diffuse());
    assert!(light.conf().config.geo_factor(1));
    assert!(!light.conf().config.geo_factor(0));
    assert!(env.dirty().is_clean());
}

#[test]
fn test_spot_lut_presence_drives_spot_enable() {
    let mut env = LightingEnvironment::new();
    env.attach_light(0, LightSource::new());

    env.set_light_spot_lut(0, Some(LutHandle::new(2)));
    assert!(env.light(0).unwrap().spot_enabled());
    assert!(env.light(0).unwrap().dirty().sp);
    assert!(!env.conf().config1.spot_disabled(0));

    env.set_light_spot_lut(0, None);
    assert!(!env.light(0).unwrap().spot_enabled());
    assert!(!env.light(0).unwrap().dirty().sp);
    assert!(env.conf().config1.spot_disabled(0));
}

#[test]
fn test_mark_light_luts_dirty_only_flags_attached_tables() {
    let mut env = LightingEnvironment::new();
    env.attach_light(0, LightSource::new());
    env.set_light_spot_lut(0, Some(LutHandle::new(0)));
    env.update(&vec![LightLut::new()], &mut MockStream::new())
        .unwrap();

    env.mark_light_luts_dirty(0);
    let dirty = env.light(0).unwrap().dirty();
    assert!(dirty.sp);
    assert!(!dirty.da);
}

#[test]
fn test_set_material_marks_every_light() {
    let mut env = LightingEnvironment::new();
    env.attach_light(0, LightSource::new());
    env.attach_light(3, LightSource::new());
    env.update(&Vec::<LightLut>::new(), &mut MockStream::new())
        .unwrap();

    env.set_material(&Material::default());
    assert!(env.dirty().material);
    for (_, light) in env.lights() {
        assert!(light.dirty().material);
    }
}
