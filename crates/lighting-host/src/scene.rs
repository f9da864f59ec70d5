use glam::{Vec3, Vec4};
use lighting_core::gpu::registers::{FresnelSelE, LutIdE, LutInputE, LutScaleE, LIGHT_UNITS};
use lighting_core::lighting::{bgr, DistanceAttenuation, LightLut, LutHandle, ShadowMode};
use lighting_core::{LightSource, LightingEnvironment, Material};

/// Preset lighting configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Scene {
    /// No lights, default configuration only.
    Empty,
    /// One directional light with a Phong highlight.
    Sun,
    /// Point light with a spot cone and distance attenuation.
    Spotlight,
    /// Every light unit occupied, all shared tables and shadows in use.
    Full,
}

/// An environment together with the tables its handles refer to.
pub struct SceneSetup {
    pub env: LightingEnvironment,
    pub luts: Vec<LightLut>,
}

impl SceneSetup {
    fn new() -> Self {
        Self {
            env: LightingEnvironment::new(),
            luts: Vec::new(),
        }
    }

    fn add_lut(&mut self, lut: LightLut) -> LutHandle {
        self.luts.push(lut);
        LutHandle::new(self.luts.len() - 1)
    }
}

fn plastic() -> Material {
    Material {
        ambient: bgr(0.2, 0.2, 0.2),
        diffuse: bgr(0.6, 0.5, 0.4),
        specular0: bgr(0.8, 0.8, 0.8),
        specular1: bgr(0.0, 0.0, 0.0),
        emission: bgr(0.0, 0.0, 0.0),
    }
}

impl Scene {
    pub fn build(self) -> SceneSetup {
        let mut setup = SceneSetup::new();
        match self {
            Scene::Empty => {}
            Scene::Sun => {
                let phong = setup.add_lut(LightLut::phong(30.0));
                let env = &mut setup.env;
                env.set_material(&plastic());
                env.set_ambient(0.1, 0.1, 0.15);
                env.set_lut(LutIdE::D0, LutInputE::Nh, false, Some(phong));

                let mut sun = LightSource::new();
                sun.set_color(1.0, 0.95, 0.8);
                sun.set_position(Vec4::new(0.3, 1.0, 0.5, 0.0));
                env.attach_light(0, sun);
            }
            Scene::Spotlight => {
                let phong = setup.add_lut(LightLut::phong(12.0));
                let cone = setup.add_lut(LightLut::spotlight(0.6));
                let falloff = DistanceAttenuation::quadratic(0.0, 20.0, 0.1, 0.02);
                let range = falloff.range;
                let falloff = setup.add_lut(falloff.lut);

                let env = &mut setup.env;
                env.set_material(&plastic());
                env.set_lut(LutIdE::D0, LutInputE::Nh, true, Some(phong));

                let mut lamp = LightSource::new();
                lamp.set_position(Vec4::new(0.0, 4.0, 2.0, 1.0));
                lamp.set_two_side_diffuse(true);
                env.attach_light(0, lamp);
                env.set_light_spot_direction(0, Vec3::new(0.0, -1.0, -0.5));
                env.set_light_spot_lut(0, Some(cone));
                env.set_light_dist_attn(0, Some((falloff, range)));
            }
            Scene::Full => {
                let d0 = setup.add_lut(LightLut::phong(20.0));
                let d1 = setup.add_lut(LightLut::phong(4.0));
                let fresnel = setup.add_lut(LightLut::phong(5.0));
                let reflect = setup.add_lut(LightLut::phong(1.0));
                let cone = setup.add_lut(LightLut::spotlight(0.8));

                let env = &mut setup.env;
                env.set_material(&Material {
                    specular1: bgr(0.5, 0.5, 0.5),
                    ..plastic()
                });
                env.set_ambient(0.05, 0.05, 0.05);
                env.set_lut(LutIdE::D0, LutInputE::Nh, false, Some(d0));
                env.set_lut(LutIdE::D1, LutInputE::Vh, false, Some(d1));
                env.set_lut(LutIdE::Fr, LutInputE::Nv, false, Some(fresnel));
                for id in [LutIdE::Rr, LutIdE::Rg, LutIdE::Rb] {
                    env.set_lut(id, LutInputE::Nv, false, Some(reflect));
                }
                env.set_lut_scale(LutIdE::D1, LutScaleE::Half);
                env.set_fresnel(FresnelSelE::PrimaryAlpha);
                env.set_shadow_mode(ShadowMode {
                    primary: true,
                    ..ShadowMode::default()
                });
                env.set_shadow_texture(0);

                for slot in 0..LIGHT_UNITS {
                    let angle = slot as f32 * core::f32::consts::TAU / LIGHT_UNITS as f32;
                    let mut light = LightSource::new();
                    light.set_color(
                        0.5 + 0.5 * angle.cos(),
                        0.5 + 0.5 * angle.sin(),
                        0.5,
                    );
                    light.set_position(Vec4::new(3.0 * angle.cos(), 2.0, 3.0 * angle.sin(), 1.0));
                    env.attach_light(slot, light);
                    env.set_light_shadow(slot, slot % 2 == 0);
                    if slot < 2 {
                        env.set_light_spot_direction(slot, Vec3::new(-angle.cos(), -1.0, -angle.sin()));
                        env.set_light_spot_lut(slot, Some(cone));
                    }
                }
            }
        }
        setup
    }
}
