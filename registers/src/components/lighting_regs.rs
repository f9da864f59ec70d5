//! Addrmap: lighting unit registers

/// Implements [`crate::reg::Register`] and a zero-or-reset `Default` for a
/// `u32` register newtype.
macro_rules! impl_register {
    ($ty:ident, $reset:expr) => {
        impl core::default::Default for $ty {
            fn default() -> Self {
                Self($reset)
            }
        }

        impl crate::reg::Register for $ty {
            type Regwidth = u32;

            fn from_raw(val: Self::Regwidth) -> Self {
                Self(val)
            }

            fn to_raw(self) -> Self::Regwidth {
                self.0
            }
        }
    };
}
pub(crate) use impl_register;

/// Named types defined within this component's body
pub mod named_types {
    pub mod config0_reg;
    pub mod config1_reg;
    pub mod light_color_reg;
    pub mod light_config_reg;
    pub mod lut_index_reg;
    pub mod lut_input_abs_reg;
    pub mod lut_input_scale_reg;
    pub mod lut_input_select_reg;
    pub mod num_lights_reg;
    pub mod permutation_reg;
}

// Instances of named component types
pub use crate::components::lighting_regs::named_types::config0_reg::Config0Reg;
pub use crate::components::lighting_regs::named_types::config1_reg::Config1Reg;
pub use crate::components::lighting_regs::named_types::light_color_reg::LightColorReg;
pub use crate::components::lighting_regs::named_types::light_config_reg::LightConfigReg;
pub use crate::components::lighting_regs::named_types::lut_index_reg::LutIndexReg;
pub use crate::components::lighting_regs::named_types::lut_input_abs_reg::LutInputAbsReg;
pub use crate::components::lighting_regs::named_types::lut_input_scale_reg::LutInputScaleReg;
pub use crate::components::lighting_regs::named_types::lut_input_select_reg::LutInputSelectReg;
pub use crate::components::lighting_regs::named_types::num_lights_reg::NumLightsReg;
pub use crate::components::lighting_regs::named_types::permutation_reg::PermutationReg;
