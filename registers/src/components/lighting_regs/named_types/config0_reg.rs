//! Register: LIGHTING_CONFIG0

/// Environment-wide lighting configuration.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Config0Reg(u32);

crate::components::lighting_regs::impl_register!(Config0Reg, Config0Reg::RESET);

/// Generates getter/setter pairs for single-bit and multi-bit fields.
macro_rules! fields {
    ($($(#[$doc:meta])* $get:ident, $set:ident, $offset:ident = $off:expr, $mask:ident = $m:expr;)*) => {
        $(
            pub const $offset: usize = $off;
            pub const $mask: u32 = $m;

            $(#[$doc])*
            #[inline(always)]
            #[must_use]
            pub const fn $get(&self) -> u8 {
                ((self.0 >> Self::$offset) & Self::$mask) as u8
            }

            $(#[$doc])*
            #[inline(always)]
            pub fn $set(&mut self, val: u8) {
                let val = val as u32;
                self.0 = (self.0 & !(Self::$mask << Self::$offset))
                    | ((val & Self::$mask) << Self::$offset);
            }
        )*
    };
}

impl Config0Reg {
    /// Value programmed at environment initialization.
    pub const RESET: u32 = (4 << 8) | (1 << 27) | (1 << 31);

    fields! {
        /// SHADOW_ENABLE
        shadow_enable, set_shadow_enable, SHADOW_ENABLE_OFFSET = 0, SHADOW_ENABLE_MASK = 0x1;
        /// FRESNEL_SEL, see [`crate::FresnelSelE`]
        fresnel_sel, set_fresnel_sel, FRESNEL_SEL_OFFSET = 2, FRESNEL_SEL_MASK = 0x3;
        /// ENV_CONFIG
        env_config, set_env_config, ENV_CONFIG_OFFSET = 8, ENV_CONFIG_MASK = 0xF;
        /// SHADOW_MODE: primary, secondary, invert, alpha (bits 16..=19)
        shadow_mode, set_shadow_mode, SHADOW_MODE_OFFSET = 16, SHADOW_MODE_MASK = 0xF;
        /// BUMP_SEL: texture unit holding the bump map
        bump_sel, set_bump_sel, BUMP_SEL_OFFSET = 22, BUMP_SEL_MASK = 0x3;
        /// SHADOW_SEL: texture unit holding the shadow map
        shadow_sel, set_shadow_sel, SHADOW_SEL_OFFSET = 24, SHADOW_SEL_MASK = 0x3;
        /// CLAMP_HIGHLIGHTS
        clamp_highlights, set_clamp_highlights, CLAMP_HIGHLIGHTS_OFFSET = 27, CLAMP_HIGHLIGHTS_MASK = 0x1;
        /// BUMP_MODE, see [`crate::BumpModeE`]
        bump_mode, set_bump_mode, BUMP_MODE_OFFSET = 28, BUMP_MODE_MASK = 0x3;
        /// BUMP_RENORM_DISABLE
        bump_renorm_disable, set_bump_renorm_disable, BUMP_RENORM_DISABLE_OFFSET = 30, BUMP_RENORM_DISABLE_MASK = 0x1;
    }
}

impl core::fmt::Debug for Config0Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config0Reg")
            .field("shadow_enable", &self.shadow_enable())
            .field("fresnel_sel", &self.fresnel_sel())
            .field("env_config", &self.env_config())
            .field("shadow_mode", &self.shadow_mode())
            .field("bump_sel", &self.bump_sel())
            .field("shadow_sel", &self.shadow_sel())
            .field("clamp_highlights", &self.clamp_highlights())
            .field("bump_mode", &self.bump_mode())
            .field("bump_renorm_disable", &self.bump_renorm_disable())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = Config0Reg::default();
        assert_eq!(reg.to_raw(), 0x8800_0400);
        assert_eq!(reg.env_config(), 4);
        assert_eq!(reg.clamp_highlights(), 1);
        assert_eq!(reg.shadow_enable(), 0);
        assert_eq!(reg.bump_mode(), 0);
    }

    #[test]
    fn setters_preserve_reserved_top_bit() {
        let mut reg = Config0Reg::default();
        reg.set_bump_mode(2);
        reg.set_bump_renorm_disable(1);
        assert_eq!(reg.to_raw() >> 31, 1);
        assert_eq!(reg.bump_mode(), 2);
        assert_eq!(reg.bump_renorm_disable(), 1);
    }
}
