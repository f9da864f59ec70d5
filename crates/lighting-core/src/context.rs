//! Render context: tracks which lighting environment is bound and flushes it.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::error::LightingError;
use crate::gpu::registers::{LIGHTING_ENABLE0, LIGHTING_ENABLE1};
use crate::gpu::CommandStream;
use crate::lighting::{LightingEnvironment, LutSource};

/// An environment shared between the application and the context it is
/// bound to.
pub type SharedLightEnv = Rc<RefCell<LightingEnvironment>>;

/// Per-frame rendering state holding the bound lighting environment.
///
/// Binding is identity based: rebinding the environment that is already
/// bound changes nothing. Calls made while the context is inactive are
/// ignored.
#[derive(Debug, Default)]
pub struct RenderContext {
    active: bool,
    light_env: Option<SharedLightEnv>,
    needs_rebind: bool,
}

impl RenderContext {
    /// Inactive context with no environment bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting state. The next flush programs the lighting enables.
    pub fn activate(&mut self) {
        self.active = true;
        self.needs_rebind = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bind `env`, or unbind with `None`.
    pub fn bind_light_env(&mut self, env: Option<&SharedLightEnv>) {
        if !self.active {
            log::debug!("ignoring lighting bind on inactive context");
            return;
        }

        let unchanged = match (&self.light_env, env) {
            (Some(bound), Some(env)) => Rc::ptr_eq(bound, env),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        self.light_env = env.cloned();
        self.needs_rebind = true;
    }

    pub fn light_env(&self) -> Option<&SharedLightEnv> {
        self.light_env.as_ref()
    }

    pub fn needs_light_env_rebind(&self) -> bool {
        self.needs_rebind
    }

    /// Emit pending lighting state before a draw.
    ///
    /// After a bind change the lighting enables are written and the newly
    /// bound environment is resent in full; otherwise only its dirty state
    /// goes out.
    pub fn flush_lighting<S, L>(
        &mut self,
        luts: &L,
        stream: &mut S,
    ) -> Result<(), LightingError<S::Error>>
    where
        S: CommandStream,
        L: LutSource + ?Sized,
    {
        if !self.active {
            return Ok(());
        }

        let mut env = match &self.light_env {
            Some(env) => Some(
                env.try_borrow_mut()
                    .map_err(|_| LightingError::EnvironmentBusy)?,
            ),
            None => None,
        };

        if self.needs_rebind {
            let enabled = env.is_some();
            log::debug!("lighting: rebind, enabled = {enabled}");
            stream.write_register(LIGHTING_ENABLE0, u32::from(enabled))?;
            stream.write_register(LIGHTING_ENABLE1, u32::from(!enabled))?;
            if let Some(env) = env.as_mut() {
                env.mark_all_dirty();
            }
            self.needs_rebind = false;
        }

        match env.as_mut() {
            Some(env) => env.update(luts, stream),
            None => Ok(()),
        }
    }
}
