//! Error type for synchronization passes, generic over command stream errors.

use core::fmt;

/// Failure while emitting lighting state.
///
/// Lighting operations themselves are total; the only failure source is the
/// command stream the writes go to.
#[derive(Debug)]
pub enum LightingError<E: fmt::Debug> {
    /// The command stream rejected a write. State whose writes were not
    /// accepted stays dirty and is re-emitted by the next pass.
    Stream(E),
    /// The bound environment was already borrowed when the context tried to
    /// synchronize it.
    EnvironmentBusy,
}

impl<E: fmt::Debug> From<E> for LightingError<E> {
    fn from(e: E) -> Self {
        LightingError::Stream(e)
    }
}

impl<E: fmt::Debug + fmt::Display> fmt::Display for LightingError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightingError::Stream(e) => write!(f, "command stream error: {e}"),
            LightingError::EnvironmentBusy => f.write_str("lighting environment is already borrowed"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for LightingError<E> {}
