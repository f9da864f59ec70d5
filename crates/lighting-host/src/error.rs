use lighting_core::{CommandListError, LightingError};

/// Errors that can occur while dumping lighting passes.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// I/O error writing the dump.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A synchronization pass could not be encoded.
    #[error("Pass {pass} failed: {source}")]
    Pass {
        pass: usize,
        #[source]
        source: LightingError<CommandListError>,
    },

    /// Arguments that parse but cannot be run.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
