/// Error types for the host tool.
pub mod error;

/// Preset lighting scenes.
pub mod scene;

/// Running synchronization passes and formatting their command lists.
pub mod dump;

pub use dump::{run_passes, DumpConfig, OutputFormat, PassReport};
pub use error::HostError;
pub use scene::{Scene, SceneSetup};
