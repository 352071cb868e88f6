//! Crate error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    /// Scenes are always built fresh; there is no archived form to restore from
    #[error("restoring a scene from serialized state is not supported")]
    RestoreUnsupported,

    #[error("invalid scene json: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read scene config: {0}")]
    Io(#[from] std::io::Error),
}
