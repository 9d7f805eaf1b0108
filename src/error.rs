use std::path::PathBuf;

/// Errors surfaced by the fallible edges of the game: configuration, score
/// persistence and terminal I/O. The simulation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("score file error: {0}")]
    Score(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
