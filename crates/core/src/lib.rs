//! Core shared types and errors (source-agnostic).

pub mod name;
pub mod record;

use thiserror::Error;

pub use name::{derive_name, registration_key};
pub use record::{SHADER_SCRIPT_TYPE, ShaderRecord, ShaderScript};

#[derive(Debug, Error)]
pub enum CoreError {
    /// Server answered with a non-success status.
    #[error("Failed to load {file}: {status}")]
    Retrieval { file: String, status: u16 },
    /// Connection, timeout or read failure before a usable body arrived.
    #[error("Failed to load {file}: {cause}")]
    Transport { file: String, cause: String },
    #[error("Cannot derive a shader name from '{0}'")]
    InvalidName(String),
}

impl CoreError {
    /// File the error refers to, if any.
    pub fn file(&self) -> &str {
        match self {
            CoreError::Retrieval { file, .. } | CoreError::Transport { file, .. } => file,
            CoreError::InvalidName(file) => file,
        }
    }

    /// Replace the file reference, keeping the failure itself.
    pub fn with_file(self, file: impl Into<String>) -> Self {
        let file = file.into();
        match self {
            CoreError::Retrieval { status, .. } => CoreError::Retrieval { file, status },
            CoreError::Transport { cause, .. } => CoreError::Transport { file, cause },
            CoreError::InvalidName(_) => CoreError::InvalidName(file),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_message_names_file_and_status() {
        let err = CoreError::Retrieval {
            file: "b.frag".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to load b.frag: 404");
    }

    #[test]
    fn with_file_keeps_cause() {
        let err = CoreError::Transport {
            file: "http://localhost/shaders/a.vert".into(),
            cause: "Connection refused".into(),
        }
        .with_file("a.vert");
        assert_eq!(err.file(), "a.vert");
        assert!(err.to_string().contains("Connection refused"));
    }
}
