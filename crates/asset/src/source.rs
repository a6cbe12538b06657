//! Where shader text comes from.

use std::future::Future;

use corelib::{CoreError, CoreResult};

/// Retrieves the text stored at a resolved location.
///
/// Errors refer to the location; the loader rewrites them to the caller's
/// file name.
pub trait ShaderSource {
    fn fetch(&self, location: &str) -> impl Future<Output = CoreResult<String>> + Send;
}

/// Reads shader files from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSource;

impl ShaderSource for FileSource {
    fn fetch(&self, location: &str) -> impl Future<Output = CoreResult<String>> + Send {
        let path = location.to_string();
        async move {
            log::debug!("Reading shader file {}", path);
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| CoreError::Transport {
                    file: path.clone(),
                    cause: e.to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_existing_file() {
        let dir = std::env::temp_dir().join(format!("shaderfetch-src-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("fog.frag");
        tokio::fs::write(&path, "void main() {}").await.unwrap();

        let text = FileSource.fetch(path.to_str().unwrap()).await.unwrap();
        assert_eq!(text, "void main() {}");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_transport_error() {
        let err = FileSource
            .fetch("/nonexistent/shaderfetch/none.vert")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Transport { .. }));
        assert_eq!(err.file(), "/nonexistent/shaderfetch/none.vert");
    }
}
