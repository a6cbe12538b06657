//! HTTP shader source built on reqwest.

use std::future::Future;

use corelib::{CoreError, CoreResult};

use crate::{config::LoaderConfig, source::ShaderSource};

/// Fetches shader text with a plain GET per file.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a client with the timeouts and user agent from `config`.
    pub fn new(config: &LoaderConfig) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| CoreError::Transport {
                file: config.base.clone(),
                cause: format!("Failed to create HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ShaderSource for HttpSource {
    fn fetch(&self, location: &str) -> impl Future<Output = CoreResult<String>> + Send {
        let client = self.client.clone();
        let url = location.to_string();
        async move {
            log::debug!("GET {}", url);
            let transport = |cause: String| CoreError::Transport {
                file: url.clone(),
                cause,
            };

            let response = client.get(&url).send().await.map_err(|e| {
                if e.is_connect() {
                    transport(format!("Connection failed: {}", e))
                } else if e.is_timeout() {
                    transport("Connection timed out".to_string())
                } else {
                    transport(format!("Request failed: {}", e))
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(CoreError::Retrieval {
                    file: url.clone(),
                    status: status.as_u16(),
                });
            }

            response
                .text()
                .await
                .map_err(|e| transport(format!("Failed to read body: {}", e)))
        }
    }
}
