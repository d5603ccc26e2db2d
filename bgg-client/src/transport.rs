use std::time::Duration;

use crate::error::BggError;
use crate::settings::ClientSettings;

/// Fetches the raw body behind a URL.
///
/// The client only ever issues GET requests and does its own decoding, so
/// implementations return bytes untouched. Retries and timeouts are the
/// implementation's business.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, BggError>;
}

/// [`Transport`] over a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, BggError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { http })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, BggError> {
        Self::new(settings.timeout(), &settings.user_agent)
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, BggError> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BggError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}
