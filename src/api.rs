//! HTTP client for the channels API.
//!
//! `PATCH {base}/api/channels/{channelId}?serverId={serverId}` with a JSON
//! `ChannelUpdate` body. Any 2xx is success and the response body is ignored.

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::model::ChannelUpdate;

/// Errors from a channel API call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("No channel or server selected")]
    MissingContext,

    #[error("API client is not configured")]
    NotConfigured,

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for channel endpoints rooted at a base URL.
#[derive(Clone, Debug)]
pub struct ChannelsClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ChannelsClient {
    /// Create a client. `base_url` may or may not end with a slash.
    pub fn new(base_url: &str, token: Option<String>) -> ApiResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        })
    }

    /// Build the URL for one channel, scoped by its server.
    pub fn channel_url(&self, channel_id: &str, server_id: &str) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "channels", channel_id]);
        url.query_pairs_mut().clear().append_pair("serverId", server_id);
        Ok(url)
    }

    /// Send a channel update. Returns once the server answered 2xx.
    pub async fn update_channel(
        &self,
        channel_id: &str,
        server_id: &str,
        update: &ChannelUpdate,
    ) -> ApiResult<()> {
        let url = self.channel_url(channel_id, server_id)?;
        debug!(%url, "PATCH channel");

        let mut request = self.http.patch(url).json(update);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
