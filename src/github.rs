use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::config::ActivityConfig;

pub mod events;
pub use events::{Event, EventPayload, EventType, RefType};

// NOTE: not a typo, this is the header name the CLI has always sent
const ACCEPTS: &str = "Accepts";
const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("response error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("user {0} not found")]
    NotFound(String),
    #[error("API rate limit exceeded")]
    RateLimited,
    #[error("API request failed with status code: {0}")]
    UnexpectedStatus(u16),
    #[error("couldn't read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
    #[error("couldn't decode event list: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct GitHubClient {
    client: reqwest::Client,
    api_url: Url,
}

impl GitHubClient {
    /// Builds a [`reqwest::Client`] identifying itself with the configured user agent.
    pub fn new(config: &ActivityConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// The username is inserted as-is, without any escaping.
    pub fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/events",
            self.api_url.as_str().trim_end_matches('/'),
            username
        )
    }

    /// Fetches the latest public events of `username`, newest first.
    ///
    /// `deadline` bounds the whole exchange, from connecting to the server until the body has been
    /// read. Nothing is retried.
    pub async fn user_events(
        &self,
        username: &str,
        deadline: Duration,
    ) -> Result<Vec<Event>, FetchError> {
        let url = self.events_url(username);
        debug!("fetching events from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPTS, APPLICATION_JSON)
            .timeout(deadline)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(deadline)
                } else {
                    FetchError::Network(e)
                }
            })?;

        let status = response.status();
        debug!("API answered with status {}", status);
        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(FetchError::NotFound(username.to_owned())),
            StatusCode::FORBIDDEN => return Err(FetchError::RateLimited),
            other => return Err(FetchError::UnexpectedStatus(other.as_u16())),
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(deadline)
            } else {
                FetchError::BodyRead(e)
            }
        })?;

        let events: Vec<Event> = serde_json::from_slice(&body)?;
        info!("received {} events for {}", events.len(), username);

        Ok(events)
    }
}
