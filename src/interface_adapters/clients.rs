use crate::domain::{MatchmakingBackend, MatchmakingError, MatchmakingResult};
use crate::interface_adapters::decoder::{UnknownFields, decode_matchmaking_response};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

// Thin wrapper around reqwest for the serverless matchmaking API.
// No retries and no timeout of its own; the transport decides.
#[derive(Clone)]
pub struct HttpMatchmakingBackend {
    http: Client,
    policy: UnknownFields,
}

// API Gateway and Lambda errors carry "message"; some proxies use "Message".
#[derive(Debug, Deserialize)]
struct BackendErrorResponse {
    #[serde(alias = "Message")]
    message: String,
}

impl HttpMatchmakingBackend {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            policy: UnknownFields::Ignore,
        }
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for HttpMatchmakingBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchmakingBackend for HttpMatchmakingBackend {
    async fn request_matchmaking(
        &self,
        endpoint: Url,
    ) -> Result<MatchmakingResult, MatchmakingError> {
        // GET with an empty body; the latencies travel in the query string.
        let res = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|error| MatchmakingError::Transport {
                message: error.to_string(),
            })?;
        let status = res.status();

        // Keep the backend-provided message for the failure log line.
        if !status.is_success() {
            let message = res
                .json::<BackendErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.message);
            return Err(MatchmakingError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = res
            .bytes()
            .await
            .map_err(|error| MatchmakingError::Transport {
                message: error.to_string(),
            })?;

        decode_matchmaking_response(&body, self.policy)
    }
}
