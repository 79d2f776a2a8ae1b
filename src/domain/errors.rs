// Error kinds surfaced while requesting a match.
#[derive(Debug, thiserror::Error)]
pub enum MatchmakingError {
    #[error("regional latencies are required to determine the best server to join")]
    InvalidInput,

    // Benign: the caller already holds a ticket.
    #[error("ticket already exists: {ticket_id}")]
    DuplicateRequest { ticket_id: String },

    #[error("matchmaking transport error: {message}")]
    Transport { message: String },

    #[error(
        "matchmaking backend error {status}: {}",
        .message.as_deref().unwrap_or("no message")
    )]
    Upstream { status: u16, message: Option<String> },

    #[error("malformed matchmaking response: {reason}")]
    MalformedResponse { reason: String },

    #[error("matchmaking configuration error: {reason}")]
    Configuration { reason: String },
}

impl MatchmakingError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        MatchmakingError::Configuration {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        MatchmakingError::MalformedResponse {
            reason: reason.into(),
        }
    }
}
