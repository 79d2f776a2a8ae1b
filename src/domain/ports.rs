use async_trait::async_trait;
use url::Url;

use crate::domain::{MatchmakingError, MatchmakingResult, RegionalLatencies};

// Port resolving deployment values (region, backend resource ids).
// Empty strings mean the value is not mapped.
pub trait ResourceMapping: Send + Sync {
    fn default_region(&self) -> String;
    fn resource_name_id(&self, logical_name: &str) -> String;
}

// Port for the remote matchmaking backend. One call yields exactly one result.
// Taking a `Url` here is a dependency leak, but the endpoint is the contract.
#[async_trait]
pub trait MatchmakingBackend: Send + Sync {
    async fn request_matchmaking(&self, endpoint: Url)
    -> Result<MatchmakingResult, MatchmakingError>;
}

// Matchmaking entry point exposed to the game client.
pub trait Matchmaking: Send + Sync {
    fn request_match(&self, latencies: &RegionalLatencies) -> bool;
    fn ticket_id(&self) -> Option<String>;
}
