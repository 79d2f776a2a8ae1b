mod errors;
mod latencies;
mod matchmaking;
mod ports;

// Re-export the domain boundary types and ports.
pub use errors::MatchmakingError;
pub use latencies::RegionalLatencies;
pub use matchmaking::{MatchmakingResult, PlayerAttributes, PlayerResult};
pub use ports::{Matchmaking, MatchmakingBackend, ResourceMapping};
