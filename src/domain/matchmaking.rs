use std::collections::HashMap;

// Outcome of a successful matchmaking request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchmakingResult {
    pub ticket_id: String,
    pub players: Vec<PlayerResult>,
}

// A player attached to a matchmaking ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerResult {
    pub player_id: String,
    pub team: String,
    // Region name to latency in milliseconds.
    pub latencies: HashMap<String, i64>,
    pub attributes: PlayerAttributes,
}

// FlexMatch player attributes consumed by the ruleset; only skill for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerAttributes {
    pub skill: i64,
}
