use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::domain::{MatchmakingError, MatchmakingResult, PlayerAttributes, PlayerResult};

// What to do with keys the fixed response schema does not know about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFields {
    // Skip them; the backend may add fields at any time.
    #[default]
    Ignore,
    Reject,
}

// Wire shapes for GameLift's MatchmakingTicket as relayed by the backend.
// https://docs.aws.amazon.com/gamelift/latest/apireference/API_MatchmakingTicket.html
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RequestMatchmakingResponse {
    #[serde(rename = "TicketId", deserialize_with = "null_as_default")]
    ticket_id: String,
    #[serde(rename = "Players", deserialize_with = "null_as_default")]
    players: Vec<PlayerWire>,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

// https://docs.aws.amazon.com/gamelift/latest/apireference/API_Player.html
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlayerWire {
    #[serde(rename = "PlayerId", deserialize_with = "null_as_default")]
    player_id: String,
    #[serde(rename = "Team", deserialize_with = "null_as_default")]
    team: String,
    // Keys are region names, so nothing here is ever unknown.
    #[serde(rename = "LatencyInMs", deserialize_with = "null_as_default")]
    latencies: HashMap<String, i64>,
    #[serde(rename = "PlayerAttributes", deserialize_with = "null_as_default")]
    attributes: PlayerAttributesWire,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlayerAttributesWire {
    #[serde(deserialize_with = "null_as_default")]
    skill: SkillWire,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

// FlexMatch attribute value; "N" marks a number.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SkillWire {
    #[serde(rename = "N", deserialize_with = "null_as_default")]
    n: i64,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Decode a matchmaking response body. Any type mismatch on a known field
// aborts the whole decode; no partial result is returned.
pub fn decode_matchmaking_response(
    body: &[u8],
    policy: UnknownFields,
) -> Result<MatchmakingResult, MatchmakingError> {
    let response: RequestMatchmakingResponse = serde_json::from_slice(body)
        .map_err(|error| MatchmakingError::malformed(error.to_string()))?;

    if policy == UnknownFields::Reject {
        reject_unknown(&response)?;
    }

    let players = response
        .players
        .into_iter()
        .map(|player| PlayerResult {
            player_id: player.player_id,
            team: player.team,
            latencies: player.latencies,
            attributes: PlayerAttributes {
                skill: player.attributes.skill.n,
            },
        })
        .collect();

    Ok(MatchmakingResult {
        ticket_id: response.ticket_id,
        players,
    })
}

fn reject_unknown(response: &RequestMatchmakingResponse) -> Result<(), MatchmakingError> {
    check_fields("", &response.unknown)?;
    for (index, player) in response.players.iter().enumerate() {
        let path = format!("Players[{index}].");
        check_fields(&path, &player.unknown)?;
        check_fields(&format!("{path}PlayerAttributes."), &player.attributes.unknown)?;
        check_fields(
            &format!("{path}PlayerAttributes.skill."),
            &player.attributes.skill.unknown,
        )?;
    }
    Ok(())
}

fn check_fields(path: &str, unknown: &BTreeMap<String, Value>) -> Result<(), MatchmakingError> {
    match unknown.keys().next() {
        Some(key) => Err(MatchmakingError::malformed(format!(
            "unexpected field `{path}{key}`"
        ))),
        None => Ok(()),
    }
}
