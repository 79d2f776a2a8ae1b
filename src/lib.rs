pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{
    Matchmaking, MatchmakingBackend, MatchmakingError, MatchmakingResult, PlayerAttributes,
    PlayerResult, RegionalLatencies, ResourceMapping,
};
pub use frameworks::server::run;
pub use interface_adapters::clients::HttpMatchmakingBackend;
pub use interface_adapters::decoder::{UnknownFields, decode_matchmaking_response};
pub use interface_adapters::resources::StaticResourceMapping;
pub use use_cases::request_match::MatchRequestInitiator;
