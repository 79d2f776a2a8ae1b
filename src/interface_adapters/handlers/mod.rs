pub mod matchmaking;
