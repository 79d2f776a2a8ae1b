pub mod clients;
pub mod decoder;
pub mod handlers;
pub mod protocol;
pub mod resources;
pub mod routes;
pub mod state;
