use crate::domain::Matchmaking;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Any matchmaking implementation can sit behind the routes.
    pub matchmaking: Arc<dyn Matchmaking>,
}
