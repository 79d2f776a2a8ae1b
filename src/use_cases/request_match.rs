use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use url::Url;

use crate::domain::{
    Matchmaking, MatchmakingBackend, MatchmakingError, MatchmakingResult, RegionalLatencies,
    ResourceMapping,
};

// Logical name of the matchmaking REST API in the resource mapping.
pub const MATCHMAKING_RESOURCE_NAME: &str = "MPSMatchmaking";

const REQUEST_MATCHMAKING_PATH: &str = "Prod/requestmatchmaking";

// Issues matchmaking requests and holds the single ticket this client owns.
// Once a ticket is stored it is never cleared; later requests are no-ops.
pub struct MatchRequestInitiator<R, B> {
    resources: R,
    backend: Arc<B>,
    logical_name: String,
    // The watch channel doubles as the lock around the ticket: the
    // completion task writes it, callers read it from any thread.
    ticket: Arc<watch::Sender<String>>,
}

impl<R, B> MatchRequestInitiator<R, B>
where
    R: ResourceMapping,
    B: MatchmakingBackend + 'static,
{
    pub fn new(resources: R, backend: B) -> Self {
        let (ticket, _) = watch::channel(String::new());
        Self {
            resources,
            backend: Arc::new(backend),
            logical_name: MATCHMAKING_RESOURCE_NAME.to_string(),
            ticket: Arc::new(ticket),
        }
    }

    pub fn with_logical_name(mut self, logical_name: impl Into<String>) -> Self {
        self.logical_name = logical_name.into();
        self
    }

    // Current ticket, if a request has completed successfully.
    pub fn ticket_id(&self) -> Option<String> {
        let ticket = self.ticket.borrow();
        (!ticket.is_empty()).then(|| ticket.clone())
    }

    // Observe ticket changes; an empty string means no ticket yet.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.ticket.subscribe()
    }

    // Fire-and-forget request. Every failure is logged here and never
    // reaches the caller beyond the returned flag.
    pub fn request_match(&self, latencies: &RegionalLatencies) -> bool {
        match self.start(latencies) {
            Ok(_job) => true,
            Err(MatchmakingError::DuplicateRequest { ticket_id }) => {
                tracing::warn!(%ticket_id, "ticket already exists");
                true
            }
            Err(error) => {
                tracing::error!(%error, "unable to request match");
                false
            }
        }
    }

    // Validate, build the endpoint and spawn the backend call. The returned
    // handle resolves after the success or failure continuation has run.
    pub fn start(&self, latencies: &RegionalLatencies) -> Result<JoinHandle<()>, MatchmakingError> {
        if latencies.is_empty() {
            return Err(MatchmakingError::InvalidInput);
        }

        if let Some(ticket_id) = self.ticket_id() {
            return Err(MatchmakingError::DuplicateRequest { ticket_id });
        }

        let region = self.resources.default_region();
        let resource_id = self.resources.resource_name_id(&self.logical_name);
        let endpoint = build_endpoint(&resource_id, &region, &serialize_latencies(latencies))?;

        let runtime = Handle::try_current().map_err(|_| {
            MatchmakingError::configuration("no async runtime available to issue the request")
        })?;

        tracing::debug!(%endpoint, regions = latencies.len(), "requesting matchmaking");

        let backend = Arc::clone(&self.backend);
        let ticket = Arc::clone(&self.ticket);
        Ok(runtime.spawn(async move {
            match backend.request_matchmaking(endpoint).await {
                Ok(result) => on_success(&ticket, result),
                Err(error) => on_failure(&error),
            }
        }))
    }
}

fn on_success(ticket: &watch::Sender<String>, result: MatchmakingResult) {
    if result.ticket_id.is_empty() {
        tracing::warn!("matchmaking response carried no ticket id");
        return;
    }

    tracing::info!(
        ticket_id = %result.ticket_id,
        players = result.players.len(),
        "matchmaking ticket received"
    );
    ticket.send_replace(result.ticket_id);
}

fn on_failure(error: &MatchmakingError) {
    tracing::error!(%error, "unable to request match");
}

impl<R, B> Matchmaking for MatchRequestInitiator<R, B>
where
    R: ResourceMapping,
    B: MatchmakingBackend + 'static,
{
    fn request_match(&self, latencies: &RegionalLatencies) -> bool {
        MatchRequestInitiator::request_match(self, latencies)
    }

    fn ticket_id(&self) -> Option<String> {
        MatchRequestInitiator::ticket_id(self)
    }
}

// Render latencies as the backend's "region_ms" tokens, space separated.
pub fn serialize_latencies(latencies: &RegionalLatencies) -> String {
    latencies
        .iter()
        .map(|(region, latency)| format!("{region}_{}", latency.as_millis()))
        .collect::<Vec<_>>()
        .join(" ")
}

// Build the API Gateway endpoint; the query is form encoded so spaces become '+'.
pub fn build_endpoint(
    resource_id: &str,
    region: &str,
    latencies_param: &str,
) -> Result<Url, MatchmakingError> {
    if resource_id.is_empty() {
        return Err(MatchmakingError::configuration(
            "matchmaking resource id is not mapped",
        ));
    }
    if region.is_empty() {
        return Err(MatchmakingError::configuration("default region is not mapped"));
    }

    let base =
        format!("https://{resource_id}.execute-api.{region}.amazonaws.com/{REQUEST_MATCHMAKING_PATH}");
    let mut endpoint = Url::parse(&base).map_err(|error| {
        MatchmakingError::configuration(format!("invalid matchmaking endpoint {base}: {error}"))
    })?;
    endpoint
        .query_pairs_mut()
        .append_pair("latencies", latencies_param);

    Ok(endpoint)
}
