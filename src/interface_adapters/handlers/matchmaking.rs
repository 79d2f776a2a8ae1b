use crate::interface_adapters::protocol::{
    ErrorResponse, RequestMatchBody, RequestMatchResponse, TicketResponse,
};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Ask the backend for a match; the ticket arrives later.
#[tracing::instrument(
    name = "request_match",
    skip_all,
    fields(regions = body.latencies.0.len())
)]
pub async fn request_match(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RequestMatchBody>,
) -> Result<(StatusCode, Json<RequestMatchResponse>), ApiError> {
    let latencies = body.latencies.0;
    if latencies.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "regional latencies are required",
        ));
    }

    if !state.matchmaking.request_match(&latencies) {
        // Details were already logged by the initiator.
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "unable to request match",
        ));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(RequestMatchResponse { requested: true }),
    ))
}

pub async fn ticket(State(state): State<Arc<AppState>>) -> Result<Json<TicketResponse>, ApiError> {
    match state.matchmaking.ticket_id() {
        Some(ticket_id) => Ok(Json(TicketResponse { ticket_id })),
        None => Err(error_response(StatusCode::NOT_FOUND, "no active ticket")),
    }
}
