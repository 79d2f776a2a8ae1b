mod support;

use async_trait::async_trait;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use matchmaking_client::{
    HttpMatchmakingBackend, MatchRequestInitiator, MatchmakingBackend, MatchmakingError,
    MatchmakingResult, RegionalLatencies, StaticResourceMapping,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

// Echo the latency tokens back the way the serverless backend reports them.
async fn request_matchmaking(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let latencies: serde_json::Map<String, Value> = query
        .get("latencies")
        .map(String::as_str)
        .unwrap_or_default()
        .split(' ')
        .filter_map(|token| token.rsplit_once('_'))
        .filter_map(|(region, ms)| {
            let ms = ms.parse::<i64>().ok()?;
            Some((region.to_string(), json!(ms)))
        })
        .collect();

    Json(json!({
        "TicketId": format!("ticket-{}", uuid::Uuid::new_v4()),
        "Status": "QUEUED",
        "Players": [{
            "PlayerId": "player-1",
            "Team": "red",
            "LatencyInMs": latencies,
            "PlayerAttributes": {"skill": {"N": 10}}
        }]
    }))
}

async fn failing() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({"message": "Internal server error"})),
    )
}

async fn garbled() -> &'static str {
    r#"{"TicketId":"abc123","Players":[{"LatencyInMs":{"us-east-1":"n/a"}}]}"#
}

fn stub_router() -> Router {
    Router::new()
        .route("/Prod/requestmatchmaking", get(request_matchmaking))
        .route("/Prod/failing", get(failing))
        .route("/Prod/garbled", get(garbled))
}

// Points the API Gateway endpoint at the local stub, keeping path and query.
struct LocalBackend {
    inner: HttpMatchmakingBackend,
    base_url: String,
}

#[async_trait]
impl MatchmakingBackend for LocalBackend {
    async fn request_matchmaking(
        &self,
        endpoint: Url,
    ) -> Result<MatchmakingResult, MatchmakingError> {
        let mut local = Url::parse(&self.base_url).expect("valid stub url");
        local.set_path(endpoint.path());
        local.set_query(endpoint.query());
        self.inner.request_matchmaking(local).await
    }
}

#[tokio::test]
async fn when_backend_accepts_request_then_result_is_decoded() {
    let base_url = support::spawn_backend(stub_router()).await;
    let endpoint = Url::parse(&format!(
        "{base_url}/Prod/requestmatchmaking?latencies=us-east-1_42+eu-west-1_100"
    ))
    .expect("valid endpoint");

    let result = HttpMatchmakingBackend::new()
        .request_matchmaking(endpoint)
        .await
        .expect("expected matchmaking to succeed");

    assert!(result.ticket_id.starts_with("ticket-"));
    let player = &result.players[0];
    assert_eq!(player.player_id, "player-1");
    assert_eq!(player.latencies.get("us-east-1"), Some(&42));
    assert_eq!(player.latencies.get("eu-west-1"), Some(&100));
    assert_eq!(player.attributes.skill, 10);
}

#[tokio::test]
async fn when_backend_returns_error_status_then_message_is_kept() {
    let base_url = support::spawn_backend(stub_router()).await;
    let endpoint = Url::parse(&format!("{base_url}/Prod/failing")).expect("valid endpoint");

    let result = HttpMatchmakingBackend::new()
        .request_matchmaking(endpoint)
        .await;

    match result {
        Err(MatchmakingError::Upstream { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message.as_deref(), Some("Internal server error"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn when_backend_body_is_malformed_then_decode_fails() {
    let base_url = support::spawn_backend(stub_router()).await;
    let endpoint = Url::parse(&format!("{base_url}/Prod/garbled")).expect("valid endpoint");

    let result = HttpMatchmakingBackend::new()
        .request_matchmaking(endpoint)
        .await;

    assert!(matches!(
        result,
        Err(MatchmakingError::MalformedResponse { .. })
    ));
}

#[tokio::test]
async fn when_backend_is_unreachable_then_transport_error_is_returned() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    let endpoint = Url::parse(&format!("http://{addr}/Prod/requestmatchmaking"))
        .expect("valid endpoint");

    let result = HttpMatchmakingBackend::new()
        .request_matchmaking(endpoint)
        .await;

    assert!(matches!(result, Err(MatchmakingError::Transport { .. })));
}

#[tokio::test]
async fn when_initiator_requests_match_then_ticket_is_stored_once() {
    let base_url = support::spawn_backend(stub_router()).await;
    let resources = StaticResourceMapping::new("us-west-2").with_resource("MPSMatchmaking", "abc123");
    let backend = LocalBackend {
        inner: HttpMatchmakingBackend::new(),
        base_url,
    };
    let initiator = MatchRequestInitiator::new(resources, backend);
    let latencies: RegionalLatencies = [
        ("us-east-1", Duration::from_millis(42)),
        ("eu-west-1", Duration::from_millis(100)),
    ]
    .into_iter()
    .collect();

    initiator
        .start(&latencies)
        .expect("expected request to be issued")
        .await
        .expect("expected job to complete");

    let ticket_id = initiator.ticket_id().expect("expected a ticket");
    assert!(ticket_id.starts_with("ticket-"));

    // A second request keeps the first ticket.
    assert!(initiator.request_match(&latencies));
    assert_eq!(initiator.ticket_id(), Some(ticket_id));
}
