// Shared helpers for running an in-process stand-in for the matchmaking API.
use axum::Router;

// Serve the router on an ephemeral port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    // The listener is already bound, so requests queue until serve starts.
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend failed");
    });

    format!("http://{addr}")
}
