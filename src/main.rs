#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    matchmaking_client::run().await;
}
