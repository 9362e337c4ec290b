//! Fetch and print the genre list from a running backend.
//!
//! Usage: cargo run -p api-client --example list_genres -- http://localhost:8080

use api_client::RecommendationClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://server:8080".to_string());

    let client = RecommendationClient::new(base_url);
    for (i, genre) in client.get_genres().await?.iter().enumerate() {
        println!("{}. {}", i + 1, genre);
    }

    Ok(())
}
