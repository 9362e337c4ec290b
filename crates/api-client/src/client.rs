//! HTTP client for the recommendation backend.

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{ApiError, Result};
use crate::types::{Genre, MovieRecommendation};

/// Client for the movie recommendation backend.
///
/// Wraps a shared [`reqwest::Client`] and provides one typed method per
/// endpoint. Cloning is cheap (the underlying connection pool is shared),
/// so the UI event loop can hand clones to spawned fetch tasks.
///
/// No request timeout is configured; the transport defaults apply.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecommendationClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Base address of the backend (e.g., "http://server:8080").
    ///   A trailing slash is trimmed so endpoint paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the list of available genres.
    ///
    /// # Returns
    /// The genre labels in the order the server sent them.
    pub async fn get_genres(&self) -> Result<Vec<Genre>> {
        let url = format!("{}/getGenres", self.base_url);
        self.get_json(url).await
    }

    /// Fetch the recommended movies for one genre.
    ///
    /// The genre is passed as a query parameter and percent-encoded, so
    /// labels containing spaces or reserved characters are safe.
    ///
    /// # Returns
    /// The movie records in the order the server sent them.
    pub async fn get_recommendations(&self, genre: &str) -> Result<Vec<MovieRecommendation>> {
        let url = format!(
            "{}/getRecommendations?genre={}",
            self.base_url,
            urlencoding::encode(genre)
        );
        self.get_json(url).await
    }

    /// Get the base address of the backend this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request and decode a JSON body.
    ///
    /// Any non-success status is an error; the body of failed responses is
    /// not inspected.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|source| {
            error!("Transport failure for {}: {}", url, source);
            ApiError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Backend returned {} for {}", status, url);
            return Err(ApiError::BadStatus { url, status });
        }

        response.json::<T>().await.map_err(|source| {
            error!("Failed to decode response from {}: {}", url, source);
            ApiError::InvalidBody { url, source }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // ============================================================================
    // Mock Backend
    // ============================================================================

    /// Canned-response HTTP backend bound to a random local port.
    ///
    /// Serves the same response to every connection and records the request
    /// path of each, so tests can assert the exact URL the client hit.
    struct MockBackend {
        base_url: String,
        paths: Arc<Mutex<Vec<String>>>,
        handle: tokio::task::JoinHandle<()>,
    }

    impl MockBackend {
        fn recorded_paths(&self) -> Vec<String> {
            self.paths.lock().expect("Path log poisoned").clone()
        }
    }

    /// Start a mock backend that answers every request with `status_line`
    /// and `body`.
    async fn start_mock_backend(status_line: &'static str, body: &'static str) -> MockBackend {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to get local address");

        let paths = Arc::new(Mutex::new(Vec::new()));
        let recorded = paths.clone();

        let handle = tokio::spawn(async move {
            loop {
                let (mut stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let n = stream.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();

                    // Request line looks like "GET /getGenres HTTP/1.1"
                    if let Some(path) = request
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                    {
                        recorded
                            .lock()
                            .expect("Path log poisoned")
                            .push(path.to_string());
                    }

                    let response = format!(
                        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        MockBackend {
            base_url: format!("http://{addr}"),
            paths,
            handle,
        }
    }

    // ============================================================================
    // get_genres
    // ============================================================================

    #[tokio::test]
    async fn get_genres_preserves_server_order() {
        let backend =
            start_mock_backend("HTTP/1.1 200 OK", r#"["Action","Comedy","Drama"]"#).await;

        let client = RecommendationClient::new(backend.base_url.clone());
        let genres = client.get_genres().await.expect("get_genres failed");

        assert_eq!(genres, vec!["Action", "Comedy", "Drama"]);
        assert_eq!(backend.recorded_paths(), vec!["/getGenres"]);

        backend.handle.abort();
    }

    #[tokio::test]
    async fn get_genres_non_success_status_is_an_error() {
        let backend = start_mock_backend("HTTP/1.1 500 Internal Server Error", "").await;

        let client = RecommendationClient::new(backend.base_url.clone());
        let result = client.get_genres().await;

        match result {
            Err(ApiError::BadStatus { status, .. }) => {
                assert_eq!(status.as_u16(), 500);
            }
            other => panic!("Expected BadStatus, got {other:?}"),
        }

        backend.handle.abort();
    }

    #[tokio::test]
    async fn get_genres_invalid_body_is_an_error() {
        let backend = start_mock_backend("HTTP/1.1 200 OK", "not json at all").await;

        let client = RecommendationClient::new(backend.base_url.clone());
        let result = client.get_genres().await;

        assert!(
            matches!(result, Err(ApiError::InvalidBody { .. })),
            "Expected InvalidBody, got {result:?}"
        );

        backend.handle.abort();
    }

    // ============================================================================
    // get_recommendations
    // ============================================================================

    #[tokio::test]
    async fn get_recommendations_hits_genre_query() {
        let backend = start_mock_backend("HTTP/1.1 200 OK", "[]").await;

        let client = RecommendationClient::new(backend.base_url.clone());
        let movies = client
            .get_recommendations("Comedy")
            .await
            .expect("get_recommendations failed");

        assert!(movies.is_empty());
        assert_eq!(
            backend.recorded_paths(),
            vec!["/getRecommendations?genre=Comedy"]
        );

        backend.handle.abort();
    }

    #[tokio::test]
    async fn get_recommendations_percent_encodes_genre() {
        let backend = start_mock_backend("HTTP/1.1 200 OK", "[]").await;

        let client = RecommendationClient::new(backend.base_url.clone());
        client
            .get_recommendations("Sci Fi")
            .await
            .expect("get_recommendations failed");

        assert_eq!(
            backend.recorded_paths(),
            vec!["/getRecommendations?genre=Sci%20Fi"]
        );

        backend.handle.abort();
    }

    #[tokio::test]
    async fn get_recommendations_decodes_movie_records() {
        let backend = start_mock_backend(
            "HTTP/1.1 200 OK",
            r#"[{"title":"X","genres":["Comedy"],"avgRating":4.2}]"#,
        )
        .await;

        let client = RecommendationClient::new(backend.base_url.clone());
        let movies = client
            .get_recommendations("Comedy")
            .await
            .expect("get_recommendations failed");

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "X");
        assert_eq!(movies[0].genres, vec!["Comedy".to_string()]);
        assert_eq!(movies[0].avg_rating, 4.2);

        backend.handle.abort();
    }

    // ============================================================================
    // Transport / construction
    // ============================================================================

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        // Bind to grab a local port nothing is listening on, then drop it.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local address");
        drop(listener);

        let client = RecommendationClient::new(format!("http://{addr}"));
        let result = client.get_genres().await;

        assert!(
            matches!(result, Err(ApiError::Transport { .. })),
            "Expected Transport, got {result:?}"
        );
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        let client = RecommendationClient::new("http://server:8080/");
        assert_eq!(client.base_url(), "http://server:8080");
    }
}
