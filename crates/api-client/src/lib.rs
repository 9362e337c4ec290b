//! # API Client Crate
//!
//! Typed HTTP client for the movie recommendation backend.
//!
//! The backend exposes two read-only endpoints:
//!
//! - `GET /getGenres` - JSON array of genre labels
//! - `GET /getRecommendations?genre=<value>` - JSON array of movie records
//!
//! ## Main Components
//!
//! - **types**: Wire types (`Genre`, `MovieRecommendation`)
//! - **client**: `RecommendationClient` with one method per endpoint
//! - **error**: Error types for transport, status, and decode failures
//!
//! ## Example Usage
//!
//! ```ignore
//! use api_client::RecommendationClient;
//!
//! let client = RecommendationClient::new("http://server:8080");
//! let genres = client.get_genres().await?;
//! let movies = client.get_recommendations(&genres[0]).await?;
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use client::RecommendationClient;
pub use error::{ApiError, Result};
pub use types::{Genre, MovieRecommendation};
