//! Wire types for the recommendation backend.

use serde::{Deserialize, Serialize};

/// A genre label as returned by the backend.
///
/// Genres are plain text, unique within the list returned by `/getGenres`,
/// and displayed in the order the server sends them.
pub type Genre = String;

/// One recommended movie as returned by `/getRecommendations`.
///
/// The backend uses camelCase field names on the wire (`avgRating`);
/// unknown fields are ignored. Movies carry no identifier, list position
/// is the only key the client has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecommendation {
    pub title: String,
    pub genres: Vec<Genre>,
    pub avg_rating: f64,
}
