//! View state and transition logic for the recommendation client.
//!
//! All mutations go through the methods here and are driven from the single
//! UI thread, so the state needs no locking. Transitions are plain functions
//! of (state, event), which keeps every observable behavior testable without
//! a terminal or a network.

use api_client::{ApiError, Genre, MovieRecommendation};
use tracing::error;

/// Fixed user-facing message when the genre list cannot be fetched.
pub const ERR_GENRES: &str = "Error al obtener los géneros";

/// Fixed user-facing message when recommendations cannot be fetched.
pub const ERR_RECOMMENDATIONS: &str = "Error al obtener las recomendaciones";

/// Fixed user-facing message when the trigger fires with no genre selected.
pub const ERR_NO_GENRE: &str = "Por favor selecciona un género";

/// Events delivered to the UI loop by background fetch tasks.
///
/// Events are applied in arrival order; when two fetches overlap, the last
/// response to resolve wins. No ordering is enforced between requests.
#[derive(Debug)]
pub enum AppEvent {
    GenresLoaded(Result<Vec<Genre>, ApiError>),
    RecommendationsLoaded(Result<Vec<MovieRecommendation>, ApiError>),
}

/// The client's entire UI state. Process-local, recreated per session.
#[derive(Debug)]
pub struct ViewState {
    /// Genre labels in server order. Empty until the initial load succeeds.
    pub genres: Vec<Genre>,
    /// Selector position. Position 0 is the placeholder row; position `n`
    /// (1-based) is `genres[n - 1]`.
    pub selected: usize,
    /// Movie records from the most recent successful fetch.
    pub recommendations: Vec<MovieRecommendation>,
    /// Current user-facing error message, if any.
    pub error: Option<String>,
    /// True exactly while a network call is outstanding.
    pub loading: bool,
    /// Spinner animation frame, advanced by the UI tick while loading.
    pub spinner_frame: usize,
    /// Set when the user asks to exit.
    pub should_quit: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            genres: Vec::new(),
            selected: 0,
            recommendations: Vec::new(),
            error: None,
            loading: false,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// The genre the selector currently points at, or `None` on the
    /// placeholder row.
    pub fn selected_genre(&self) -> Option<&Genre> {
        if self.selected == 0 {
            None
        } else {
            self.genres.get(self.selected - 1)
        }
    }

    /// Whether the trigger is enabled: a genre is selected and no request
    /// is in flight.
    pub fn can_fetch(&self) -> bool {
        !self.loading && self.selected_genre().is_some()
    }

    /// Move the selector down one row, stopping at the last genre.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.genres.len());
    }

    /// Move the selector up one row, stopping at the placeholder.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Mark a request as in flight.
    ///
    /// A previous error is cleared at the start of every new request, so a
    /// success implicitly clears it and a failure replaces it.
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Validate the selection and, if a fetch is permitted, transition into
    /// the loading state and return the genre to request.
    ///
    /// Returns `None` without touching the state while a request is in
    /// flight (the trigger is disabled). With no genre selected, sets the
    /// validation message and performs no request; this holds even when the
    /// disabled trigger is bypassed.
    pub fn request_recommendations(&mut self) -> Option<Genre> {
        if self.loading {
            return None;
        }
        let Some(genre) = self.selected_genre().cloned() else {
            self.error = Some(ERR_NO_GENRE.to_string());
            return None;
        };
        self.begin_request();
        Some(genre)
    }

    /// Apply the outcome of a background fetch.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::GenresLoaded(Ok(genres)) => {
                self.genres = genres;
                self.selected = self.selected.min(self.genres.len());
                self.loading = false;
            }
            AppEvent::GenresLoaded(Err(err)) => {
                error!("Genre fetch failed: {err}");
                self.error = Some(ERR_GENRES.to_string());
                self.loading = false;
            }
            AppEvent::RecommendationsLoaded(Ok(recommendations)) => {
                self.recommendations = recommendations;
                self.loading = false;
            }
            AppEvent::RecommendationsLoaded(Err(err)) => {
                error!("Recommendation fetch failed: {err}");
                self.error = Some(ERR_RECOMMENDATIONS.to_string());
                self.loading = false;
            }
        }
    }

    /// Advance the spinner while a request is outstanding.
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
