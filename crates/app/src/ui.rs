//! Rendering for the recommendation client.
//!
//! Layout, top to bottom: title, loading indicator, genre selector,
//! trigger, error region, recommendation list. Everything is a pure
//! function of the [`ViewState`].

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::state::ViewState;

/// Placeholder row at the top of the selector. Not submittable.
pub const PLACEHOLDER: &str = "Selecciona un género";

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Render the whole screen.
pub fn render(frame: &mut Frame, state: &ViewState) {
    let [title_area, spinner_area, picker_area, trigger_area, error_area, results_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(frame.area());

    render_title(frame, title_area);
    render_spinner(frame, state, spinner_area);
    render_genre_picker(frame, state, picker_area);
    render_trigger(frame, state, trigger_area);
    render_error(frame, state, error_area);
    render_recommendations(frame, state, results_area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Recomendador de Películas")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Spinner line, shown only while a request is outstanding.
fn render_spinner(frame: &mut Frame, state: &ViewState, area: Rect) {
    if !state.loading {
        return;
    }
    let spinner = SPINNER_CHARS[state.spinner_frame % SPINNER_CHARS.len()];
    let loading = Paragraph::new(format!("{spinner} Cargando..."))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(loading, area);
}

/// Single-choice genre selector: placeholder row plus one row per genre,
/// in the order the server sent them.
fn render_genre_picker(frame: &mut Frame, state: &ViewState, area: Rect) {
    let mut items: Vec<ListItem> = Vec::with_capacity(state.genres.len() + 1);
    items.push(ListItem::new(PLACEHOLDER).style(Style::default().add_modifier(Modifier::DIM)));
    for genre in &state.genres {
        items.push(ListItem::new(genre.as_str()));
    }

    let list = List::new(items)
        .block(Block::default().title("Género").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// The fetch trigger. Dimmed whenever no genre is selected or a request is
/// in flight, matching the enabled state in [`ViewState::can_fetch`].
fn render_trigger(frame: &mut Frame, state: &ViewState, area: Rect) {
    let style = if state.can_fetch() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let trigger = Paragraph::new("[ Obtener Recomendaciones ]")
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(trigger, area);
}

fn render_error(frame: &mut Frame, state: &ViewState, area: Rect) {
    if let Some(message) = &state.error {
        let error = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, area);
    }
}

/// Recommendation list; rendered only when non-empty, regardless of error
/// state.
fn render_recommendations(frame: &mut Frame, state: &ViewState, area: Rect) {
    if state.recommendations.is_empty() {
        return;
    }
    let items: Vec<ListItem> = state
        .recommendations
        .iter()
        .map(|movie| {
            ListItem::new(format!(
                "{} - Géneros: {} - Calificación: {}",
                movie.title,
                movie.genres.join(", "),
                movie.avg_rating
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Películas recomendadas:")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
