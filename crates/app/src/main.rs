//! CineRecs - terminal client for the movie recommendation service.
//!
//! With no subcommand, runs the interactive UI: pick a genre, request
//! recommendations, see the result list. The `genres` and `recommend`
//! subcommands do the same over plain stdout for scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use api_client::{Genre, MovieRecommendation, RecommendationClient};
use app::state::{AppEvent, ViewState, ERR_NO_GENRE};
use app::ui;

/// Default backend address (the compose service name).
const DEFAULT_SERVER: &str = "http://server:8080";

/// CineRecs - Movie recommendation client
#[derive(Parser)]
#[command(name = "cine-recs")]
#[command(about = "Terminal client for the movie recommendation service", long_about = None)]
struct Cli {
    /// Base address of the recommendation backend
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the available genres
    Genres,

    /// Print recommendations for a genre
    Recommend {
        /// Genre to request recommendations for
        #[arg(long)]
        genre: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; stderr, so the terminal UI owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = RecommendationClient::new(cli.server);

    // Dispatch to the appropriate command handler
    match cli.command {
        Some(Commands::Genres) => handle_genres(client).await?,
        Some(Commands::Recommend { genre }) => handle_recommend(client, genre).await?,
        None => run_ui(client).await?,
    }

    Ok(())
}

/// Handle the 'genres' command
async fn handle_genres(client: RecommendationClient) -> Result<()> {
    let genres = client.get_genres().await.context("Failed to fetch genres")?;

    println!("{}", "Géneros disponibles:".bold().blue());
    for (i, genre) in genres.iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().green(), genre);
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(client: RecommendationClient, genre: String) -> Result<()> {
    if genre.trim().is_empty() {
        anyhow::bail!("{ERR_NO_GENRE}");
    }

    let movies = client
        .get_recommendations(&genre)
        .await
        .context("Failed to fetch recommendations")?;

    print_recommendations(&genre, &movies);
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(genre: &str, movies: &[MovieRecommendation]) {
    println!(
        "{}",
        format!("Películas recomendadas ({genre}):").bold().blue()
    );
    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} [{}] - Calificación: {:.1}",
            (rank + 1).to_string().green(),
            movie.title.bold(),
            movie.genres.join(", "),
            movie.avg_rating
        );
    }
    if movies.is_empty() {
        println!("No se encontraron recomendaciones para el género seleccionado.");
    }
}

/// Run the interactive terminal UI.
async fn run_ui(client: RecommendationClient) -> Result<()> {
    info!("Starting UI against {}", client.base_url());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, client).await;
    ratatui::restore();
    result
}

/// The single-threaded UI loop.
///
/// Selects over key events, fetch results, and a render tick. Fetches run
/// as spawned tasks so the screen keeps redrawing while a call is
/// outstanding; their results arrive over the channel and are applied in
/// arrival order.
async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    client: RecommendationClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    let mut state = ViewState::new();

    // Load the genre list, once per session
    state.begin_request();
    spawn_genre_load(client.clone(), tx.clone());

    while !state.should_quit {
        terminal
            .draw(|frame| ui::render(frame, &state))
            .context("Failed to draw frame")?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => handle_key(key, &mut state, &client, &tx),
                    Some(Err(err)) => return Err(err).context("Terminal event stream failed"),
                    None => break,
                    _ => {}
                }
            }
            Some(app_event) = rx.recv() => state.apply(app_event),
            _ = tick.tick() => state.tick(),
        }
    }

    Ok(())
}

fn handle_key(
    key: KeyEvent,
    state: &mut ViewState,
    client: &RecommendationClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit(),
        KeyCode::Up => state.select_prev(),
        KeyCode::Down => state.select_next(),
        KeyCode::Enter => {
            if let Some(genre) = state.request_recommendations() {
                spawn_recommendation_fetch(client.clone(), genre, tx.clone());
            }
        }
        _ => {}
    }
}

/// Fetch the genre list in the background.
fn spawn_genre_load(client: RecommendationClient, tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let result = client.get_genres().await;
        let _ = tx.send(AppEvent::GenresLoaded(result));
    });
}

/// Fetch recommendations for `genre` in the background.
fn spawn_recommendation_fetch(
    client: RecommendationClient,
    genre: Genre,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = client.get_recommendations(&genre).await;
        let _ = tx.send(AppEvent::RecommendationsLoaded(result));
    });
}
