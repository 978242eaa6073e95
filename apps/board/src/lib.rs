//! # Order Board Library
//!
//! Host for the restaurant order board: event controller, dispatcher and a
//! text view, wired to a JSON-lines event feed on stdin.
//!
//! ## Module Organization
//! ```text
//! order_board/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── events.rs       ◄─── UiEvent (what the front end sends)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Event routing, Outcome
//! │   ├── drag.rs     ◄─── Drag-over tracker, drag start/end
//! │   ├── add.rs      ◄─── Add-order flow
//! │   ├── edit.rs     ◄─── Edit-order flow, delete
//! │   ├── help.rs     ◄─── Help overlay toggle
//! │   └── form.rs     ◄─── Form field input
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── board.rs    ◄─── BoardState (the store)
//! │   ├── snapshot.rs ◄─── BoardSnapshot (read-only projection)
//! │   └── config.rs   ◄─── ConfigState (board.toml + env)
//! ├── view/
//! │   ├── mod.rs      ◄─── BoardView trait, Layout (element map upkeep)
//! │   └── text.rs     ◄─── TextView
//! ├── dispatcher.rs   ◄─── Single task owning the state
//! ├── feed.rs         ◄─── stdin event feed
//! └── error.rs        ◄─── ApiError, ConfigError
//! ```
//!
//! ## Runtime Picture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stdin ──► feed ──► DispatcherHandle ──► Dispatcher task                │
//! │                            ▲                 │                          │
//! │                            │ reply           ├── commands::handle       │
//! │                            └─────────────────┤                          │
//! │                                              ├── TextView ──► stdout    │
//! │                                              │   (frames + error lines) │
//! │                                              └── watch ──► subscribers  │
//! │                                                                         │
//! │  logs ──► stderr                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod feed;
pub mod state;
pub mod view;

use std::path::PathBuf;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dispatcher::Dispatcher;
use state::{BoardState, ConfigState};
use view::TextView;

/// Runs the board until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • First CLI argument, else board.toml in the config directory      │
/// │     • ORDER_BOARD_* environment overrides                              │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG if set, else the configured filter                      │
/// │                                                                         │
/// │  3. Build State ──────────────────────────────────────────────────────► │
/// │     • Seed orders from the config                                      │
/// │                                                                         │
/// │  4. Spawn Dispatcher (initial frame painted)                           │
/// │                                                                         │
/// │  5. Feed stdin events, then shut the dispatcher down                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ConfigState::load(config_path)?;

    init_tracing(&config.log_filter);
    info!(title = %config.title, seeds = config.seed.len(), "Starting order board");

    let state = BoardState::from_config(&config)?;
    let view = TextView::new(std::io::stdout(), config.card_width);
    let (handle, task) = Dispatcher::spawn(state, view);

    let stdin = BufReader::new(tokio::io::stdin());
    let stats = feed::run_feed(stdin, &handle).await?;

    handle.shutdown().await;
    task.await?;

    info!(
        handled = stats.handled,
        rejected = stats.rejected,
        malformed = stats.malformed,
        "Order board stopped"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=order_board=trace` - Include per-input traces
/// - Default: the config's `log_filter`
///
/// Logs go to stderr; stdout carries board frames and error lines.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
