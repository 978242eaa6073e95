//! # Event Feed
//!
//! Bridge between a front end and the dispatcher: newline-delimited JSON
//! events in. Frames and error lines are written by the view, so every
//! output line goes through the dispatcher queue in input order.
//!
//! ```text
//!   stdin                         dispatcher                 view writer
//!   ─────                         ──────────                 ───────────
//!   {"event":"add_toggle"}  ───►  handled  ──► reconcile ──► === Order Board · rev 1 ===
//!   (blank)                       skipped
//!   not json                ───►  report   ──────────────► {"code":"VALIDATION_ERROR",...}
//!   {"event":"edit_open"}   ───►  rejected ──► report ────► {"code":"NOT_FOUND",...}
//! ```

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::dispatcher::DispatcherHandle;
use crate::error::ApiError;
use crate::events::UiEvent;

/// Counters for one feed session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Events the dispatcher accepted.
    pub handled: usize,
    /// Events the dispatcher rejected.
    pub rejected: usize,
    /// Lines that were not a valid event.
    pub malformed: usize,
}

/// Reads events until end of input, dispatching each in order.
///
/// ## Errors
/// Only I/O errors on `reader` end the feed early.
pub async fn run_feed<R>(reader: R, handle: &DispatcherHandle) -> std::io::Result<FeedStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = FeedStats::default();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<UiEvent>(line) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Malformed event line");
                stats.malformed += 1;
                let err = ApiError::validation(format!("Malformed event: {}", e));
                if let Err(e) = handle.report(err).await {
                    warn!(error = %e, "Could not report malformed line");
                }
                continue;
            }
        };

        match handle.dispatch(event).await {
            Ok(snapshot) => {
                debug!(revision = snapshot.revision, "Event handled");
                stats.handled += 1;
            }
            Err(_) => stats.rejected += 1,
        }
    }

    info!(
        handled = stats.handled,
        rejected = stats.rejected,
        malformed = stats.malformed,
        "Event feed closed"
    );
    Ok(stats)
}

// =============================================================================
// Unit Tests
// =============================================================================
