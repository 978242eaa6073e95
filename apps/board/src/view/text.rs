//! Plain-text view: one frame per reconcile, written to any `io::Write`.
//!
//! ```text
//! === Order Board · rev 3 ===
//! [data-area="ordered"] Ordered (1)
//!   #100 Pasta · table 12 · 3f2a1b9c
//! [data-area="preparing"] Preparing (0)  <= drop
//! [data-area="served"] Served (0)
//! edit: title="Pasta" table="12" id="3f2a…" column="ordered"
//! {"code":"NOT_FOUND","message":"There are no orders to edit"}
//! ```
//!
//! Frames and error lines share the one writer, so they come out in the
//! order the dispatcher handled them.

use std::fmt::Write as _;
use std::io::Write;

use board_core::{ElementMap, FocusTarget, Marker, OverlayKind};
use tracing::warn;

use super::{BoardView, Layout};
use crate::error::ApiError;
use crate::state::BoardSnapshot;

const HELP_TEXT: &[&str] = &[
    "Drag a card onto another column to move it.",
    "Click a card to edit, move or delete it.",
    "Use \"Add Order\" to place a new order in the first column.",
];

/// Renders the board as text frames.
pub struct TextView<W> {
    layout: Layout,
    out: W,
    card_width: usize,
}

impl<W: Write + Send> TextView<W> {
    pub fn new(out: W, card_width: usize) -> Self {
        TextView {
            layout: Layout::new(),
            out,
            card_width,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> BoardView for TextView<W> {
    fn reconcile(&mut self, snapshot: &BoardSnapshot) {
        self.layout.sync(snapshot);
        let frame = render_frame(snapshot, &self.layout, self.card_width);

        let written = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            warn!(error = %e, "Failed to write board frame");
        }
    }

    fn report(&mut self, error: &ApiError) {
        let written = serde_json::to_string(error)
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(self.out, "{}", line))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            warn!(error = %e, "Failed to write error line");
        }
    }

    fn elements(&self) -> &ElementMap {
        self.layout.elements()
    }
}

/// Renders one frame.
pub fn render_frame(snapshot: &BoardSnapshot, layout: &Layout, card_width: usize) -> String {
    let mut frame = String::new();
    let _ = writeln!(frame, "=== {} · rev {} ===", snapshot.title, snapshot.revision);

    for col in &snapshot.columns {
        let (attr, value) = Marker::Area(col.column).attribute();
        let _ = write!(
            frame,
            "[{}={:?}] {} ({})",
            attr,
            value,
            col.column.heading(),
            col.orders.len()
        );
        if col.hovered {
            frame.push_str("  <= drop");
        }
        frame.push('\n');

        for order in &col.orders {
            let card = layout
                .card_id(&order.id)
                .map(|el| format!("#{}", el.0))
                .unwrap_or_else(|| "#?".to_string());
            let _ = writeln!(
                frame,
                "  {} {} · table {} · {}",
                card,
                truncate(&order.title, card_width),
                truncate(&order.table, card_width),
                order.id.short()
            );
        }
    }

    if snapshot.is_empty() {
        frame.push_str("(no orders)\n");
    }

    for kind in snapshot.overlays.visible() {
        match kind {
            OverlayKind::Help => {
                frame.push_str("help:\n");
                for line in HELP_TEXT {
                    let _ = writeln!(frame, "  {}", line);
                }
            }
            OverlayKind::Add => {
                let _ = writeln!(
                    frame,
                    "add: title={:?} table={:?}",
                    snapshot.add_form.title, snapshot.add_form.table
                );
            }
            OverlayKind::Edit => {
                let form = &snapshot.edit_form;
                let _ = writeln!(
                    frame,
                    "edit: title={:?} table={:?} id={:?} column={:?}",
                    form.title, form.table, form.id, form.column
                );
            }
        }
    }

    if let Some(FocusTarget::AddButton) = snapshot.focus {
        frame.push_str("focus: add order\n");
    }

    frame
}

/// Cuts `s` to `max` characters, marking the cut with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BoardState;
    use board_core::{Column, NewOrder};

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Pasta", 12), "Pasta");
        assert_eq!(truncate("Spaghetti carbonara", 6), "Spagh…");
    }

    #[test]
    fn test_frame_lists_cards_and_hover() {
        let mut state = BoardState::new("Trattoria");
        state.board.add(NewOrder::new("Pasta", "12"), Column::Ordered);

        let mut view = TextView::new(Vec::new(), 24);
        state
            .drag
            .track_over(view.elements(), &[Layout::area_id(Column::Served)]);
        view.reconcile(&state.snapshot());

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.starts_with("=== Trattoria · rev 0 ==="));
        assert!(text.contains(r#"[data-area="ordered"] Ordered (1)"#));
        assert!(text.contains("#100 Pasta · table 12"));
        assert!(text.contains(r#"[data-area="served"] Served (0)  <= drop"#));
        assert!(!text.contains("help:"));
        assert!(!text.contains("(no orders)"));
    }

    #[test]
    fn test_empty_board_frame() {
        let frame = render_frame(&BoardState::new("Test").snapshot(), &Layout::new(), 24);
        assert!(frame.contains("(no orders)"));
    }

    #[test]
    fn test_errors_follow_frames_on_one_writer() {
        let mut view = TextView::new(Vec::new(), 24);
        view.reconcile(&BoardState::new("Test").snapshot());
        view.report(&ApiError::not_found("Order", "5"));

        let text = String::from_utf8(view.into_inner()).unwrap();
        let last = text.lines().last().unwrap();
        assert!(text.starts_with("=== Test · rev 0 ==="));
        let json: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[test]
    fn test_frame_shows_overlays() {
        let mut state = BoardState::new("Test");
        state.overlays.help.toggle();
        state.overlays.edit.show();
        state.edit_form.id = "5".into();
        state.focus = Some(FocusTarget::AddButton);

        let frame = render_frame(&state.snapshot(), &Layout::new(), 24);
        assert!(frame.contains("help:"));
        assert!(frame.contains(r#"id="5""#));
        assert!(frame.contains("focus: add order"));
    }
}
