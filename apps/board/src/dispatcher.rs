//! # Event Dispatcher
//!
//! Single task that owns the board state and handles UI events one at a
//! time.
//!
//! ## Dispatcher Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dispatcher Architecture                          │
//! │                                                                         │
//! │  DispatcherHandle (Clone)          Dispatcher task                      │
//! │  ────────────────────────          ───────────────                      │
//! │                                                                         │
//! │  dispatch(event) ──Request::Event──► ┌──────────────────────────────┐   │
//! │        ▲                             │ commands::handle(state, ...) │   │
//! │        │                             │          │                   │   │
//! │        │                             │   Changed? ── no ──┐         │   │
//! │        │                             │          │ yes     │         │   │
//! │        │                             │          ▼         │         │   │
//! │        │                             │ revision += 1      │         │   │
//! │        │                             │ view.reconcile()   │         │   │
//! │        │                             │ publish (watch)    │         │   │
//! │        │                             │          │         │         │   │
//! │        └────── oneshot reply ◄───────┤──────────┴─────────┘         │   │
//! │                                      └──────────────────────────────┘   │
//! │  report(error) ──Request::Report──► view.report() (same writer)         │
//! │  subscribe() ◄──── watch::Receiver<BoardSnapshot>                       │
//! │  shutdown()  ──Request::Shutdown──► loop exits, view handed back        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requests are processed strictly in arrival order. A handler never runs
//! concurrently with another handler.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::commands::{self, Outcome};
use crate::error::{ApiError, ApiResult};
use crate::events::UiEvent;
use crate::state::{BoardSnapshot, BoardState};
use crate::view::BoardView;

/// Queue depth between handles and the dispatcher task.
const QUEUE_CAPACITY: usize = 64;

// =============================================================================
// Requests
// =============================================================================

/// Messages accepted by the dispatcher task.
#[derive(Debug)]
enum Request {
    /// Handle one UI event and reply with the resulting snapshot.
    Event {
        event: UiEvent,
        reply: oneshot::Sender<ApiResult<BoardSnapshot>>,
    },

    /// Show an error that never reached a command (unreadable input).
    Report { error: ApiError },

    /// Reply with the current snapshot.
    Snapshot {
        reply: oneshot::Sender<BoardSnapshot>,
    },

    /// Stop after the requests already queued.
    Shutdown,
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Owner of the board state and its view.
pub struct Dispatcher<V> {
    state: BoardState,
    view: V,
    rx: mpsc::Receiver<Request>,
    published: watch::Sender<BoardSnapshot>,
}

impl<V: BoardView + 'static> Dispatcher<V> {
    /// Creates the dispatcher and its handle, painting the initial state.
    pub fn new(state: BoardState, mut view: V) -> (Self, DispatcherHandle) {
        let snapshot = state.snapshot();
        view.reconcile(&snapshot);

        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let (published, subscriber) = watch::channel(snapshot);

        let dispatcher = Dispatcher {
            state,
            view,
            rx,
            published,
        };
        let handle = DispatcherHandle { tx, subscriber };
        (dispatcher, handle)
    }

    /// Spawns the dispatcher on the current runtime.
    ///
    /// The join handle yields the view once the dispatcher has shut down.
    pub fn spawn(state: BoardState, view: V) -> (DispatcherHandle, JoinHandle<V>) {
        let (dispatcher, handle) = Self::new(state, view);
        let task = tokio::spawn(dispatcher.run());
        (handle, task)
    }

    /// Main loop. Returns the view when shut down or when every handle is
    /// dropped.
    pub async fn run(mut self) -> V {
        info!(revision = self.state.revision(), "Dispatcher started");

        while let Some(request) = self.rx.recv().await {
            match request {
                Request::Event { event, reply } => {
                    let result = self.handle_event(event);
                    if reply.send(result).is_err() {
                        debug!("Event caller went away before the reply");
                    }
                }
                Request::Report { error } => self.view.report(&error),
                Request::Snapshot { reply } => {
                    let _ = reply.send(self.state.snapshot());
                }
                Request::Shutdown => {
                    info!("Dispatcher received shutdown");
                    break;
                }
            }
        }

        info!(revision = self.state.revision(), "Dispatcher stopped");
        self.view
    }

    fn handle_event(&mut self, event: UiEvent) -> ApiResult<BoardSnapshot> {
        let name = event.name();
        debug!(event = name, "Handling event");

        match commands::handle(&mut self.state, self.view.elements(), event) {
            Ok(Outcome::Changed) => {
                self.state.bump();
                let snapshot = self.state.snapshot();
                self.view.reconcile(&snapshot);
                self.published.send_replace(snapshot.clone());
                Ok(snapshot)
            }
            Ok(Outcome::Unchanged) => Ok(self.state.snapshot()),
            Err(e) => {
                warn!(event = name, error = %e, "Event rejected");
                self.view.report(&e);
                Err(e)
            }
        }
    }
}

// =============================================================================
// Dispatcher Handle
// =============================================================================

/// Cloneable handle for talking to a running dispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherHandle {
    tx: mpsc::Sender<Request>,
    subscriber: watch::Receiver<BoardSnapshot>,
}

impl DispatcherHandle {
    /// Queues an event and waits for its outcome.
    pub async fn dispatch(&self, event: UiEvent) -> ApiResult<BoardSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request::Event { event, reply })
            .await
            .map_err(|_| stopped())?;
        rx.await.map_err(|_| stopped())?
    }

    /// Hands an error to the view, in queue order with event frames.
    pub async fn report(&self, error: ApiError) -> ApiResult<()> {
        self.tx
            .send(Request::Report { error })
            .await
            .map_err(|_| stopped())
    }

    /// Current snapshot, read through the queue.
    pub async fn snapshot(&self) -> ApiResult<BoardSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request::Snapshot { reply })
            .await
            .map_err(|_| stopped())?;
        rx.await.map_err(|_| stopped())
    }

    /// Receiver of every snapshot published after a change.
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.subscriber.clone()
    }

    /// Asks the dispatcher to stop. Already-stopped dispatchers are fine.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(Request::Shutdown).await;
    }
}

fn stopped() -> ApiError {
    ApiError::internal("Dispatcher is not running")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::view::Layout;
    use board_core::{
        Column, ElementId, ElementMap, FormField, FormKind, NewOrder, Order, OrderId,
    };

    /// View that keeps the standard layout and records each repaint.
    struct RecordingView {
        layout: Layout,
        reconciled: Vec<u64>,
        reported: Vec<ErrorCode>,
    }

    impl RecordingView {
        fn new() -> Self {
            RecordingView {
                layout: Layout::new(),
                reconciled: Vec::new(),
                reported: Vec::new(),
            }
        }
    }

    impl BoardView for RecordingView {
        fn reconcile(&mut self, snapshot: &BoardSnapshot) {
            self.layout.sync(snapshot);
            self.reconciled.push(snapshot.revision);
        }

        fn report(&mut self, error: &ApiError) {
            self.reported.push(error.code);
        }

        fn elements(&self) -> &ElementMap {
            self.layout.elements()
        }
    }

    fn seeded(ids: &[(&str, Column)]) -> BoardState {
        let mut state = BoardState::new("Test");
        for (raw, column) in ids {
            let mut order = Order::create(NewOrder::new(format!("Dish {raw}"), "1"), *column);
            order.id = OrderId::parse(raw).unwrap();
            state.board.insert(order).unwrap();
        }
        state
    }

    fn input(form: FormKind, field: FormField, value: &str) -> UiEvent {
        UiEvent::Input {
            form,
            field,
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_order_flow() {
        let (handle, task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());

        handle.dispatch(UiEvent::AddToggle).await.unwrap();
        handle
            .dispatch(input(FormKind::Add, FormField::Title, "Pasta"))
            .await
            .unwrap();
        handle
            .dispatch(input(FormKind::Add, FormField::Table, "12"))
            .await
            .unwrap();
        let snapshot = handle.dispatch(UiEvent::AddSubmit).await.unwrap();

        let ordered = &snapshot.column(Column::Ordered).unwrap().orders;
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].title, "Pasta");
        assert_eq!(ordered[0].table, "12");
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.overlays.add.is_visible());

        handle.shutdown().await;
        let view = task.await.unwrap();
        // Initial paint plus one per event
        assert_eq!(view.reconciled, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_edit_then_delete() {
        let state = seeded(&[("1", Column::Ordered), ("2", Column::Preparing)]);
        let (handle, _task) = Dispatcher::spawn(state, RecordingView::new());

        handle.dispatch(UiEvent::EditOpen).await.unwrap();
        handle
            .dispatch(input(FormKind::Edit, FormField::Id, "5"))
            .await
            .unwrap();
        handle
            .dispatch(input(FormKind::Edit, FormField::Column, "served"))
            .await
            .unwrap();
        let snapshot = handle.dispatch(UiEvent::EditSubmit).await.unwrap();

        assert_eq!(snapshot.count_id("5"), 1);
        assert_eq!(snapshot.count_id("1"), 0);
        assert_eq!(
            snapshot.column(Column::Served).unwrap().orders[0].id.as_str(),
            "5"
        );
        assert!(!snapshot.overlays.edit.is_visible());

        handle.dispatch(UiEvent::EditOpen).await.unwrap();
        handle
            .dispatch(input(FormKind::Edit, FormField::Id, "5"))
            .await
            .unwrap();
        let snapshot = handle.dispatch(UiEvent::Delete).await.unwrap();

        assert_eq!(snapshot.count_id("5"), 0);
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.overlays.edit.is_visible());
    }

    #[tokio::test]
    async fn test_help_toggle_twice() {
        let (handle, _task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());
        let before = handle.snapshot().await.unwrap().overlays.help.is_visible();

        let once = handle.dispatch(UiEvent::HelpToggle).await.unwrap();
        assert_ne!(once.overlays.help.is_visible(), before);

        let twice = handle.dispatch(UiEvent::HelpToggle).await.unwrap();
        assert_eq!(twice.overlays.help.is_visible(), before);
    }

    #[tokio::test]
    async fn test_drag_moves_card_between_columns() {
        let (handle, _task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());
        handle.dispatch(UiEvent::AddSubmit).await.unwrap();

        // First card lives under the ordered content container
        let card_path = vec![
            ElementId(100),
            Layout::content_id(Column::Ordered),
            Layout::area_id(Column::Ordered),
        ];
        handle
            .dispatch(UiEvent::DragStart { path: card_path })
            .await
            .unwrap();
        let hovering = handle
            .dispatch(UiEvent::DragOver {
                path: vec![Layout::area_id(Column::Preparing)],
            })
            .await
            .unwrap();
        assert!(hovering.column(Column::Preparing).unwrap().hovered);

        let dropped = handle.dispatch(UiEvent::DragEnd).await.unwrap();
        assert_eq!(dropped.column(Column::Preparing).unwrap().orders.len(), 1);
        assert!(dropped.column(Column::Ordered).unwrap().orders.is_empty());
        assert!(dropped.drag.is_idle());
    }

    #[tokio::test]
    async fn test_unmarked_drag_over_is_not_repainted() {
        let (handle, task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());

        let snapshot = handle
            .dispatch(UiEvent::DragOver {
                path: vec![ElementId(999)],
            })
            .await
            .unwrap();
        assert_eq!(snapshot.revision, 0);
        assert_eq!(snapshot.drag.over(), None);

        handle.shutdown().await;
        assert_eq!(task.await.unwrap().reconciled, vec![0]);
    }

    #[tokio::test]
    async fn test_rejected_event_keeps_state() {
        let (handle, task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());

        let err = handle.dispatch(UiEvent::EditOpen).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.revision, 0);
        assert!(!snapshot.overlays.edit.is_visible());

        handle.shutdown().await;
        let view = task.await.unwrap();
        assert_eq!(view.reported, vec![ErrorCode::NotFound]);
        assert_eq!(view.reconciled, vec![0]);
    }

    #[tokio::test]
    async fn test_reported_errors_reach_the_view() {
        let (handle, task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());

        handle
            .report(ApiError::validation("Malformed event"))
            .await
            .unwrap();
        handle.shutdown().await;

        let view = task.await.unwrap();
        assert_eq!(view.reported, vec![ErrorCode::ValidationError]);
    }

    #[tokio::test]
    async fn test_subscribers_see_published_snapshots() {
        let (handle, _task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());
        let mut rx = handle.subscribe();
        assert_eq!(rx.borrow().revision, 0);

        handle.dispatch(UiEvent::HelpToggle).await.unwrap();

        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.revision, 1);
        assert!(seen.overlays.help.is_visible());
    }

    #[tokio::test]
    async fn test_events_handled_in_order() {
        let (handle, _task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());

        let mut revisions = Vec::new();
        for _ in 0..5 {
            revisions.push(handle.dispatch(UiEvent::AddSubmit).await.unwrap().revision);
        }
        assert_eq!(revisions, vec![1, 2, 3, 4, 5]);
        assert_eq!(handle.snapshot().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_dispatch_after_shutdown() {
        let (handle, task) = Dispatcher::spawn(BoardState::new("Test"), RecordingView::new());
        handle.shutdown().await;
        task.await.unwrap();

        let err = handle.dispatch(UiEvent::HelpToggle).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }
}
