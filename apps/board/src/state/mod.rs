//! # State Module
//!
//! Application state for the order board.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │   ConfigState    │   │   BoardState     │   │  BoardSnapshot   │    │
//! │  │                  │   │                  │   │                  │    │
//! │  │  title           │──►│  orders          │──►│  read-only copy  │    │
//! │  │  log filter      │   │  drag / overlays │   │  for views and   │    │
//! │  │  seed orders     │   │  forms / focus   │   │  subscribers     │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  ConfigState: read-only after startup                                  │
//! │  BoardState:  owned by the dispatcher task                             │
//! │  BoardSnapshot: cloned out after every handled event                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod board;
mod config;
mod snapshot;

pub use board::BoardState;
pub use config::{ConfigState, SeedOrder};
pub use snapshot::{BoardSnapshot, ColumnSnapshot};
