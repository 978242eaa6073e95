//! # Order Board Entry Point
//!
//! ```text
//! order-board [CONFIG_PATH] < events.jsonl
//! ```
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() {
    if let Err(e) = order_board::run().await {
        eprintln!("order-board: {}", e);
        std::process::exit(1);
    }
}
