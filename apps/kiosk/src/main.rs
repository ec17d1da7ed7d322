//! # Bento Kiosk
//!
//! Terminal front end for the Bento ordering model.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Bento Kiosk                                   │
//! │                                                                         │
//! │   stdin ───► input (parse) ───► session loop ───► bento_core::Cart      │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                               CartSnapshot                              │
//! │                                      │                                  │
//! │   stdout ◄── render (frames) ◄───────┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The kiosk owns all I/O; everything about what the order costs and
//! when delivery unlocks lives in `bento-core`.

mod config;
mod input;
mod render;
mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use bento_core::Cart;

use crate::config::KioskConfig;
use crate::render::ConsoleRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (logging)
    init_tracing();

    let session_id = Uuid::new_v4();
    info!(%session_id, "Starting Bento kiosk");

    // Load configuration
    let config = KioskConfig::from_env();
    info!(
        store = %config.store_name,
        menu_items = config.menu.len(),
        minimum_delivery = %config.minimum_delivery_amount,
        "Configuration loaded"
    );

    // Build the cart for this session
    let cart = Cart::new(config.menu.clone(), config.minimum_delivery_amount)?;

    // Run the session until the customer quits or input closes
    let mut renderer = ConsoleRenderer::new(io::stdout(), config.store_name.clone());
    let cart = session::run(cart, &mut renderer, io::stdin().lock())?;

    info!(
        %session_id,
        order_total = %cart.order_total(),
        items_selected = cart.selected_item_count(),
        delivery_unlocked = cart.meets_delivery_minimum(),
        "Session ended"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bento=trace` - Show trace for bento crates only
/// - Default: INFO level, DEBUG for bento crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bento=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
