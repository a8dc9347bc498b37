//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for every process that
//! hosts actors.
//!
//! The actors log with structured fields (`entity_type`, `id`, `size`, `error`), so a line
//! reads like:
//!
//! ```text
//! INFO Created entity_type="Order" id=3f2a... size=1
//! WARN Update rejected entity_type="Order" id=3f2a... error=A delivered order cannot be changed
//! ```
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when it is set; otherwise `default_directive` (e.g. `"info"` or
/// `"grubdash=debug"`) is used. Compact format, module paths hidden since the actors
/// already tag every line with `entity_type`.
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
