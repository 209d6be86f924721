//! # Observability & Tracing
//!
//! Structured logging goes to **stderr** so stdout carries only the menu
//! transcript. The filter comes from `--log-level` when given, else from
//! `RUST_LOG`, else only errors are shown.
//!
//! ```bash
//! # Order recorded / session finished lines
//! RUST_LOG=info cargo run
//!
//! # State transitions and brew details
//! cargo run -- --log-level debug
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Coffee shop open customer=Customer
//! INFO place_order: Order recorded customer="Customer" beverage=Espresso with Caramel
//! INFO Session finished orders=1 ended_by=Exit
//! ```

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "error";

/// Builds the filter from explicit directives, falling back to `RUST_LOG`.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Initializes the global subscriber. Call once, at startup.
pub fn setup_tracing(directives: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
