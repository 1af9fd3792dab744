//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! The store and the worker pool log with structured fields rather than formatted strings:
//!
//! ```text
//! INFO Actor started entity_type="Item"
//! INFO Created entity_type="Item" id=1 size=1
//! INFO Worker pool started size=10
//! INFO Batch complete total=3 processed=3 skipped=0
//! ```
//!
//! Verbosity is controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run                       # lifecycle + writes
//! RUST_LOG=debug cargo run                      # every request, with payloads
//! RUST_LOG=actor_store=debug,info cargo run     # store internals only
//! ```

/// Installs the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
