//! # Observability
//!
//! Structured logging with `tracing`. Levels are picked from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info order-tracker    # transitions: submitted, reviewed, assigned
//! RUST_LOG=debug order-tracker   # every request with its payload, no-op outcomes
//! RUST_LOG=order_tracker::machine_store=debug order-tracker
//! ```
//!
//! What gets logged:
//!
//! - **Actors**: start and shutdown with the store type and request count
//! - **Stores**: `info` for applied transitions, `debug` for `NotFound` and
//!   `AlreadyDecided`, `warn` for duplicate order ids and replaced machine work
//! - **Clients**: a span per call carrying the order or machine id
//!
//! ```text
//! INFO Actor started store_type="OrderStore"
//! INFO approve_order{order_id=OrderId("ORD-1")}: Order reviewed order_id=ORD-1 status=approved operator=reviewer
//! WARN assign_work{order_id=ORD-2 process_id=P-1}: Machine was busy, previous work replaced machine_id=M-CNC-01 ...
//! ```

/// Initializes the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
