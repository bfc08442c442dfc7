//! monthbook
//!
//! Umbrella crate for the period-keyed personal finance ledger: wires the
//! domain model, core services, and JSON persistence together behind the
//! [`Tracker`] facade and re-exports the public surface.

pub mod tracker;

use std::sync::Once;

pub use monthbook_core::*;
pub use monthbook_domain::*;
pub use monthbook_storage_json::{JsonStorage, StorageError};
pub use tracker::Tracker;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("monthbook=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("monthbook tracing initialized.");
    });
}
