//! Shared test utilities for the e2e-suite-base workspace.
//!
//! This crate provides recording fakes for the four suite capabilities so
//! lifecycle tests can assert call ordering, received specs, and capture
//! session accounting without real collaborators. It is a dev-dependency
//! only — never published.
//!
//! # Modules
//!
//! - [`journal`] — [`CallJournal`], an ordered event log shared across fakes
//! - [`fakes`] — recording implementations of the capability traits

pub mod fakes;
pub mod journal;

pub use fakes::{EchoRunner, FakeCheckout, FakePrefetch, RecordingLogs};
pub use journal::CallJournal;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Initialise a test tracing subscriber once per process.
///
/// Respects `RUST_LOG`; defaults to `warn` so dropped-session warnings from
/// leak bugs show up in test output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}
