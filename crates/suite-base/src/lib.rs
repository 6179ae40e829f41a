//! Base suite for generated end-to-end tests
//!
//! Wires three externally-owned capabilities — repository checkout of a
//! versioned dependency, container-image prefetching, and per-test log
//! capture — around a generic shell-command test runner:
//!
//! - **Setup**: resolve the pinned version, check out the deployments
//!   repository, prefetch the container images it references, start a
//!   suite-level capture session.
//! - **Per test**: open a capture session before the test, store its logs
//!   after.
//! - **Teardown**: store the suite-level logs.
//!
//! The capabilities themselves are supplied by the caller as trait objects
//! ([`Checkout`], [`Prefetch`], [`LogCapture`], [`ShellRunner`]); this crate
//! only sequences them and enforces the lifecycle ordering.

pub mod capability;
pub mod config;
pub mod error;
pub mod session;
pub mod sources;
pub mod suite;
pub mod version;

pub use capability::{Checkout, CheckoutSpec, LogCapture, Prefetch, PrefetchSpec, ShellRunner};
pub use config::SuiteConfig;
pub use error::{Error, Result};
pub use session::CaptureSession;
pub use suite::{BaseSuite, SuitePhase};
pub use version::{ResolvedVersion, resolve};
