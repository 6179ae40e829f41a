//! Capability contracts for the external collaborators
//!
//! The suite does none of the substantive work itself: checkout, image
//! prefetch, log capture, and shell-step execution are all owned elsewhere.
//! These traits pin down exactly what the suite requires of each, so tests
//! can substitute recording fakes and production callers can plug in the
//! real implementations.

use std::path::PathBuf;

use crate::error::Result;
use crate::session::CaptureSession;

/// What the checkout capability is asked to materialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSpec {
    /// Repository in `owner/name` form.
    pub repository: String,

    /// Resolved checkout reference: a short SHA or a full tag path.
    pub version: String,

    /// Target directory for the working tree.
    pub directory: PathBuf,
}

/// What the prefetch capability is asked to pull.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefetchSpec {
    /// Ordered image-source URLs; each refers to a manifest or directory
    /// listing whose referenced images must be locally available.
    pub source_urls: Vec<String>,
}

/// Materializes a specific version of a repository into a local directory.
///
/// `setup` is idempotent per run and blocks until the working tree under
/// [`CheckoutSpec::directory`] reflects the requested version.
pub trait Checkout: Send + Sync {
    fn setup(&self, spec: &CheckoutSpec) -> Result<()>;
}

/// Ensures container images referenced by the source URLs are locally cached.
///
/// `setup` fetches and parses each URL's manifest and blocks until every
/// referenced image is available.
pub trait Prefetch: Send + Sync {
    fn setup(&self, spec: &PrefetchSpec) -> Result<()>;
}

/// Starts log-capture sessions attributed to a name (a test or a suite).
pub trait LogCapture: Send + Sync {
    /// Begin capturing logs under `name`. The returned session stops capture
    /// and persists the collected logs when finished.
    fn capture(&self, name: &str) -> Result<CaptureSession>;
}

/// Executes a shell-command test step and returns its output.
///
/// Execution semantics (shell selection, environment, working directory) are
/// the runner's own; the suite delegates verbatim.
pub trait ShellRunner: Send + Sync {
    fn run(&self, script: &str) -> Result<String>;
}
