//! Scoped log-capture sessions
//!
//! A capture session is a bounded interval during which logs are collected
//! and attributed to a name. Rather than storing a bare stop closure on the
//! suite, the interval is an owned [`CaptureSession`] value: acquired when
//! capture starts, finalized exactly once via [`CaptureSession::finish`],
//! and released on drop if an error path skips the explicit finish.

use std::fmt;

use crate::error::Result;

type Finalizer = Box<dyn FnOnce() -> Result<()> + Send>;

/// An active capture session that stops and persists its logs when finished.
pub struct CaptureSession {
    name: String,
    finalizer: Option<Finalizer>,
}

impl CaptureSession {
    /// Wrap a running capture keyed by `name`; `finalizer` stops the capture
    /// and persists the collected logs.
    pub fn new(name: impl Into<String>, finalizer: impl FnOnce() -> Result<()> + Send + 'static) -> Self {
        Self {
            name: name.into(),
            finalizer: Some(Box::new(finalizer)),
        }
    }

    /// Name this session's logs are attributed to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stop the capture and persist its logs.
    ///
    /// Consumes the session, so the finalizer runs at most once; the drop
    /// path sees an already-emptied slot afterwards.
    pub fn finish(mut self) -> Result<()> {
        match self.finalizer.take() {
            Some(finalize) => finalize(),
            None => Ok(()),
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if let Some(finalize) = self.finalizer.take() {
            tracing::warn!(
                session = %self.name,
                "capture session dropped without finish; storing logs now"
            );
            if let Err(e) = finalize() {
                tracing::warn!(
                    session = %self.name,
                    error = %e,
                    "failed to store logs for dropped capture session"
                );
            }
        }
    }
}

impl fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSession")
            .field("name", &self.name)
            .field("finished", &self.finalizer.is_none())
            .finish()
    }
}
