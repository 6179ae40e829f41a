//! Recording fakes for the suite capability traits.
//!
//! Each fake shares a [`CallJournal`] and keeps its own received specs, so a
//! test can hold a clone of the fake, hand a boxed clone to the suite, and
//! inspect what the suite did afterwards. Failure injection covers the fatal
//! setup paths (checkout unreachable, prefetch unreachable, capture storage
//! down).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use suite_base::{
    CaptureSession, Checkout, CheckoutSpec, Error, LogCapture, Prefetch, PrefetchSpec, Result,
    ShellRunner,
};

use crate::journal::CallJournal;

/// Fake checkout capability: records specs, optionally fails.
#[derive(Clone)]
pub struct FakeCheckout {
    journal: CallJournal,
    specs: Arc<Mutex<Vec<CheckoutSpec>>>,
    fail: bool,
}

impl FakeCheckout {
    pub fn new(journal: &CallJournal) -> Self {
        Self {
            journal: journal.clone(),
            specs: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A checkout that fails as if the repository were unreachable.
    pub fn failing(journal: &CallJournal) -> Self {
        Self {
            fail: true,
            ..Self::new(journal)
        }
    }

    /// Specs received so far, in call order.
    pub fn specs(&self) -> Vec<CheckoutSpec> {
        self.specs.lock().unwrap().clone()
    }
}

impl Checkout for FakeCheckout {
    fn setup(&self, spec: &CheckoutSpec) -> Result<()> {
        self.journal.record("checkout");
        self.specs.lock().unwrap().push(spec.clone());
        if self.fail {
            return Err(Error::Checkout {
                repository: spec.repository.clone(),
                version: spec.version.clone(),
                message: "repository unreachable".to_string(),
            });
        }
        Ok(())
    }
}

/// Fake prefetch capability: records specs, optionally fails.
#[derive(Clone)]
pub struct FakePrefetch {
    journal: CallJournal,
    specs: Arc<Mutex<Vec<PrefetchSpec>>>,
    fail: bool,
}

impl FakePrefetch {
    pub fn new(journal: &CallJournal) -> Self {
        Self {
            journal: journal.clone(),
            specs: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A prefetch that fails as if an image source were unreachable.
    pub fn failing(journal: &CallJournal) -> Self {
        Self {
            fail: true,
            ..Self::new(journal)
        }
    }

    /// Specs received so far, in call order.
    pub fn specs(&self) -> Vec<PrefetchSpec> {
        self.specs.lock().unwrap().clone()
    }
}

impl Prefetch for FakePrefetch {
    fn setup(&self, spec: &PrefetchSpec) -> Result<()> {
        self.journal.record("prefetch");
        self.specs.lock().unwrap().push(spec.clone());
        if self.fail {
            return Err(Error::Prefetch {
                url: spec.source_urls.first().cloned().unwrap_or_default(),
                message: "image source unreachable".to_string(),
            });
        }
        Ok(())
    }
}

/// Fake log capture with open/closed session accounting.
#[derive(Clone)]
pub struct RecordingLogs {
    journal: CallJournal,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
    fail_capture: bool,
    fail_store: bool,
}

impl RecordingLogs {
    pub fn new(journal: &CallJournal) -> Self {
        Self {
            journal: journal.clone(),
            opened: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicUsize::new(0)),
            fail_capture: false,
            fail_store: false,
        }
    }

    /// Capture start fails, as if the log backend were down.
    pub fn failing_capture(journal: &CallJournal) -> Self {
        Self {
            fail_capture: true,
            ..Self::new(journal)
        }
    }

    /// Capture starts succeed but storing the logs fails.
    pub fn failing_store(journal: &CallJournal) -> Self {
        Self {
            fail_store: true,
            ..Self::new(journal)
        }
    }

    /// Sessions started and not yet finalized. Zero after a clean run.
    pub fn open_sessions(&self) -> usize {
        self.opened.load(Ordering::SeqCst) - self.closed.load(Ordering::SeqCst)
    }

    /// Total sessions ever started.
    pub fn total_sessions(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl LogCapture for RecordingLogs {
    fn capture(&self, name: &str) -> Result<CaptureSession> {
        self.journal.record(format!("capture:{name}"));
        if self.fail_capture {
            return Err(Error::Capture {
                name: name.to_string(),
                message: "log backend unavailable".to_string(),
            });
        }

        self.opened.fetch_add(1, Ordering::SeqCst);
        let journal = self.journal.clone();
        let closed = Arc::clone(&self.closed);
        let fail_store = self.fail_store;
        let stored = format!("store:{name}");
        let name = name.to_string();
        Ok(CaptureSession::new(name.clone(), move || {
            closed.fetch_add(1, Ordering::SeqCst);
            journal.record(stored);
            if fail_store {
                return Err(Error::Capture {
                    name,
                    message: "log storage unavailable".to_string(),
                });
            }
            Ok(())
        }))
    }
}

/// Shell runner that echoes the script back and records each invocation.
#[derive(Clone)]
pub struct EchoRunner {
    journal: CallJournal,
}

impl EchoRunner {
    pub fn new(journal: &CallJournal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl ShellRunner for EchoRunner {
    fn run(&self, script: &str) -> Result<String> {
        self.journal.record(format!("shell:{script}"));
        Ok(script.to_string())
    }
}
