//! Suite lifecycle controller
//!
//! [`BaseSuite`] sequences the checkout, prefetch, and log-capture
//! capabilities around a generated suite's lifecycle hooks. The enclosing
//! test harness drives one suite at a time through
//! `setup_suite → (before_test → after_test)* → teardown_suite`, and the
//! controller enforces that ordering so no capture session is leaked or
//! finalized twice.

use std::fmt;

use crate::capability::{Checkout, CheckoutSpec, LogCapture, Prefetch, PrefetchSpec, ShellRunner};
use crate::config::SuiteConfig;
use crate::error::{Error, Result};
use crate::session::CaptureSession;
use crate::sources::prefetch_sources;

/// Lifecycle phase of a [`BaseSuite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitePhase {
    /// Constructed; `setup_suite` has not completed.
    Uninitialized,
    /// Checkout and prefetch done, suite-level capture running, no test
    /// currently executing.
    SuiteSetUp,
    /// An individual test is running with its own capture session.
    TestRunning,
    /// `teardown_suite` completed; terminal.
    SuiteTornDown,
}

impl fmt::Display for SuitePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::SuiteSetUp => "set up",
            Self::TestRunning => "running a test",
            Self::SuiteTornDown => "torn down",
        };
        f.write_str(name)
    }
}

/// Base suite injected into each generated end-to-end suite.
pub struct BaseSuite {
    config: SuiteConfig,
    checkout: Box<dyn Checkout>,
    prefetch: Box<dyn Prefetch>,
    logs: Box<dyn LogCapture>,
    shell: Box<dyn ShellRunner>,
    phase: SuitePhase,
    suite_session: Option<CaptureSession>,
    test_session: Option<CaptureSession>,
}

impl BaseSuite {
    /// Create a suite over the four capabilities. Nothing runs until
    /// [`setup_suite`](Self::setup_suite).
    pub fn new(
        config: SuiteConfig,
        checkout: Box<dyn Checkout>,
        prefetch: Box<dyn Prefetch>,
        logs: Box<dyn LogCapture>,
        shell: Box<dyn ShellRunner>,
    ) -> Self {
        Self {
            config,
            checkout,
            prefetch,
            logs,
            shell,
            phase: SuitePhase::Uninitialized,
            suite_session: None,
            test_session: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SuitePhase {
        self.phase
    }

    /// The configuration this suite was constructed with.
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    fn expect_phase(&self, expected: SuitePhase, operation: &'static str) -> Result<()> {
        if self.phase != expected {
            return Err(Error::Lifecycle {
                operation,
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Run the suite-scoped setup: check out the deployments repository at
    /// the pinned version, prefetch the container images it references, then
    /// start the suite-level capture session.
    ///
    /// Checkout failure aborts before prefetch runs; prefetch failure aborts
    /// before any capture starts. On failure the suite stays uninitialized
    /// and holds no open session.
    pub fn setup_suite(&mut self) -> Result<()> {
        self.expect_phase(SuitePhase::Uninitialized, "setup_suite")?;

        let version = self.config.resolve_version()?;

        let checkout_spec = CheckoutSpec {
            repository: self.config.repository.clone(),
            version: version.checkout_ref.clone(),
            directory: self.config.checkout_dir.clone(),
        };
        tracing::debug!(
            repository = %checkout_spec.repository,
            version = %checkout_spec.version,
            "checking out deployments repository"
        );
        self.checkout.setup(&checkout_spec)?;

        let prefetch_spec = PrefetchSpec {
            source_urls: prefetch_sources(&self.config.repository, &version.short),
        };
        tracing::debug!(sources = ?prefetch_spec.source_urls, "prefetching container images");
        self.prefetch.setup(&prefetch_spec)?;

        self.suite_session = Some(self.logs.capture(&self.config.suite_name)?);
        self.phase = SuitePhase::SuiteSetUp;
        Ok(())
    }

    /// Start capturing logs for the test named `name`.
    ///
    /// Tests under one suite run sequentially; a second `before_test`
    /// without an intervening [`after_test`](Self::after_test) would leak
    /// the first session and is rejected.
    pub fn before_test(&mut self, name: &str) -> Result<()> {
        self.expect_phase(SuitePhase::SuiteSetUp, "before_test")?;

        self.test_session = Some(self.logs.capture(name)?);
        self.phase = SuitePhase::TestRunning;
        Ok(())
    }

    /// Stop the current test's capture session and persist its logs.
    ///
    /// A capture-store failure surfaces as this method's error so it is
    /// reported separately from the test's own pass/fail outcome; the suite
    /// returns to the set-up phase either way.
    pub fn after_test(&mut self) -> Result<()> {
        self.expect_phase(SuitePhase::TestRunning, "after_test")?;

        let session = self.test_session.take().ok_or(Error::Lifecycle {
            operation: "after_test",
            expected: SuitePhase::TestRunning,
            actual: self.phase,
        })?;
        self.phase = SuitePhase::SuiteSetUp;
        session.finish()
    }

    /// Execute a shell-command test step through the runner capability.
    ///
    /// Steps belong to individual tests, so this is only valid between
    /// `before_test` and `after_test`.
    pub fn run_step(&self, script: &str) -> Result<String> {
        self.expect_phase(SuitePhase::TestRunning, "run_step")?;
        self.shell.run(script)
    }

    /// Stop the suite-level capture session, persisting logs from
    /// containers spawned during suite setup. Terminal: no hook is valid
    /// afterwards.
    pub fn teardown_suite(&mut self) -> Result<()> {
        self.expect_phase(SuitePhase::SuiteSetUp, "teardown_suite")?;

        let session = self.suite_session.take().ok_or(Error::Lifecycle {
            operation: "teardown_suite",
            expected: SuitePhase::SuiteSetUp,
            actual: self.phase,
        })?;
        self.phase = SuitePhase::SuiteTornDown;
        session.finish()
    }
}

impl fmt::Debug for BaseSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseSuite")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("suite_session", &self.suite_session)
            .field("test_session", &self.test_session)
            .finish_non_exhaustive()
    }
}
