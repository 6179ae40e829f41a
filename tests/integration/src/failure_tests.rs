//! Failure-path tests for the base suite
//!
//! Setup failures are fatal and ordered: a checkout failure must abort
//! before prefetch runs, a prefetch failure before any capture starts.
//! Capture-store failures surface as their own errors and never leak a
//! session, even when the suite is dropped mid-test.

use pretty_assertions::assert_eq;
use suite_base::{BaseSuite, Error, SuiteConfig, SuitePhase};
use suite_test_utils::{CallJournal, EchoRunner, FakeCheckout, FakePrefetch, RecordingLogs};

fn suite(
    journal: &CallJournal,
    checkout: FakeCheckout,
    prefetch: FakePrefetch,
    logs: RecordingLogs,
) -> BaseSuite {
    suite_test_utils::init_tracing();
    BaseSuite::new(
        SuiteConfig::default(),
        Box::new(checkout),
        Box::new(prefetch),
        Box::new(logs),
        Box::new(EchoRunner::new(journal)),
    )
}

#[test]
fn test_checkout_failure_never_reaches_prefetch() {
    let journal = CallJournal::new();
    let mut s = suite(
        &journal,
        FakeCheckout::failing(&journal),
        FakePrefetch::new(&journal),
        RecordingLogs::new(&journal),
    );

    let err = s.setup_suite().unwrap_err();
    assert!(matches!(err, Error::Checkout { .. }));
    assert_eq!(journal.count("prefetch"), 0);
    assert_eq!(s.phase(), SuitePhase::Uninitialized);
}

#[test]
fn test_prefetch_failure_aborts_before_any_test() {
    let journal = CallJournal::new();
    let logs = RecordingLogs::new(&journal);
    let mut s = suite(
        &journal,
        FakeCheckout::new(&journal),
        FakePrefetch::failing(&journal),
        logs.clone(),
    );

    let err = s.setup_suite().unwrap_err();
    assert!(matches!(err, Error::Prefetch { .. }));
    assert_eq!(logs.total_sessions(), 0);
    assert!(s.before_test("never-runs").is_err());
}

#[test]
fn test_capture_failure_fails_setup_without_leak() {
    let journal = CallJournal::new();
    let logs = RecordingLogs::failing_capture(&journal);
    let mut s = suite(
        &journal,
        FakeCheckout::new(&journal),
        FakePrefetch::new(&journal),
        logs.clone(),
    );

    let err = s.setup_suite().unwrap_err();
    assert!(matches!(err, Error::Capture { .. }));
    assert_eq!(logs.open_sessions(), 0);
    assert_eq!(s.phase(), SuitePhase::Uninitialized);
}

#[test]
fn test_store_failure_is_reported_but_suite_continues() {
    let journal = CallJournal::new();
    let logs = RecordingLogs::failing_store(&journal);
    let mut s = suite(
        &journal,
        FakeCheckout::new(&journal),
        FakePrefetch::new(&journal),
        logs.clone(),
    );

    s.setup_suite().unwrap();
    s.before_test("flaky-storage").unwrap();

    // The store error is its own failure, distinct from the test's outcome,
    // and the suite is back in the set-up phase afterwards.
    let err = s.after_test().unwrap_err();
    assert!(matches!(err, Error::Capture { .. }));
    assert_eq!(s.phase(), SuitePhase::SuiteSetUp);
    assert_eq!(logs.open_sessions(), 1); // suite session still running

    s.before_test("next-test").unwrap();
    assert!(s.after_test().is_err()); // store keeps failing, session still closed
    assert_eq!(logs.open_sessions(), 1);
}

#[test]
fn test_dropping_suite_mid_test_releases_sessions() {
    let journal = CallJournal::new();
    let logs = RecordingLogs::new(&journal);
    {
        let mut s = suite(
            &journal,
            FakeCheckout::new(&journal),
            FakePrefetch::new(&journal),
            logs.clone(),
        );
        s.setup_suite().unwrap();
        s.before_test("interrupted").unwrap();
        // Harness aborts here: suite dropped with both sessions open
    }

    assert_eq!(logs.open_sessions(), 0);
    assert_eq!(journal.count("store:interrupted"), 1);
    assert_eq!(journal.count("store:base"), 1);
}

#[test]
fn test_lifecycle_misuse_is_rejected_with_context() {
    let journal = CallJournal::new();
    let mut s = suite(
        &journal,
        FakeCheckout::new(&journal),
        FakePrefetch::new(&journal),
        RecordingLogs::new(&journal),
    );

    let err = s.after_test().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("after_test"));
    assert!(message.contains("uninitialized"));

    s.setup_suite().unwrap();
    let err = s.setup_suite().unwrap_err();
    assert!(matches!(err, Error::Lifecycle { operation: "setup_suite", .. }));
}

#[test]
fn test_short_reference_fails_before_any_capability_runs() {
    let journal = CallJournal::new();
    let mut s = BaseSuite::new(
        SuiteConfig {
            reference: "1120e9e".to_string(), // seven characters
            ..SuiteConfig::default()
        },
        Box::new(FakeCheckout::new(&journal)),
        Box::new(FakePrefetch::new(&journal)),
        Box::new(RecordingLogs::new(&journal)),
        Box::new(EchoRunner::new(&journal)),
    );

    let err = s.setup_suite().unwrap_err();
    assert!(matches!(err, Error::ReferenceTooShort { len: 7, .. }));
    assert!(journal.events().is_empty());
}
