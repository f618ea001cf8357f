//! Entry script behavior: branch selection, delay ordering, and failure propagation.

use std::time::Duration;

use lazyload_engine::{Branch, EntrySettings, Message, RunError, Threshold};
use tokio::time::{Instant, timeout};

use crate::common::{SpyMode, harness, harness_with, messages};

#[tokio::test(start_paused = true)]
async fn high_roll_greets_exactly_once_after_delay() {
    let mut h = harness(0.9, SpyMode::Ok);
    let started = Instant::now();

    let branch = h.entry.run().await.unwrap();

    assert_eq!(branch, Branch::LoadAndGreet);
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(messages(&h.console), vec![Message::Start, Message::Greeting]);
    assert_eq!(h.calls.loads(), 1);
    assert_eq!(h.calls.delays(), 1);
    assert_eq!(h.calls.greets(), 1);
}

#[tokio::test(start_paused = true)]
async fn low_roll_skips_without_touching_module() {
    let mut h = harness(0.1, SpyMode::Ok);
    let started = Instant::now();

    let branch = h.entry.run().await.unwrap();

    assert_eq!(branch, Branch::Skip);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(messages(&h.console), vec![Message::Start, Message::Skip]);
    assert_eq!(h.calls.loads(), 0);
    assert_eq!(h.calls.greets(), 0);
    assert!(!h.entry.module().is_loaded());
}

#[tokio::test(start_paused = true)]
async fn roll_equal_to_threshold_skips() {
    let mut h = harness(0.5, SpyMode::Ok);
    assert_eq!(h.entry.run().await.unwrap(), Branch::Skip);
    assert_eq!(h.calls.loads(), 0);
}

#[tokio::test(start_paused = true)]
async fn no_greeting_before_delay_elapses() {
    let mut h = harness(0.99, SpyMode::Ok);

    let early = timeout(Duration::from_millis(999), h.entry.run()).await;

    assert!(early.is_err(), "run finished before the delay");
    assert_eq!(messages(&h.console), vec![Message::Start]);
    assert_eq!(h.calls.greets(), 0);
}

#[tokio::test(start_paused = true)]
async fn greeting_is_stamped_at_the_delay() {
    let settings = EntrySettings {
        delay: Duration::from_millis(250),
        ..EntrySettings::default()
    };
    let mut h = harness_with(0.7, SpyMode::Ok, settings);

    h.entry.run().await.unwrap();

    let lines = h.console.lines();
    assert_eq!(lines[0].at, Duration::ZERO);
    assert_eq!(lines[1].text, Message::Greeting.text());
    assert!(lines[1].at >= Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn exactly_one_branch_runs() {
    for roll in [0.0, 0.25, 0.5, 0.500_001, 0.75, 0.999] {
        let mut h = harness(roll, SpyMode::Ok);
        let branch = h.entry.run().await.unwrap();

        let printed = messages(&h.console);
        let count = |m: Message| printed.iter().filter(|p| **p == m).count();
        assert_eq!(count(Message::Greeting) + count(Message::Skip), 1, "roll {roll}");
        assert_eq!(count(Message::Start), 1);
        assert_eq!(branch.loads_module(), count(Message::Greeting) == 1);
    }
}

#[tokio::test(start_paused = true)]
async fn custom_threshold_moves_the_cut() {
    let settings = EntrySettings {
        threshold: Threshold::new(0.9).unwrap(),
        delay: Duration::from_millis(10),
    };
    let mut h = harness_with(0.8, SpyMode::Ok, settings);
    assert_eq!(h.entry.run().await.unwrap(), Branch::Skip);
}

#[tokio::test(start_paused = true)]
async fn load_failure_propagates_after_start_message() {
    let mut h = harness(0.9, SpyMode::LoadFails);

    let err = h.entry.run().await.unwrap_err();

    assert!(matches!(err, RunError::Load(_)));
    assert_eq!(messages(&h.console), vec![Message::Start]);
    assert_eq!(h.calls.greets(), 0);
}

#[tokio::test(start_paused = true)]
async fn greet_failure_propagates_after_delay() {
    let mut h = harness(0.9, SpyMode::GreetFails);
    let started = Instant::now();

    let err = h.entry.run().await.unwrap_err();

    assert!(matches!(err, RunError::Greet(_)));
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(h.calls.greets(), 1);
    assert_eq!(messages(&h.console), vec![Message::Start]);
}
