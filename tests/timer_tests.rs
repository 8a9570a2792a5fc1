// Tests for the countdown timer
//
// The pure `Countdown` state machine is driven tick by tick, so every timing
// property is deterministic. The async `CountdownTimer` driver is exercised
// under tokio's paused clock, which auto-advances time instead of sleeping.

use std::time::Duration;
use tokio::time::sleep;
use video_interview::{format_clock, Countdown, CountdownTimer, TimerEvent};

// ============================================================================
// Countdown state machine
// ============================================================================

#[test]
fn test_countdown_initial_state() {
    let countdown = Countdown::new(1800);

    assert_eq!(countdown.total_duration_secs(), 1800);
    assert_eq!(countdown.remaining_secs(), 1800);
    assert!(!countdown.is_running());
    assert!(!countdown.is_warning());
    assert!(!countdown.is_expired());
    assert_eq!(countdown.formatted(), "30:00");
}

#[test]
fn test_ticks_decrement_remaining_by_one() {
    let mut countdown = Countdown::new(100);
    countdown.start();

    for n in 1..=4 {
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 100 - n);
        assert!(!countdown.is_expired());
    }
}

#[test]
fn test_tick_is_a_noop_while_not_running() {
    let mut countdown = Countdown::new(10);

    assert_eq!(countdown.tick(), None);
    assert_eq!(countdown.remaining_secs(), 10);

    countdown.start();
    countdown.tick();
    countdown.pause();

    assert_eq!(countdown.tick(), None);
    assert_eq!(countdown.remaining_secs(), 9, "pause must preserve remaining");
}

#[test]
fn test_pause_is_idempotent() {
    let mut countdown = Countdown::new(10);
    countdown.start();
    countdown.tick();

    countdown.pause();
    let after_one = (countdown.remaining_secs(), countdown.is_running());
    countdown.pause();
    let after_two = (countdown.remaining_secs(), countdown.is_running());

    assert_eq!(after_one, after_two);
}

#[test]
fn test_start_while_running_is_a_noop() {
    let mut countdown = Countdown::new(10);

    assert!(countdown.start());
    assert!(!countdown.start(), "second start should report a no-op");
    assert!(countdown.is_running());
}

#[test]
fn test_warning_fires_exactly_once_per_countdown() {
    let mut countdown = Countdown::new(65);
    countdown.start();

    let mut warnings = 0;
    for _ in 0..5 {
        if countdown.tick() == Some(TimerEvent::Warning) {
            warnings += 1;
        }
    }

    assert_eq!(countdown.remaining_secs(), 60);
    assert!(countdown.is_warning());
    assert_eq!(warnings, 1, "warning fires exactly once, at the 60s boundary");

    // Further ticks must not re-fire it
    for _ in 0..10 {
        assert_ne!(countdown.tick(), Some(TimerEvent::Warning));
    }

    // reset() re-arms the warning for the next countdown
    countdown.reset();
    countdown.start();
    let mut warnings = 0;
    for _ in 0..5 {
        if countdown.tick() == Some(TimerEvent::Warning) {
            warnings += 1;
        }
    }
    assert_eq!(warnings, 1);
}

#[test]
fn test_short_countdown_warns_on_first_tick() {
    // Entire countdown sits under the 60s threshold
    let mut countdown = Countdown::new(30);
    countdown.start();

    assert_eq!(countdown.tick(), Some(TimerEvent::Warning));
    assert_eq!(countdown.remaining_secs(), 29);
}

#[test]
fn test_expiry_auto_stops_and_floors_at_zero() {
    let mut countdown = Countdown::new(2);
    countdown.start();

    assert_eq!(countdown.tick(), Some(TimerEvent::Warning));
    assert_eq!(countdown.tick(), Some(TimerEvent::Expired));
    assert!(!countdown.is_running(), "expiry must auto-stop the clock");
    assert!(countdown.is_expired());
    assert!(!countdown.is_warning());

    // No further tick may mutate remaining below zero or re-fire expiry
    assert_eq!(countdown.tick(), None);
    assert_eq!(countdown.remaining_secs(), 0);
}

#[test]
fn test_start_after_expiry_requires_reset() {
    let mut countdown = Countdown::new(1);
    countdown.start();
    countdown.tick();
    assert!(countdown.is_expired());

    assert!(!countdown.start(), "expired countdown must not restart");
    assert!(!countdown.is_running());

    countdown.reset();
    assert_eq!(countdown.remaining_secs(), 1);
    assert!(countdown.start());
}

#[test]
fn test_stop_preserves_remaining_and_reset_restores_it() {
    let mut countdown = Countdown::new(20);
    countdown.start();
    countdown.tick();
    countdown.tick();

    countdown.stop();
    assert!(!countdown.is_running());
    assert_eq!(countdown.remaining_secs(), 18);

    countdown.reset();
    assert!(!countdown.is_running());
    assert_eq!(countdown.remaining_secs(), 20);
}

#[test]
fn test_five_second_scenario() {
    let mut countdown = Countdown::new(5);
    countdown.start();

    for _ in 0..5 {
        countdown.tick();
    }

    assert_eq!(countdown.formatted(), "00:00");
    assert!(countdown.is_expired());
    assert!(!countdown.is_running());
}

#[test]
fn test_clock_formatting() {
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(5), "00:05");
    assert_eq!(format_clock(65), "01:05");
    assert_eq!(format_clock(600), "10:00");
    assert_eq!(format_clock(1800), "30:00");
    // Negative values are defensive only; the countdown floors at zero
    assert_eq!(format_clock(-61), "-01:01");
}

// ============================================================================
// Async driver (paused clock)
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_timer_ticks_once_per_second() {
    let (timer, _events) = CountdownTimer::new(10);
    timer.start();

    // A hair past the tick boundary so the third tick has been processed
    sleep(Duration::from_millis(3010)).await;

    assert_eq!(timer.remaining_secs(), 7);
    assert!(timer.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_pause_suspends_ticking_and_resume_continues() {
    let (timer, _events) = CountdownTimer::new(10);
    timer.start();

    sleep(Duration::from_millis(2010)).await;
    timer.pause();
    assert_eq!(timer.remaining_secs(), 8);

    // Time passing while paused must not touch the clock
    sleep(Duration::from_secs(30)).await;
    assert_eq!(timer.remaining_secs(), 8);
    assert!(!timer.is_running());

    timer.resume();
    sleep(Duration::from_millis(1010)).await;
    assert_eq!(timer.remaining_secs(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_stop_cancels_the_pending_tick() {
    let (timer, _events) = CountdownTimer::new(10);
    timer.start();

    sleep(Duration::from_millis(2010)).await;
    timer.stop();

    // A tick firing after cancellation would show up here
    sleep(Duration::from_secs(30)).await;
    assert_eq!(timer.remaining_secs(), 8);
    assert!(!timer.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_the_tick_and_restores_duration() {
    let (timer, _events) = CountdownTimer::new(10);
    timer.start();

    sleep(Duration::from_millis(2010)).await;
    timer.reset();

    sleep(Duration::from_secs(30)).await;
    assert_eq!(timer.remaining_secs(), 10);
    assert!(!timer.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_events_fire_once_each() {
    let (timer, mut events) = CountdownTimer::new(62);
    timer.start();

    assert_eq!(events.recv().await, Some(TimerEvent::Warning));
    assert_eq!(timer.remaining_secs(), 60);

    assert_eq!(events.recv().await, Some(TimerEvent::Expired));
    assert_eq!(timer.remaining_secs(), 0);
    assert!(!timer.is_running(), "expiry must auto-stop without stop()");

    // Nothing further is published
    sleep(Duration::from_secs(5)).await;
    assert!(events.try_recv().is_err());
}
