mod common;

use common::{assert_close_to, sleep_ms};
use precision_timer::timer::TimerError;
use precision_timer::timing::{MeasurementError, ReactionTiming};
use std::error::Error;

#[test]
fn basic_measurement() {
  let mut timing = ReactionTiming::new();
  timing.start_measurement().unwrap();
  assert!(timing.is_measuring());
  sleep_ms(100);
  let reaction_time = timing.stop_measurement().unwrap();
  assert_close_to(reaction_time, 100.0, 100.0);
  assert_eq!(timing.latest_measurement(), Some(reaction_time));
  assert_eq!(timing.measurements(), &[reaction_time]);
}

#[test]
fn statistics() {
  let mut timing = ReactionTiming::new();
  let stats = timing.statistics();
  assert_eq!(stats.count(), 0);
  assert_eq!(stats.average(), None);
  assert_eq!(stats.min(), None);
  assert_eq!(stats.max(), None);
  for _ in 0..3 {
    timing.start_measurement().unwrap();
    sleep_ms(100);
    timing.stop_measurement().unwrap();
  }
  let stats = timing.statistics();
  assert_eq!(stats.count(), 3);
  assert_close_to(stats.average().unwrap(), 100.0, 100.0);
  assert!(stats.min().unwrap() <= stats.average().unwrap());
  assert!(stats.max().unwrap() >= stats.average().unwrap());
}

#[test]
fn misuse_is_wrapped() {
  let mut timing = ReactionTiming::new();
  let err = timing.stop_measurement().unwrap_err();
  assert_eq!(err, MeasurementError::Stop(TimerError::NotRunning));
  assert_eq!(err.to_string(), "Failed to stop timer: Timer is not running");
  assert_eq!(err.source().unwrap().to_string(), "Timer is not running");
  timing.start_measurement().unwrap();
  let err = timing.start_measurement().unwrap_err();
  assert_eq!(err, MeasurementError::Start(TimerError::AlreadyRunning));
  assert_eq!(
    err.to_string(),
    "Failed to start timer: Timer is already running"
  );
}

#[test]
fn failed_stop_keeps_history() {
  let mut timing = ReactionTiming::new();
  timing.start_measurement().unwrap();
  let first = timing.stop_measurement().unwrap();
  assert!(timing.stop_measurement().is_err());
  assert_eq!(timing.latest_measurement(), Some(first));
  assert_eq!(timing.measurements().len(), 1);
  assert_eq!(timing.statistics().count(), 1);
}
