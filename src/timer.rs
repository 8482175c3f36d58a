use std::fmt;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerError {
  AlreadyRunning,
  NotRunning,
}

impl fmt::Display for TimerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TimerError::AlreadyRunning => write!(f, "Timer is already running"),
      TimerError::NotRunning => write!(f, "Timer is not running"),
    }
  }
}

impl std::error::Error for TimerError {}

#[derive(Clone, Copy, Debug)]
enum State {
  Idle,
  Running(Instant),
}

/// Two-state stopwatch measuring elapsed monotonic time in milliseconds.
#[derive(Clone, Debug)]
pub struct Timer(State);

impl Default for Timer {
  fn default() -> Self {
    Self(State::Idle)
  }
}

impl Timer {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn is_running(&self) -> bool {
    match self.0 {
      State::Running(_) => true,
      State::Idle => false,
    }
  }
  /// Records the current instant. A running timer keeps its original start.
  pub fn start(&mut self) -> Result<(), TimerError> {
    match self.0 {
      State::Running(_) => Err(TimerError::AlreadyRunning),
      State::Idle => {
        self.0 = State::Running(Instant::now());
        Ok(())
      }
    }
  }
  /// Returns fractional milliseconds since the accepted `start`, never negative.
  pub fn stop(&mut self) -> Result<f64, TimerError> {
    match self.0 {
      State::Idle => Err(TimerError::NotRunning),
      State::Running(start_time) => {
        let end_time = Instant::now();
        self.0 = State::Idle;
        Ok(end_time.saturating_duration_since(start_time).as_secs_f64() * 1000.0)
      }
    }
  }
}
