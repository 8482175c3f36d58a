use crate::stats::Summary;
use crate::timer::{Timer, TimerError};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasurementError {
  Start(TimerError),
  Stop(TimerError),
}

impl fmt::Display for MeasurementError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MeasurementError::Start(e) => write!(f, "Failed to start timer: {}", e),
      MeasurementError::Stop(e) => write!(f, "Failed to stop timer: {}", e),
    }
  }
}

impl std::error::Error for MeasurementError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      MeasurementError::Start(e) | MeasurementError::Stop(e) => Some(e),
    }
  }
}

/// Reaction time session: one timer plus the history of its measurements.
#[derive(Default)]
pub struct ReactionTiming {
  timer: Timer,
  latest: Option<f64>,
  measurements: Vec<f64>,
}

impl ReactionTiming {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn start_measurement(&mut self) -> Result<(), MeasurementError> {
    self.timer.start().map_err(|e| {
      let err = MeasurementError::Start(e);
      log::warn!("{}", err);
      err
    })
  }
  pub fn stop_measurement(&mut self) -> Result<f64, MeasurementError> {
    let reaction_time = self.timer.stop().map_err(|e| {
      let err = MeasurementError::Stop(e);
      log::warn!("{}", err);
      err
    })?;
    log::debug!(
      "measurement #{} = {:.3} ms",
      self.measurements.len() + 1,
      reaction_time
    );
    self.latest = Some(reaction_time);
    self.measurements.push(reaction_time);
    Ok(reaction_time)
  }
  pub fn is_measuring(&self) -> bool {
    self.timer.is_running()
  }
  pub fn latest_measurement(&self) -> Option<f64> {
    self.latest
  }
  pub fn measurements(&self) -> &[f64] {
    &self.measurements
  }
  pub fn statistics(&self) -> Summary {
    self.measurements.iter().copied().collect()
  }
}
