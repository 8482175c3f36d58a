use std::fmt;
use std::iter::FromIterator;
use std::ops::AddAssign;

/// Running count, min, max and average of millisecond measurements.
#[derive(Clone, Default)]
pub struct Summary {
  count: u64,
  sum: f64,
  min: f64,
  max: f64,
}

impl AddAssign<f64> for Summary {
  fn add_assign(&mut self, rhs: f64) {
    if self.count == 0 {
      self.min = rhs;
      self.max = rhs;
    } else {
      self.min = self.min.min(rhs);
      self.max = self.max.max(rhs);
    }
    self.sum += rhs;
    self.count += 1;
  }
}

impl FromIterator<f64> for Summary {
  fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
    let mut s = Summary::default();
    for x in iter {
      s += x;
    }
    s
  }
}

impl Summary {
  pub fn count(&self) -> u64 {
    self.count
  }
  pub fn min(&self) -> Option<f64> {
    self.non_empty(self.min)
  }
  pub fn max(&self) -> Option<f64> {
    self.non_empty(self.max)
  }
  pub fn average(&self) -> Option<f64> {
    self.non_empty(self.sum / self.count as f64)
  }
  fn non_empty(&self, v: f64) -> Option<f64> {
    if self.count == 0 {
      None
    } else {
      Some(v)
    }
  }
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.count == 0 {
      return write!(f, "count = 0");
    }
    write!(
      f,
      "count = {}, min = {:.3} ms, max = {:.3} ms, average = {:.3} ms",
      self.count,
      self.min,
      self.max,
      self.sum / self.count as f64
    )
  }
}

impl fmt::Debug for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

#[test]
fn test_summary_display() {
  let s: Summary = vec![1.0, 2.5, 3.0].into_iter().collect();
  assert_eq!(
    s.to_string(),
    "count = 3, min = 1.000 ms, max = 3.000 ms, average = 2.167 ms"
  );
  assert_eq!(Summary::default().to_string(), "count = 0");
}
