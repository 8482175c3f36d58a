use std::thread;
use std::time::Duration;

pub fn sleep_ms(ms: u64) {
  thread::sleep(Duration::from_millis(ms));
}

/// Sleeps are lower bounds; the upper bound is loose for busy CI machines.
pub fn assert_close_to(ms: f64, expected: f64, slack: f64) {
  assert!(
    ms >= expected && ms <= expected + slack,
    "expected ~{} ms (slack {} ms), got {} ms",
    expected,
    slack,
    ms
  );
}
