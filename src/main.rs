use std::thread;

use precision_timer::cmd_options::CMDOptions;
use precision_timer::timing::{MeasurementError, ReactionTiming};

use log::{info, warn};

fn run(options: &CMDOptions) -> Result<(), MeasurementError> {
  let expected = options.delay.as_secs_f64() * 1000.0;
  let mut timing = ReactionTiming::new();
  for cycle in 0..options.count {
    timing.start_measurement()?;
    thread::sleep(options.delay);
    let ms = timing.stop_measurement()?;
    info!("cycle #{}: {:.3} ms", cycle + 1, ms);
    if (ms - expected).abs() > options.tolerance {
      warn!(
        "cycle #{} took {:.3} ms, expected {:.3} ms (tolerance {} ms)",
        cycle + 1,
        ms,
        expected,
        options.tolerance
      );
    }
  }
  info!("{}", timing.statistics());
  Ok(())
}

fn main() -> Result<(), MeasurementError> {
  let options = CMDOptions::new(std::env::args().skip(1));
  env_logger::Builder::new()
    .filter_level(options.level_filter)
    .format_target(options.format_target)
    .init();
  if !options.args.is_empty() {
    warn!("ignoring unrecognized arguments {:?}", options.args);
  }
  run(&options)
}
