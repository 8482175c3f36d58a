use std::iter::{Iterator, Peekable};
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;

fn parse_value<R: FromStr<Err = impl std::fmt::Display>>(flag: &str, value: &str) -> R {
  match R::from_str(value.trim()) {
    Ok(res) => res,
    Err(err) => panic!("can't parse command line argument {} {}, {}", flag, value, err),
  }
}

fn try_parse_flag<I: Iterator<Item = String>>(it: &mut Peekable<I>, short: &str, long: &str) -> bool {
  let matched = match it.peek() {
    Some(s) => {
      s.strip_prefix("--") == Some(long)
        || (!short.is_empty() && !s.starts_with("--") && s.strip_prefix('-') == Some(short))
    }
    None => false,
  };
  if matched {
    it.next();
  }
  matched
}

/// Accepts `--long=value`, `--long value`, `-svalue` and `-s value`.
fn try_parse_value<R: FromStr<Err = impl std::fmt::Display>, I: Iterator<Item = String>>(
  it: &mut Peekable<I>,
  short: &str,
  long: &str,
) -> Option<R> {
  let s = it.peek()?.clone();
  let rest = if let Some(t) = s.strip_prefix("--") {
    t.strip_prefix(long)?
  } else if let Some(t) = s.strip_prefix('-') {
    if short.is_empty() {
      return None;
    }
    assert_eq!(short.len(), 1, "short option {} is too long", short);
    t.strip_prefix(short)?
  } else {
    return None;
  };
  let inline = if s.starts_with("--") {
    match rest.strip_prefix('=') {
      Some(w) => Some(w),
      None if rest.is_empty() => None,
      None => return None,
    }
  } else if rest.is_empty() {
    None
  } else {
    Some(rest)
  };
  it.next();
  match inline {
    Some(w) => Some(parse_value(&s, w)),
    None => match it.next() {
      Some(w) => Some(parse_value(&s, &w)),
      None => panic!("empty argument for command line option {}", s),
    },
  }
}

#[derive(Debug)]
pub struct CMDOptions {
  pub count: usize,
  pub delay: Duration,
  pub tolerance: f64,
  pub format_target: bool,
  pub level_filter: LevelFilter,
  pub args: Vec<String>,
}

impl Default for CMDOptions {
  fn default() -> Self {
    Self {
      count: 3,
      delay: Duration::from_millis(100),
      tolerance: 10.0,
      format_target: false,
      level_filter: LevelFilter::Info,
      args: Vec::new(),
    }
  }
}

impl CMDOptions {
  pub fn new<I: Iterator<Item = String>>(it: I) -> Self {
    let mut o = CMDOptions::default();
    let mut p = it.peekable();
    loop {
      if let Some(n) = try_parse_value::<usize, _>(&mut p, "n", "count") {
        o.count = n;
        continue;
      }
      if let Some(ms) = try_parse_value::<u64, _>(&mut p, "d", "delay") {
        o.delay = Duration::from_millis(ms);
        continue;
      }
      if let Some(t) = try_parse_value::<f64, _>(&mut p, "", "tolerance") {
        o.tolerance = t;
        continue;
      }
      if try_parse_flag(&mut p, "w", "warn") {
        o.level_filter = LevelFilter::Warn;
        continue;
      }
      if try_parse_flag(&mut p, "i", "info") {
        o.level_filter = LevelFilter::Info;
        continue;
      }
      if try_parse_flag(&mut p, "", "debug") {
        o.level_filter = LevelFilter::Debug;
        continue;
      }
      if try_parse_flag(&mut p, "t", "format-target") {
        o.format_target = true;
        continue;
      }
      break;
    }
    o.args = p.collect();
    o
  }
}

#[cfg(test)]
fn parse(args: &[&str]) -> CMDOptions {
  CMDOptions::new(args.iter().map(|s| s.to_string()))
}

#[test]
fn test_defaults() {
  let o = parse(&[]);
  assert_eq!(o.count, 3);
  assert_eq!(o.delay, Duration::from_millis(100));
  assert_eq!(o.level_filter, LevelFilter::Info);
  assert!(!o.format_target);
  assert!(o.args.is_empty());
}

#[test]
fn test_value_forms() {
  let o = parse(&["--count=5", "-d", "20", "--tolerance", "2.5"]);
  assert_eq!(o.count, 5);
  assert_eq!(o.delay, Duration::from_millis(20));
  assert_eq!(o.tolerance, 2.5);
  let o = parse(&["-n7", "--delay", "1"]);
  assert_eq!(o.count, 7);
  assert_eq!(o.delay, Duration::from_millis(1));
}

#[test]
fn test_flags_and_trailing_args() {
  let o = parse(&["-w", "--debug", "-t", "extra", "-n", "2"]);
  assert_eq!(o.level_filter, LevelFilter::Debug);
  assert!(o.format_target);
  assert_eq!(o.count, 3);
  assert_eq!(o.args, vec!["extra", "-n", "2"]);
}

#[test]
#[should_panic(expected = "can't parse command line argument")]
fn test_bad_value() {
  parse(&["--count=many"]);
}
