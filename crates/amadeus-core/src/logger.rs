/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Logger capability injected into the client
//!
//! The client never talks to a logging backend directly. It holds an
//! `Arc<dyn Logger>` and filters by the configured [`LogLevel`] before calling it.
//! When no logger is supplied, [`TracingLogger`] forwards to `tracing`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error, info, warn};

/// Severity ladder, lowest first
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Debug,
  Info,
  #[default]
  Warn,
  Error,
  Fatal,
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LogLevel::Debug => write!(f, "DEBUG"),
      LogLevel::Info => write!(f, "INFO"),
      LogLevel::Warn => write!(f, "WARN"),
      LogLevel::Error => write!(f, "ERROR"),
      LogLevel::Fatal => write!(f, "FATAL"),
    }
  }
}

impl FromStr for LogLevel {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "debug" => Ok(LogLevel::Debug),
      "info" => Ok(LogLevel::Info),
      "warn" | "warning" => Ok(LogLevel::Warn),
      "error" => Ok(LogLevel::Error),
      "fatal" => Ok(LogLevel::Fatal),
      other => Err(Error::Config(format!("Unknown log level: {}", other))),
    }
  }
}

/// Anything the client can write log lines to
///
/// `target` names the component emitting the line (e.g. `amadeus::validator`).
pub trait Logger: Send + Sync {
  /// Record one message at `level`
  fn log(&self, level: LogLevel, target: &str, message: &str);
}

/// Default logger, forwarding every line to `tracing`
///
/// `Fatal` has no `tracing` counterpart and is emitted as `error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
  fn log(&self, level: LogLevel, target: &str, message: &str) {
    match level {
      LogLevel::Debug => debug!(origin = target, "{}", message),
      LogLevel::Info => info!(origin = target, "{}", message),
      LogLevel::Warn => warn!(origin = target, "{}", message),
      LogLevel::Error => error!(origin = target, "{}", message),
      LogLevel::Fatal => error!(origin = target, fatal = true, "{}", message),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io;
  use std::sync::{Arc, Mutex};

  #[test]
  fn test_level_ordering() {
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Warn < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Fatal);
    assert_eq!(LogLevel::default(), LogLevel::Warn);
  }

  #[test]
  fn test_level_from_str() {
    assert_eq!("FATAL".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
    assert_eq!(" warning ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert!("verbose".parse::<LogLevel>().is_err());
  }

  #[derive(Clone, Default)]
  struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

  impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn test_tracing_logger_maps_levels() {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();

    tracing::subscriber::with_default(subscriber, || {
      let logger = TracingLogger;
      let levels =
        [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error, LogLevel::Fatal];
      for level in levels {
        logger.log(level, "amadeus::test", &format!("line at {}", level));
      }
    });

    let text = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);

    let expected = [
      ("DEBUG", "line at DEBUG"),
      ("INFO", "line at INFO"),
      ("WARN", "line at WARN"),
      ("ERROR", "line at ERROR"),
      ("ERROR", "line at FATAL"),
    ];
    for (line, (tracing_level, message)) in lines.iter().zip(expected) {
      assert!(line.contains(tracing_level), "{} missing level {}", line, tracing_level);
      assert!(line.contains(message), "{} missing message {}", line, message);
      assert!(line.contains("amadeus::test"), "{} missing origin", line);
    }
    assert!(lines[4].contains("fatal=true"));
    assert!(!lines[3].contains("fatal=true"));
  }
}
