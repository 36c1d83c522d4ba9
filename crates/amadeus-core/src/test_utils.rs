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

//! Recording doubles for the logger and transport seams

use crate::error::{Error, Result};
use crate::http::{EndpointRequest, HttpTransport, Response};
use crate::logger::{LogLevel, Logger};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// One line captured by [`RecordingLogger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
  pub level: LogLevel,
  pub target: String,
  pub message: String,
}

/// Logger that keeps every line it receives
#[derive(Debug, Default)]
pub struct RecordingLogger {
  entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn entries(&self) -> Vec<LogEntry> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Number of lines logged at exactly `level`
  pub fn count(&self, level: LogLevel) -> usize {
    self.entries().iter().filter(|entry| entry.level == level).count()
  }
}

impl Logger for RecordingLogger {
  fn log(&self, level: LogLevel, target: &str, message: &str) {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(LogEntry {
      level,
      target: target.to_string(),
      message: message.to_string(),
    });
  }
}

/// A request captured by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
  pub base_url: String,
  pub request: EndpointRequest,
}

/// Transport that answers every call with a canned response and records it
#[derive(Debug)]
pub struct RecordingTransport {
  calls: Mutex<Vec<RecordedCall>>,
  reply: std::result::Result<Response, String>,
}

impl RecordingTransport {
  /// Reply to every call with `response`
  pub fn replying(response: Response) -> Arc<Self> {
    Arc::new(Self { calls: Mutex::new(Vec::new()), reply: Ok(response) })
  }

  /// Fail every call with `Error::Http(message)`
  pub fn failing(message: impl Into<String>) -> Arc<Self> {
    Arc::new(Self { calls: Mutex::new(Vec::new()), reply: Err(message.into()) })
  }

  pub fn calls(&self) -> Vec<RecordedCall> {
    self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
  async fn send(&self, base_url: &str, request: &EndpointRequest) -> Result<Response> {
    self
      .calls
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(RecordedCall { base_url: base_url.to_string(), request: request.clone() });

    match &self.reply {
      Ok(response) => Ok(response.clone()),
      Err(message) => Err(Error::Http(message.clone())),
    }
  }
}
