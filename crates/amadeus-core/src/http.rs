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

//! Request/response values exchanged with the HTTP transport
//!
//! The transport itself lives in `amadeus-client`. Only the seam is defined
//! here so a caller-supplied transport can travel through `ClientParams`.

use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Query/body parameters for one call
pub type Params = HashMap<String, String>;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
  Get,
  Post,
  Delete,
}

impl fmt::Display for Verb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Verb::Get => write!(f, "GET"),
      Verb::Post => write!(f, "POST"),
      Verb::Delete => write!(f, "DELETE"),
    }
  }
}

/// A single call against a fixed API path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
  pub verb: Verb,
  pub path: String,
  pub params: Params,
}

impl EndpointRequest {
  pub fn new(verb: Verb, path: impl Into<String>, params: Params) -> Self {
    Self { verb, path: path.into(), params }
  }
}

/// Raw answer from the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  pub status: u16,
  pub body: String,
}

impl Response {
  pub fn new(status: u16, body: impl Into<String>) -> Self {
    Self { status, body: body.into() }
  }

  /// True for 2xx statuses
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }

  /// Deserialize the body as JSON
  pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
    Ok(serde_json::from_str(&self.body)?)
  }
}

/// Executes an [`EndpointRequest`] against `base_url`
///
/// Implementations must return non-2xx answers as a `Response` and reserve
/// `Err` for failures where no answer was received.
#[async_trait]
pub trait HttpTransport: Send + Sync {
  async fn send(&self, base_url: &str, request: &EndpointRequest) -> Result<Response>;
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::Value;

  #[test]
  fn test_response_success_range() {
    assert!(Response::new(200, "").is_success());
    assert!(Response::new(204, "").is_success());
    assert!(!Response::new(401, "").is_success());
    assert!(!Response::new(500, "").is_success());
  }

  #[test]
  fn test_response_json() {
    let response = Response::new(200, r#"{"data": [{"type": "air-traffic"}]}"#);
    let value: Value = response.json().unwrap();
    assert_eq!(value["data"][0]["type"], "air-traffic");

    let broken = Response::new(200, "<html>");
    assert!(broken.json::<Value>().is_err());
  }

  #[test]
  fn test_verb_display() {
    assert_eq!(Verb::Get.to_string(), "GET");
    assert_eq!(Verb::Delete.to_string(), "DELETE");
  }
}
