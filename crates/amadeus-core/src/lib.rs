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

//! Core types for the Amadeus travel API client
//!
//! Holds the construction-argument validator, the immutable [`ClientConfig`]
//! it produces, the [`Logger`] capability, and the transport seam shared with
//! `amadeus-client`.

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod params;
pub mod validator;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{EndpointRequest, HttpTransport, Params, Response, Verb};
pub use logger::{LogLevel, Logger, TracingLogger};
pub use params::{ClientOption, ClientParams, ParamKey, ParamValue};

use serde::{Deserialize, Serialize};

/// Named API environments selectable through the `hostname` option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hostname {
  #[default]
  Test,
  Production,
}

impl Hostname {
  /// Host serving this environment
  pub fn host(&self) -> &'static str {
    match self {
      Hostname::Test => TEST_HOST,
      Hostname::Production => PRODUCTION_HOST,
    }
  }
}

impl std::fmt::Display for Hostname {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Hostname::Test => write!(f, "test"),
      Hostname::Production => write!(f, "production"),
    }
  }
}

impl std::str::FromStr for Hostname {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().trim_start_matches(':').to_ascii_lowercase().as_str() {
      "test" => Ok(Hostname::Test),
      "production" => Ok(Hostname::Production),
      other => Err(Error::Config(format!("Unknown hostname: {}", other))),
    }
  }
}

/// Test environment host
pub const TEST_HOST: &str = "test.api.amadeus.com";
/// Production environment host
pub const PRODUCTION_HOST: &str = "api.amadeus.com";

/// Prefix of every environment variable the validator reads
pub const ENV_PREFIX: &str = "AMADEUS_";

/// SSL is on unless turned off explicitly
pub const DEFAULT_SSL: bool = true;

/// Log target used for validator warnings
pub const VALIDATOR_TARGET: &str = "amadeus::validator";
