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

//! Validated client configuration

use crate::error::{Error, Result};
use crate::http::HttpTransport;
use crate::logger::{LogLevel, Logger};
use crate::params::ClientParams;
use crate::validator;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Normalized configuration produced once by the validator
///
/// Immutable after construction. Clones share the logger and transport.
#[derive(Clone)]
pub struct ClientConfig {
  pub(crate) api_key: String,
  pub(crate) api_secret: String,
  pub(crate) host: String,
  pub(crate) base_url: String,
  pub(crate) ssl: bool,
  pub(crate) port: u16,
  pub(crate) log_level: LogLevel,
  pub(crate) logger: Arc<dyn Logger>,
  pub(crate) http: Option<Arc<dyn HttpTransport>>,
  pub(crate) unrecognized: Vec<String>,
}

impl ClientConfig {
  /// Validate explicit parameters, falling back to `AMADEUS_*` environment variables
  pub fn new(params: ClientParams) -> Result<Self> {
    validator::validate(params)
  }

  /// Build from the environment (and a `.env` file, if present) only
  pub fn from_env() -> Result<Self> {
    validator::validate(ClientParams::new())
  }

  pub fn api_key(&self) -> &str {
    &self.api_key
  }

  pub fn api_secret(&self) -> &str {
    &self.api_secret
  }

  /// The host as resolved from `host`, `hostname` or the default
  pub fn host(&self) -> &str {
    &self.host
  }

  /// Scheme, host and port every request path is appended to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn ssl(&self) -> bool {
    self.ssl
  }

  pub fn port(&self) -> u16 {
    self.port
  }

  pub fn log_level(&self) -> LogLevel {
    self.log_level
  }

  pub fn logger(&self) -> &Arc<dyn Logger> {
    &self.logger
  }

  /// Caller-supplied transport, if one was passed as `http`
  pub fn http(&self) -> Option<&Arc<dyn HttpTransport>> {
    self.http.as_ref()
  }

  /// Keys the validator did not recognize, in the order they were given
  pub fn unrecognized_options(&self) -> &[String] {
    &self.unrecognized
  }

  /// Send `message` to the logger when `level` passes the configured threshold
  pub fn log(&self, level: LogLevel, target: &str, message: &str) {
    if level >= self.log_level {
      self.logger.log(level, target, message);
    }
  }
}

impl fmt::Debug for ClientConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClientConfig")
      .field("api_key", &self.api_key)
      .field("api_secret", &"<redacted>")
      .field("host", &self.host)
      .field("base_url", &self.base_url)
      .field("ssl", &self.ssl)
      .field("port", &self.port)
      .field("log_level", &self.log_level)
      .field("logger", &"Logger")
      .field("http", &self.http.as_ref().map(|_| "HttpTransport"))
      .finish()
  }
}

/// Turn a resolved host into a base URL
///
/// Hosts that already carry a scheme are used as given (minus a trailing `/`).
/// Bare hostnames get a scheme from `ssl`, and `port` unless it is the
/// scheme's default.
pub(crate) fn build_base_url(host: &str, ssl: bool, port: u16) -> Result<String> {
  if host.contains("://") {
    Url::parse(host)?;
    return Ok(host.trim_end_matches('/').to_string());
  }

  let scheme = if ssl { "https" } else { "http" };
  let default_port = if ssl { 443 } else { 80 };
  let base = match embedded_port(host) {
    Some(_) if port != default_port => {
      return Err(Error::Config(format!(
        "Port given twice: host '{}' already carries a port and 'port' is {}",
        host, port
      )));
    }
    Some(_) => format!("{}://{}", scheme, host),
    None if port == default_port => format!("{}://{}", scheme, host),
    None => format!("{}://{}:{}", scheme, host, port),
  };

  Url::parse(&base)?;
  Ok(base)
}

/// Port spelled into a bare `host:port`, if any
fn embedded_port(host: &str) -> Option<u16> {
  let (name, port) = host.rsplit_once(':')?;
  if name.is_empty() || name.contains(':') {
    return None;
  }
  port.parse().ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_url_from_bare_host() {
    assert_eq!(
      build_base_url("test.api.amadeus.com", true, 443).unwrap(),
      "https://test.api.amadeus.com"
    );
    assert_eq!(build_base_url("localhost", false, 8080).unwrap(), "http://localhost:8080");
    assert_eq!(build_base_url("localhost", false, 80).unwrap(), "http://localhost");
    assert_eq!(build_base_url("localhost", true, 8443).unwrap(), "https://localhost:8443");
  }

  #[test]
  fn test_base_url_keeps_explicit_scheme() {
    assert_eq!(build_base_url("http://foo.bar.com/", true, 443).unwrap(), "http://foo.bar.com");
  }

  #[test]
  fn test_base_url_with_port_in_host() {
    assert_eq!(build_base_url("localhost:3000", true, 443).unwrap(), "https://localhost:3000");
    assert_eq!(build_base_url("localhost:3000", false, 80).unwrap(), "http://localhost:3000");

    match build_base_url("localhost:3000", true, 8443) {
      Err(Error::Config(message)) => assert!(message.contains("Port given twice")),
      other => panic!("Expected Config error, got {:?}", other),
    }
  }

  #[test]
  fn test_base_url_rejects_garbage() {
    assert!(build_base_url("http://", true, 443).is_err());
    assert!(build_base_url("bad host name", true, 443).is_err());
  }
}
