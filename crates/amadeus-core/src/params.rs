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

//! Construction arguments for the client
//!
//! Keys may be given in string form (`"api_key"`), symbol form (`":api_key"`)
//! or as a typed [`ClientOption`]. All three normalize to the same key, so
//! later insertions replace earlier ones regardless of spelling.

use crate::http::HttpTransport;
use crate::logger::{LogLevel, Logger};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Options the validator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientOption {
  ApiKey,
  ApiSecret,
  ClientId,
  ClientSecret,
  Logger,
  LogLevel,
  Hostname,
  Host,
  Ssl,
  Port,
  Http,
}

impl ClientOption {
  /// Every recognized option
  pub const ALL: [ClientOption; 11] = [
    ClientOption::ApiKey,
    ClientOption::ApiSecret,
    ClientOption::ClientId,
    ClientOption::ClientSecret,
    ClientOption::Logger,
    ClientOption::LogLevel,
    ClientOption::Hostname,
    ClientOption::Host,
    ClientOption::Ssl,
    ClientOption::Port,
    ClientOption::Http,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      ClientOption::ApiKey => "api_key",
      ClientOption::ApiSecret => "api_secret",
      ClientOption::ClientId => "client_id",
      ClientOption::ClientSecret => "client_secret",
      ClientOption::Logger => "logger",
      ClientOption::LogLevel => "log_level",
      ClientOption::Hostname => "hostname",
      ClientOption::Host => "host",
      ClientOption::Ssl => "ssl",
      ClientOption::Port => "port",
      ClientOption::Http => "http",
    }
  }

  /// Environment variable consulted when the option is not passed explicitly
  ///
  /// `None` for options that cannot be expressed as a string.
  pub fn env_var(&self) -> Option<String> {
    match self {
      ClientOption::Logger | ClientOption::Http => None,
      other => Some(format!("{}{}", crate::ENV_PREFIX, other.as_str().to_ascii_uppercase())),
    }
  }
}

impl fmt::Display for ClientOption {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ClientOption {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = normalize_key(s);
    ClientOption::ALL.into_iter().find(|option| option.as_str() == key).ok_or(key)
  }
}

/// Strip the symbol marker and surrounding whitespace from a key
fn normalize_key(raw: &str) -> String {
  raw.trim().trim_start_matches(':').to_string()
}

/// A normalized parameter key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamKey(String);

impl ParamKey {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The typed option, if this key is recognized
  pub fn option(&self) -> Option<ClientOption> {
    self.0.parse().ok()
  }
}

impl From<&str> for ParamKey {
  fn from(raw: &str) -> Self {
    ParamKey(normalize_key(raw))
  }
}

impl From<String> for ParamKey {
  fn from(raw: String) -> Self {
    ParamKey::from(raw.as_str())
  }
}

impl From<ClientOption> for ParamKey {
  fn from(option: ClientOption) -> Self {
    ParamKey(option.as_str().to_string())
  }
}

impl fmt::Display for ParamKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A value passed for a construction argument
#[derive(Clone)]
pub enum ParamValue {
  Str(String),
  Bool(bool),
  Port(u16),
  Level(LogLevel),
  Logger(Arc<dyn Logger>),
  Http(Arc<dyn HttpTransport>),
}

impl ParamValue {
  /// Wrap a concrete logger
  pub fn logger<L: Logger + 'static>(logger: Arc<L>) -> Self {
    ParamValue::Logger(logger)
  }

  /// Wrap a concrete transport
  pub fn http<T: HttpTransport + 'static>(transport: Arc<T>) -> Self {
    ParamValue::Http(transport)
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      ParamValue::Str(_) => "string",
      ParamValue::Bool(_) => "bool",
      ParamValue::Port(_) => "port",
      ParamValue::Level(_) => "log level",
      ParamValue::Logger(_) => "logger",
      ParamValue::Http(_) => "http transport",
    }
  }
}

impl fmt::Debug for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParamValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
      ParamValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
      ParamValue::Port(p) => f.debug_tuple("Port").field(p).finish(),
      ParamValue::Level(l) => f.debug_tuple("Level").field(l).finish(),
      other => write!(f, "{}(..)", other.kind()),
    }
  }
}

impl From<&str> for ParamValue {
  fn from(s: &str) -> Self {
    ParamValue::Str(s.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(s: String) -> Self {
    ParamValue::Str(s)
  }
}

impl From<bool> for ParamValue {
  fn from(b: bool) -> Self {
    ParamValue::Bool(b)
  }
}

impl From<u16> for ParamValue {
  fn from(port: u16) -> Self {
    ParamValue::Port(port)
  }
}

impl From<LogLevel> for ParamValue {
  fn from(level: LogLevel) -> Self {
    ParamValue::Level(level)
  }
}

impl From<Arc<dyn Logger>> for ParamValue {
  fn from(logger: Arc<dyn Logger>) -> Self {
    ParamValue::Logger(logger)
  }
}

impl From<Arc<dyn HttpTransport>> for ParamValue {
  fn from(transport: Arc<dyn HttpTransport>) -> Self {
    ParamValue::Http(transport)
  }
}

/// Ordered set of construction arguments
#[derive(Debug, Clone, Default)]
pub struct ClientParams {
  entries: Vec<(ParamKey, ParamValue)>,
}

impl ClientParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style [`ClientParams::insert`]
  pub fn with(mut self, key: impl Into<ParamKey>, value: impl Into<ParamValue>) -> Self {
    self.insert(key, value);
    self
  }

  /// Set `key`, replacing any earlier value under any spelling of the same key
  pub fn insert(&mut self, key: impl Into<ParamKey>, value: impl Into<ParamValue>) {
    let key = key.into();
    let value = value.into();
    match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
      Some(entry) => entry.1 = value,
      None => self.entries.push((key, value)),
    }
  }

  pub fn remove(&mut self, key: impl Into<ParamKey>) -> Option<ParamValue> {
    let key = key.into();
    let index = self.entries.iter().position(|(existing, _)| *existing == key)?;
    Some(self.entries.remove(index).1)
  }

  pub fn get(&self, key: impl Into<ParamKey>) -> Option<&ParamValue> {
    let key = key.into();
    self.entries.iter().find(|(existing, _)| *existing == key).map(|(_, value)| value)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &ParamValue)> {
    self.entries.iter().map(|(key, value)| (key, value))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<K, V> FromIterator<(K, V)> for ClientParams
where
  K: Into<ParamKey>,
  V: Into<ParamValue>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = ClientParams::new();
    for (key, value) in iter {
      params.insert(key, value);
    }
    params
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_string_and_symbol_keys_normalize() {
    assert_eq!(ParamKey::from(":api_key"), ParamKey::from("api_key"));
    assert_eq!(ParamKey::from(ClientOption::ApiKey), ParamKey::from("api_key"));
    assert_eq!(ParamKey::from(":log_level").option(), Some(ClientOption::LogLevel));
    assert_eq!(ParamKey::from("foobar").option(), None);
  }

  #[test]
  fn test_later_insert_wins_across_spellings() {
    let params = ClientParams::new().with("api_key", "1234").with(":api_key", "5678");

    assert_eq!(params.len(), 1);
    match params.get(ClientOption::ApiKey) {
      Some(ParamValue::Str(value)) => assert_eq!(value, "5678"),
      other => panic!("Expected string value, got {:?}", other),
    }
  }

  #[test]
  fn test_from_iterator_preserves_order() {
    let params: ClientParams = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
    let keys: Vec<&str> = params.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
  }

  #[test]
  fn test_remove() {
    let mut params = ClientParams::new().with("api_key", "1234").with("api_secret", "4546");
    assert!(params.remove(":api_key").is_some());
    assert!(params.get("api_key").is_none());
    assert_eq!(params.len(), 1);
  }

  #[test]
  fn test_env_var_names() {
    assert_eq!(ClientOption::ApiKey.env_var().as_deref(), Some("AMADEUS_API_KEY"));
    assert_eq!(ClientOption::ApiSecret.env_var().as_deref(), Some("AMADEUS_API_SECRET"));
    assert_eq!(ClientOption::Logger.env_var(), None);
    assert_eq!(ClientOption::Http.env_var(), None);
  }
}
