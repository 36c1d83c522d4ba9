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

//! Normalizes construction arguments into a [`ClientConfig`]
//!
//! Every option resolves by the same precedence: explicit parameter, then the
//! `AMADEUS_<OPTION>` environment variable, then the default. `client_id` and
//! `client_secret` are aliases for `api_key` and `api_secret`; the `api_*`
//! spelling wins when both are present at the same step.

use crate::config::{build_base_url, ClientConfig};
use crate::error::{Error, Result};
use crate::http::HttpTransport;
use crate::logger::{LogLevel, Logger, TracingLogger};
use crate::params::{ClientOption, ClientParams, ParamValue};
use crate::{Hostname, DEFAULT_SSL, VALIDATOR_TARGET};
use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tracing::debug;

/// Validate against the process environment
///
/// Loads a `.env` file first, if one exists.
pub fn validate(params: ClientParams) -> Result<ClientConfig> {
  dotenv().ok();
  validate_with_env(params, |name| env::var(name).ok())
}

/// Validate with an explicit environment lookup
pub fn validate_with_env<F>(params: ClientParams, env: F) -> Result<ClientConfig>
where
  F: Fn(&str) -> Option<String>,
{
  let resolver = Resolver { params: &params, env: &env };

  let api_key = resolver.required(ClientOption::ApiKey, ClientOption::ClientId)?;
  let api_secret = resolver.required(ClientOption::ApiSecret, ClientOption::ClientSecret)?;

  let logger = resolver.logger()?;
  let log_level = resolver.log_level()?;

  let ssl = resolver.ssl()?;
  let port = resolver.port(ssl)?;
  let host = resolver.host()?;
  let base_url = build_base_url(&host, ssl, port)?;
  let http = resolver.http()?;

  let unrecognized: Vec<String> = params
    .iter()
    .filter(|(key, _)| key.option().is_none())
    .map(|(key, _)| key.to_string())
    .collect();

  let config = ClientConfig {
    api_key,
    api_secret,
    host,
    base_url,
    ssl,
    port,
    log_level,
    logger,
    http,
    unrecognized,
  };

  for key in &config.unrecognized {
    config.log(LogLevel::Warn, VALIDATOR_TARGET, &format!("Unrecognized option: {}", key));
  }

  debug!(host = %config.host, base_url = %config.base_url, "Client configuration validated");
  Ok(config)
}

struct Resolver<'a, F> {
  params: &'a ClientParams,
  env: &'a F,
}

impl<F> Resolver<'_, F>
where
  F: Fn(&str) -> Option<String>,
{
  fn explicit_string(&self, option: ClientOption) -> Result<Option<String>> {
    match self.params.get(option) {
      Some(ParamValue::Str(value)) if !value.is_empty() => Ok(Some(value.clone())),
      Some(ParamValue::Str(_)) | None => Ok(None),
      Some(other) => Err(mistyped(option, "a string", other)),
    }
  }

  fn env_string(&self, option: ClientOption) -> Option<String> {
    option.env_var().and_then(|name| (self.env)(name.as_str())).filter(|value| !value.is_empty())
  }

  fn string(&self, option: ClientOption) -> Result<Option<String>> {
    Ok(self.explicit_string(option)?.or_else(|| self.env_string(option)))
  }

  fn required(&self, option: ClientOption, alias: ClientOption) -> Result<String> {
    if let Some(value) = self.explicit_string(option)? {
      return Ok(value);
    }
    if let Some(value) = self.explicit_string(alias)? {
      return Ok(value);
    }
    self
      .env_string(option)
      .or_else(|| self.env_string(alias))
      .ok_or_else(|| Error::MissingArgument(option.to_string()))
  }

  fn logger(&self) -> Result<Arc<dyn Logger>> {
    match self.params.get(ClientOption::Logger) {
      Some(ParamValue::Logger(logger)) => Ok(logger.clone()),
      Some(other) => Err(mistyped(ClientOption::Logger, "a logger", other)),
      None => Ok(Arc::new(TracingLogger)),
    }
  }

  fn log_level(&self) -> Result<LogLevel> {
    match self.params.get(ClientOption::LogLevel) {
      Some(ParamValue::Level(level)) => Ok(*level),
      Some(ParamValue::Str(value)) => value.parse(),
      Some(other) => Err(mistyped(ClientOption::LogLevel, "a log level", other)),
      None => match self.env_string(ClientOption::LogLevel) {
        Some(value) => value.parse(),
        None => Ok(LogLevel::default()),
      },
    }
  }

  fn ssl(&self) -> Result<bool> {
    let raw = match self.params.get(ClientOption::Ssl) {
      Some(ParamValue::Bool(ssl)) => return Ok(*ssl),
      Some(ParamValue::Str(value)) => Some(value.clone()),
      Some(other) => return Err(mistyped(ClientOption::Ssl, "a bool", other)),
      None => self.env_string(ClientOption::Ssl),
    };

    match raw {
      Some(value) => value
        .trim()
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for option 'ssl': {}", value))),
      None => Ok(DEFAULT_SSL),
    }
  }

  fn port(&self, ssl: bool) -> Result<u16> {
    let raw = match self.params.get(ClientOption::Port) {
      Some(ParamValue::Port(port)) => return Ok(*port),
      Some(ParamValue::Str(value)) => Some(value.clone()),
      Some(other) => return Err(mistyped(ClientOption::Port, "a port number", other)),
      None => self.env_string(ClientOption::Port),
    };

    match raw {
      Some(value) => value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for option 'port': {}", value))),
      None => Ok(if ssl { 443 } else { 80 }),
    }
  }

  fn host(&self) -> Result<String> {
    if let Some(host) = self.string(ClientOption::Host)? {
      return Ok(host);
    }

    let hostname = match self.string(ClientOption::Hostname)? {
      Some(name) => name.parse::<Hostname>()?,
      None => Hostname::default(),
    };
    Ok(hostname.host().to_string())
  }

  fn http(&self) -> Result<Option<Arc<dyn HttpTransport>>> {
    match self.params.get(ClientOption::Http) {
      Some(ParamValue::Http(transport)) => Ok(Some(transport.clone())),
      Some(other) => Err(mistyped(ClientOption::Http, "an http transport", other)),
      None => Ok(None),
    }
  }
}

fn mistyped(option: ClientOption, expected: &str, got: &ParamValue) -> Error {
  Error::Config(format!("Expected {} for option '{}', got {}", expected, option, got.kind()))
}
