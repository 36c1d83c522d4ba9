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

use crate::endpoints::{
  reference_data::ReferenceData, shopping::Shopping, travel::Travel, IntoParams,
};
use crate::transport::ReqwestTransport;
use amadeus_core::{
  ClientConfig, ClientParams, EndpointRequest, HttpTransport, LogLevel, Logger, Params, Response,
  Result, Verb,
};
use std::sync::Arc;
use tracing::instrument;

const CLIENT_TARGET: &str = "amadeus::client";

/// Main Amadeus API client
///
/// Owns the validated configuration and the HTTP transport, and exposes the
/// API's namespaces. Cloning is cheap: clones share configuration and
/// transport, which is how every namespace and decorator holds on to it.
///
/// # Examples
///
/// ```rust,no_run
/// use amadeus_client::{Client, ClientParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new(
///         ClientParams::new()
///             .with("api_key", "my-key")
///             .with("api_secret", "my-secret")
///             .with("hostname", "production"),
///     )?;
///
///     let response = client
///         .travel()
///         .analytics()
///         .air_traffic()
///         .traveled()
///         .get([("origin", "LHR"), ("period", "2017-03")])
///         .await?;
///     println!("{}", response.body);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
  config: Arc<ClientConfig>,
  transport: Arc<dyn HttpTransport>,
}

impl Client {
  /// Create a new client from construction arguments
  ///
  /// Missing arguments fall back to `AMADEUS_*` environment variables.
  ///
  /// # Errors
  ///
  /// Returns `Error::MissingArgument` when no API key or secret can be found,
  /// and `Error::Config` for values of the wrong shape.
  pub fn new(params: ClientParams) -> Result<Self> {
    Self::with_config(ClientConfig::new(params)?)
  }

  /// Create a client configured purely from the environment
  pub fn from_env() -> Result<Self> {
    Self::with_config(ClientConfig::from_env()?)
  }

  /// Create a client from an already validated configuration
  ///
  /// Uses the configuration's `http` transport when present, otherwise a
  /// [`ReqwestTransport`].
  pub fn with_config(config: ClientConfig) -> Result<Self> {
    let transport: Arc<dyn HttpTransport> = match config.http() {
      Some(transport) => transport.clone(),
      None => Arc::new(ReqwestTransport::new()?),
    };

    Ok(Self { config: Arc::new(config), transport })
  }

  /// Validated configuration
  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Resolved host
  pub fn host(&self) -> &str {
    self.config.host()
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.config.base_url()
  }

  /// Logger in use
  pub fn logger(&self) -> &Arc<dyn Logger> {
    self.config.logger()
  }

  /// Threshold applied before the logger is called
  pub fn log_level(&self) -> LogLevel {
    self.config.log_level()
  }

  /// `travel` namespace
  pub fn travel(&self) -> Travel {
    Travel::new(self.clone())
  }

  /// `reference_data` namespace
  pub fn reference_data(&self) -> ReferenceData {
    ReferenceData::new(self.clone())
  }

  /// `shopping` namespace
  pub fn shopping(&self) -> Shopping {
    Shopping::new(self.clone())
  }

  /// Make a GET request to `path`
  pub async fn get<P: IntoParams>(&self, path: &str, params: P) -> Result<Response> {
    self.request(Verb::Get, path, params.into_params()).await
  }

  /// Make a POST request to `path`
  pub async fn post<P: IntoParams>(&self, path: &str, params: P) -> Result<Response> {
    self.request(Verb::Post, path, params.into_params()).await
  }

  /// Make a DELETE request to `path`
  pub async fn delete<P: IntoParams>(&self, path: &str, params: P) -> Result<Response> {
    self.request(Verb::Delete, path, params.into_params()).await
  }

  #[instrument(skip(self, params))]
  async fn request(&self, verb: Verb, path: &str, params: Params) -> Result<Response> {
    let request = EndpointRequest::new(verb, path, params);
    self.config.log(LogLevel::Debug, CLIENT_TARGET, &format!("{} {}", verb, path));

    self.transport.send(self.config.base_url(), &request).await
  }
}

impl std::fmt::Debug for Client {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Client")
      .field("config", &self.config)
      .field("transport", &"HttpTransport")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use amadeus_core::test_utils::{RecordingLogger, RecordingTransport};
  use amadeus_core::{Hostname, ParamValue};

  fn valid_params() -> ClientParams {
    ClientParams::new().with("api_key", "1234").with("api_secret", "4546")
  }

  #[test]
  fn test_client_creation() {
    let client = Client::new(valid_params()).expect("Failed to create client");
    assert_eq!(client.host(), Hostname::Test.host());
    assert_eq!(client.base_url(), "https://test.api.amadeus.com");
    assert_eq!(client.log_level(), LogLevel::Warn);
  }

  #[tokio::test]
  async fn test_verbs_forward_to_transport() {
    let transport = RecordingTransport::replying(Response::new(204, ""));
    let client =
      Client::new(valid_params().with("http", ParamValue::http(transport.clone()))).unwrap();

    client.get("/v1/a", [("x", "1")]).await.unwrap();
    client.post("/v1/b", [("y", "2")]).await.unwrap();
    let response = client.delete("/v1/c", Params::new()).await.unwrap();
    assert_eq!(response.status, 204);

    let calls = transport.calls();
    let verbs: Vec<Verb> = calls.iter().map(|call| call.request.verb).collect();
    assert_eq!(verbs, vec![Verb::Get, Verb::Post, Verb::Delete]);
    assert!(calls.iter().all(|call| call.base_url == "https://test.api.amadeus.com"));
    assert_eq!(calls[1].request.params["y"], "2");
  }

  #[tokio::test]
  async fn test_requests_are_logged_at_debug() {
    let logger = RecordingLogger::new();
    let transport = RecordingTransport::replying(Response::new(200, "{}"));
    let client = Client::new(
      valid_params()
        .with("logger", ParamValue::logger(logger.clone()))
        .with("log_level", LogLevel::Debug)
        .with("http", ParamValue::http(transport)),
    )
    .unwrap();

    client.get("/v1/reference-data/airlines", Params::new()).await.unwrap();

    let entries = logger.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Debug);
    assert_eq!(entries[0].target, CLIENT_TARGET);
    assert_eq!(entries[0].message, "GET /v1/reference-data/airlines");
  }

  #[tokio::test]
  async fn test_debug_lines_suppressed_at_warn() {
    let logger = RecordingLogger::new();
    let transport = RecordingTransport::replying(Response::new(200, "{}"));
    let client = Client::new(
      valid_params()
        .with("logger", ParamValue::logger(logger.clone()))
        .with("http", ParamValue::http(transport)),
    )
    .unwrap();

    client.get("/v1/reference-data/airlines", Params::new()).await.unwrap();
    assert_eq!(logger.count(LogLevel::Debug), 0);
  }
}
