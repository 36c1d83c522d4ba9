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

//! Default HTTP transport backed by `reqwest`

use amadeus_core::{EndpointRequest, Error, HttpTransport, Response, Result, Verb};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Request timeout used by [`ReqwestTransport::new`]
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP transport layer for making requests to the Amadeus API
///
/// Performs a single attempt per call. GET and DELETE send the parameters as
/// a query string, POST sends them as a JSON object.
pub struct ReqwestTransport {
  client: Client,
  timeout: Duration,
}

impl ReqwestTransport {
  /// Create a transport with the default timeout
  pub fn new() -> Result<Self> {
    Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
  }

  /// Create a transport with a custom request timeout
  pub fn with_timeout(timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("amadeus-rust/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout })
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Build the full URL for an API request
  ///
  /// Query parameters are only attached for verbs without a body, and are
  /// sorted by key so the URL is stable.
  fn build_url(&self, base_url: &str, request: &EndpointRequest) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), request.path))?;

    if request.verb != Verb::Post && !request.params.is_empty() {
      let sorted: BTreeMap<&String, &String> = request.params.iter().collect();
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in sorted {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  #[instrument(skip(self, request), fields(verb = %request.verb, path = %request.path))]
  async fn send(&self, base_url: &str, request: &EndpointRequest) -> Result<Response> {
    let url = self.build_url(base_url, request)?;
    debug!("Making request to: {}", url);

    let builder = match request.verb {
      Verb::Get => self.client.get(url),
      Verb::Delete => self.client.delete(url),
      Verb::Post => self.client.post(url).json(&request.params),
    };

    let response = builder.send().await.map_err(|e| {
      error!("Request failed: {}", e);
      Error::Http(format!("Request failed: {}", e))
    })?;

    let status = response.status().as_u16();
    let body = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!(status, "Response body length: {} bytes", body.len());
    #[cfg(feature = "debug-logging")]
    debug!("Response body: {}", body);

    Ok(Response::new(status, body))
  }
}

impl std::fmt::Debug for ReqwestTransport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ReqwestTransport").field("timeout", &self.timeout).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use amadeus_core::Params;

  fn request(verb: Verb, params: &[(&str, &str)]) -> EndpointRequest {
    let params: Params = params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    EndpointRequest::new(verb, "/v1/travel/analytics/air-traffic/traveled", params)
  }

  #[test]
  fn test_build_url() {
    let transport = ReqwestTransport::new().unwrap();
    let url = transport
      .build_url(
        "https://test.api.amadeus.com",
        &request(Verb::Get, &[("period", "2017-03"), ("origin", "LHR")]),
      )
      .unwrap();

    assert_eq!(url.path(), "/v1/travel/analytics/air-traffic/traveled");
    assert_eq!(url.query(), Some("origin=LHR&period=2017-03"));
  }

  #[test]
  fn test_build_url_trailing_slash_base() {
    let transport = ReqwestTransport::new().unwrap();
    let url = transport.build_url("http://foo.bar.com/", &request(Verb::Get, &[])).unwrap();
    assert_eq!(url.as_str(), "http://foo.bar.com/v1/travel/analytics/air-traffic/traveled");
  }

  #[test]
  fn test_post_keeps_params_out_of_query() {
    let transport = ReqwestTransport::new().unwrap();
    let url = transport
      .build_url("https://test.api.amadeus.com", &request(Verb::Post, &[("origin", "LHR")]))
      .unwrap();
    assert_eq!(url.query(), None);
  }

  #[test]
  fn test_query_values_are_encoded() {
    let transport = ReqwestTransport::new().unwrap();
    let url = transport
      .build_url("https://test.api.amadeus.com", &request(Verb::Get, &[("keyword", "NEW YORK")]))
      .unwrap();
    assert_eq!(url.query(), Some("keyword=NEW+YORK"));
  }

  #[test]
  fn test_timeout() {
    let transport = ReqwestTransport::with_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(transport.timeout(), Duration::from_secs(5));
  }
}
