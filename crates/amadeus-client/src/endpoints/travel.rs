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

//! `travel` namespace: market analytics over historical traffic and searches

use super::{decorator, BOOKED, BUSIEST_PERIOD, FARE_SEARCHES, TRAVELED};
use crate::client::Client;

/// Entry point for `client.travel()`
#[derive(Debug, Clone)]
pub struct Travel {
  client: Client,
}

impl Travel {
  pub(crate) fn new(client: Client) -> Self {
    Self { client }
  }

  /// `travel.analytics`
  pub fn analytics(&self) -> Analytics {
    Analytics::new(self.client.clone())
  }
}

/// `travel.analytics` namespace
#[derive(Debug, Clone)]
pub struct Analytics {
  client: Client,
}

impl Analytics {
  pub(crate) fn new(client: Client) -> Self {
    Self { client }
  }

  /// `travel.analytics.air_traffic`
  pub fn air_traffic(&self) -> AirTraffic {
    AirTraffic::new(self.client.clone())
  }

  /// `travel.analytics.fare_searches`
  pub fn fare_searches(&self) -> FareSearches {
    FareSearches::new(self.client.clone())
  }
}

/// `travel.analytics.air_traffic` namespace
#[derive(Debug, Clone)]
pub struct AirTraffic {
  client: Client,
}

impl AirTraffic {
  pub(crate) fn new(client: Client) -> Self {
    Self { client }
  }

  /// `travel.analytics.air_traffic.traveled`
  pub fn traveled(&self) -> Traveled {
    Traveled::new(self.client.clone())
  }

  /// `travel.analytics.air_traffic.booked`
  pub fn booked(&self) -> Booked {
    Booked::new(self.client.clone())
  }

  /// `travel.analytics.air_traffic.busiest_period`
  pub fn busiest_period(&self) -> BusiestPeriod {
    BusiestPeriod::new(self.client.clone())
  }
}

decorator! {
  /// Air traffic reports by number of travellers
  ///
  /// Parameters: `origin` (IATA code of the origin city, required) and
  /// `period` (`YYYY-MM`).
  ///
  /// ```rust,no_run
  /// # async fn run(client: amadeus_client::Client) -> amadeus_client::Result<()> {
  /// let response = client
  ///   .travel()
  ///   .analytics()
  ///   .air_traffic()
  ///   .traveled()
  ///   .get([("origin", "LHR"), ("period", "2017-03")])
  ///   .await?;
  /// println!("{}", response.body);
  /// # Ok(())
  /// # }
  /// ```
  Traveled => TRAVELED { get }
}

decorator! {
  /// Air traffic reports by number of bookings
  ///
  /// Parameters: `origin` (IATA code, required) and `period` (`YYYY-MM`).
  Booked => BOOKED { get }
}

decorator! {
  /// Busiest travel periods for a city
  ///
  /// Parameters: `cityCode` (IATA code, required), `period` (`YYYY`) and
  /// `direction` (`ARRIVING` or `DEPARTING`).
  BusiestPeriod => BUSIEST_PERIOD { get }
}

decorator! {
  /// Number of fare searches from an origin
  ///
  /// Parameters: `origin` (IATA code, required), `sourceCountry` and
  /// `period` (`YYYY-MM`).
  FareSearches => FARE_SEARCHES { get }
}

#[cfg(test)]
mod tests {
  use super::*;
  use amadeus_core::test_utils::RecordingTransport;
  use amadeus_core::{ClientParams, ParamValue, Response, Verb};

  fn client_with(transport: std::sync::Arc<RecordingTransport>) -> Client {
    let params = ClientParams::new()
      .with("api_key", "1234")
      .with("api_secret", "4546")
      .with("http", ParamValue::http(transport));
    Client::new(params).unwrap()
  }

  #[test]
  fn test_traveled_forwards_once() {
    let transport = RecordingTransport::replying(Response::new(200, r#"{"data": []}"#));
    let client = client_with(transport.clone());

    let traveled = client.travel().analytics().air_traffic().traveled();
    let response =
      tokio_test::block_on(traveled.get([("origin", "LHR"), ("period", "2017-03")])).unwrap();

    assert_eq!(response, Response::new(200, r#"{"data": []}"#));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].request.verb, Verb::Get);
    assert_eq!(calls[0].request.path, "/v1/travel/analytics/air-traffic/traveled");
    assert_eq!(calls[0].request.params.len(), 2);
    assert_eq!(calls[0].request.params["origin"], "LHR");
    assert_eq!(calls[0].request.params["period"], "2017-03");
  }

  #[test]
  fn test_analytics_paths() {
    let transport = RecordingTransport::replying(Response::new(200, "{}"));
    let client = client_with(transport.clone());
    let analytics = client.travel().analytics();

    tokio_test::block_on(async {
      analytics.air_traffic().booked().get([("origin", "MAD")]).await.unwrap();
      analytics.air_traffic().busiest_period().get([("cityCode", "MAD")]).await.unwrap();
      analytics.fare_searches().get([("origin", "MAD")]).await.unwrap();
    });

    let paths: Vec<String> = transport.calls().into_iter().map(|call| call.request.path).collect();
    assert_eq!(
      paths,
      vec![
        "/v1/travel/analytics/air-traffic/booked",
        "/v1/travel/analytics/air-traffic/busiest-period",
        "/v1/travel/analytics/fare-searches",
      ]
    );
  }

  #[test]
  fn test_decorator_exposes_descriptor() {
    let client = client_with(RecordingTransport::replying(Response::new(200, "{}")));
    let traveled = client.travel().analytics().air_traffic().traveled();
    assert_eq!(traveled.endpoint(), &TRAVELED);
  }
}
