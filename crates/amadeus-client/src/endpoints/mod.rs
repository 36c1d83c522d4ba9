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

//! Endpoint descriptors and the decorators generated from them
//!
//! Every REST resource is one [`Endpoint`] in [`ENDPOINTS`]. The
//! `decorator!` macro stamps out a type per resource whose verb methods do
//! nothing but call [`forward`] with that descriptor.

pub mod reference_data;
pub mod shopping;
pub mod travel;

use crate::client::Client;
use amadeus_core::{Params, Response, Result, Verb};

/// A fixed REST resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
  /// Dotted namespace path, e.g. `travel.analytics.air_traffic.traveled`
  pub name: &'static str,
  /// Request path under the API host
  pub path: &'static str,
  /// Verbs the decorator exposes
  pub verbs: &'static [Verb],
}

impl Endpoint {
  /// Look a descriptor up by its dotted name
  pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|endpoint| endpoint.name == name)
  }

  /// Whether the decorator for this resource exposes `verb`
  pub fn supports(&self, verb: Verb) -> bool {
    self.verbs.contains(&verb)
  }
}

/// `GET /v1/travel/analytics/air-traffic/traveled`
pub const TRAVELED: Endpoint = Endpoint {
  name: "travel.analytics.air_traffic.traveled",
  path: "/v1/travel/analytics/air-traffic/traveled",
  verbs: &[Verb::Get],
};

/// `GET /v1/travel/analytics/air-traffic/booked`
pub const BOOKED: Endpoint = Endpoint {
  name: "travel.analytics.air_traffic.booked",
  path: "/v1/travel/analytics/air-traffic/booked",
  verbs: &[Verb::Get],
};

/// `GET /v1/travel/analytics/air-traffic/busiest-period`
pub const BUSIEST_PERIOD: Endpoint = Endpoint {
  name: "travel.analytics.air_traffic.busiest_period",
  path: "/v1/travel/analytics/air-traffic/busiest-period",
  verbs: &[Verb::Get],
};

/// `GET /v1/travel/analytics/fare-searches`
pub const FARE_SEARCHES: Endpoint = Endpoint {
  name: "travel.analytics.fare_searches",
  path: "/v1/travel/analytics/fare-searches",
  verbs: &[Verb::Get],
};

/// `GET /v2/reference-data/urls/checkin-links`
pub const CHECKIN_LINKS: Endpoint = Endpoint {
  name: "reference_data.urls.checkin_links",
  path: "/v2/reference-data/urls/checkin-links",
  verbs: &[Verb::Get],
};

/// `GET /v1/reference-data/locations`
pub const LOCATIONS: Endpoint = Endpoint {
  name: "reference_data.locations",
  path: "/v1/reference-data/locations",
  verbs: &[Verb::Get],
};

/// `GET /v1/reference-data/airlines`
pub const AIRLINES: Endpoint = Endpoint {
  name: "reference_data.airlines",
  path: "/v1/reference-data/airlines",
  verbs: &[Verb::Get],
};

/// `GET /v1/shopping/flight-destinations`
pub const FLIGHT_DESTINATIONS: Endpoint = Endpoint {
  name: "shopping.flight_destinations",
  path: "/v1/shopping/flight-destinations",
  verbs: &[Verb::Get],
};

/// `GET /v1/shopping/flight-dates`
pub const FLIGHT_DATES: Endpoint = Endpoint {
  name: "shopping.flight_dates",
  path: "/v1/shopping/flight-dates",
  verbs: &[Verb::Get],
};

/// `GET /v1/shopping/flight-offers`
pub const FLIGHT_OFFERS: Endpoint = Endpoint {
  name: "shopping.flight_offers",
  path: "/v1/shopping/flight-offers",
  verbs: &[Verb::Get],
};

/// `GET /v1/shopping/hotel-offers`
pub const HOTEL_OFFERS: Endpoint = Endpoint {
  name: "shopping.hotel_offers",
  path: "/v1/shopping/hotel-offers",
  verbs: &[Verb::Get],
};

/// Every resource the client knows about
pub const ENDPOINTS: &[Endpoint] = &[
  TRAVELED,
  BOOKED,
  BUSIEST_PERIOD,
  FARE_SEARCHES,
  CHECKIN_LINKS,
  LOCATIONS,
  AIRLINES,
  FLIGHT_DESTINATIONS,
  FLIGHT_DATES,
  FLIGHT_OFFERS,
  HOTEL_OFFERS,
];

/// Anything that can be turned into request parameters
///
/// Implemented for any iterator of key/value pairs, so arrays of tuples,
/// `Vec`s and `HashMap`s all work.
pub trait IntoParams {
  /// Collect into a [`Params`] map
  fn into_params(self) -> Params;
}

impl<I, K, V> IntoParams for I
where
  I: IntoIterator<Item = (K, V)>,
  K: Into<String>,
  V: Into<String>,
{
  fn into_params(self) -> Params {
    self.into_iter().map(|(key, value)| (key.into(), value.into())).collect()
  }
}

/// Hand `params` to the client verb matching `verb`, at `endpoint`'s path
///
/// The client's result is returned as is.
pub async fn forward<P: IntoParams>(
  client: &Client,
  endpoint: &Endpoint,
  verb: Verb,
  params: P,
) -> Result<Response> {
  debug_assert!(endpoint.supports(verb), "{} does not expose {}", endpoint.name, verb);
  match verb {
    Verb::Get => client.get(endpoint.path, params).await,
    Verb::Post => client.post(endpoint.path, params).await,
    Verb::Delete => client.delete(endpoint.path, params).await,
  }
}

/// Macro generating a decorator type for one endpoint descriptor
macro_rules! decorator {
  (
    $(#[$meta:meta])*
    $name:ident => $endpoint:path { $($verb:ident),+ $(,)? }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone)]
    pub struct $name {
      client: $crate::client::Client,
    }

    impl $name {
      /// Verbs this decorator exposes as methods
      pub const VERBS: &'static [amadeus_core::Verb] = &[$(decorator!(@variant $verb)),+];

      pub(crate) fn new(client: $crate::client::Client) -> Self {
        Self { client }
      }

      /// Descriptor of the resource this decorator forwards to
      pub fn endpoint(&self) -> &'static $crate::endpoints::Endpoint {
        &$endpoint
      }

      $( decorator!(@verb $verb, $endpoint); )+
    }
  };

  (@variant get) => { amadeus_core::Verb::Get };
  (@variant post) => { amadeus_core::Verb::Post };
  (@variant delete) => { amadeus_core::Verb::Delete };

  (@verb get, $endpoint:path) => {
    /// Forward a GET with `params` to this resource
    pub async fn get<P: $crate::endpoints::IntoParams>(
      &self,
      params: P,
    ) -> amadeus_core::Result<amadeus_core::Response> {
      $crate::endpoints::forward(&self.client, &$endpoint, amadeus_core::Verb::Get, params).await
    }
  };

  (@verb post, $endpoint:path) => {
    /// Forward a POST with `params` to this resource
    pub async fn post<P: $crate::endpoints::IntoParams>(
      &self,
      params: P,
    ) -> amadeus_core::Result<amadeus_core::Response> {
      $crate::endpoints::forward(&self.client, &$endpoint, amadeus_core::Verb::Post, params).await
    }
  };

  (@verb delete, $endpoint:path) => {
    /// Forward a DELETE with `params` to this resource
    pub async fn delete<P: $crate::endpoints::IntoParams>(
      &self,
      params: P,
    ) -> amadeus_core::Result<amadeus_core::Response> {
      $crate::endpoints::forward(&self.client, &$endpoint, amadeus_core::Verb::Delete, params)
        .await
    }
  };
}

pub(crate) use decorator;

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::{HashMap, HashSet};

  #[test]
  fn test_endpoint_names_are_unique() {
    let names: HashSet<&str> = ENDPOINTS.iter().map(|endpoint| endpoint.name).collect();
    assert_eq!(names.len(), ENDPOINTS.len());
  }

  #[test]
  fn test_endpoint_paths_are_versioned() {
    for endpoint in ENDPOINTS {
      assert!(
        endpoint.path.starts_with("/v1/") || endpoint.path.starts_with("/v2/"),
        "{} has unversioned path {}",
        endpoint.name,
        endpoint.path
      );
      assert!(!endpoint.verbs.is_empty(), "{} exposes no verbs", endpoint.name);
    }
  }

  #[test]
  fn test_find() {
    let endpoint = Endpoint::find("travel.analytics.air_traffic.traveled").unwrap();
    assert_eq!(endpoint.path, "/v1/travel/analytics/air-traffic/traveled");
    assert!(endpoint.supports(Verb::Get));
    assert!(!endpoint.supports(Verb::Delete));
    assert!(Endpoint::find("travel.analytics.unknown").is_none());
  }

  #[test]
  fn test_decorators_match_descriptor_verbs() {
    use super::reference_data::{Airlines, CheckinLinks, Locations};
    use super::shopping::{FlightDates, FlightDestinations, FlightOffers, HotelOffers};
    use super::travel::{Booked, BusiestPeriod, FareSearches, Traveled};

    let decorators: [(&Endpoint, &[Verb]); 11] = [
      (&TRAVELED, Traveled::VERBS),
      (&BOOKED, Booked::VERBS),
      (&BUSIEST_PERIOD, BusiestPeriod::VERBS),
      (&FARE_SEARCHES, FareSearches::VERBS),
      (&CHECKIN_LINKS, CheckinLinks::VERBS),
      (&LOCATIONS, Locations::VERBS),
      (&AIRLINES, Airlines::VERBS),
      (&FLIGHT_DESTINATIONS, FlightDestinations::VERBS),
      (&FLIGHT_DATES, FlightDates::VERBS),
      (&FLIGHT_OFFERS, FlightOffers::VERBS),
      (&HOTEL_OFFERS, HotelOffers::VERBS),
    ];

    assert_eq!(decorators.len(), ENDPOINTS.len());
    for (endpoint, verbs) in decorators {
      assert_eq!(endpoint.verbs, verbs, "{} decorator verbs drifted", endpoint.name);
    }
  }

  #[test]
  fn test_into_params() {
    let params = [("origin", "LHR"), ("period", "2017-03")].into_params();
    assert_eq!(params.len(), 2);
    assert_eq!(params["origin"], "LHR");

    let owned: HashMap<String, String> =
      HashMap::from([("origin".to_string(), "BOS".to_string())]);
    assert_eq!(owned.clone().into_params(), owned);
  }
}
