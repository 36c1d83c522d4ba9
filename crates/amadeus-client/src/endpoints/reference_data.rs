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

//! `reference_data` namespace: static lookups for locations, airlines and links

use super::{decorator, AIRLINES, CHECKIN_LINKS, LOCATIONS};
use crate::client::Client;

/// Entry point for `client.reference_data()`
#[derive(Debug, Clone)]
pub struct ReferenceData {
  client: Client,
}

impl ReferenceData {
  pub(crate) fn new(client: Client) -> Self {
    Self { client }
  }

  /// `reference_data.urls`
  pub fn urls(&self) -> Urls {
    Urls::new(self.client.clone())
  }

  /// `reference_data.locations`
  pub fn locations(&self) -> Locations {
    Locations::new(self.client.clone())
  }

  /// `reference_data.airlines`
  pub fn airlines(&self) -> Airlines {
    Airlines::new(self.client.clone())
  }
}

/// `reference_data.urls` namespace
#[derive(Debug, Clone)]
pub struct Urls {
  client: Client,
}

impl Urls {
  pub(crate) fn new(client: Client) -> Self {
    Self { client }
  }

  /// `reference_data.urls.checkin_links`
  pub fn checkin_links(&self) -> CheckinLinks {
    CheckinLinks::new(self.client.clone())
  }
}

decorator! {
  /// Airline check-in page links
  ///
  /// Parameters: `airlineCode` (IATA or ICAO code, required) and `language`.
  CheckinLinks => CHECKIN_LINKS { get }
}

decorator! {
  /// Airports and cities matching a keyword
  ///
  /// Parameters: `keyword` (required) and `subType` (`AIRPORT`, `CITY` or both).
  Locations => LOCATIONS { get }
}

decorator! {
  /// Airline names by code
  ///
  /// Parameters: `airlineCodes` (comma separated IATA or ICAO codes).
  Airlines => AIRLINES { get }
}
