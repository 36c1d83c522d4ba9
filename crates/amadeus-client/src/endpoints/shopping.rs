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

//! `shopping` namespace: flight and hotel search

use super::{decorator, FLIGHT_DATES, FLIGHT_DESTINATIONS, FLIGHT_OFFERS, HOTEL_OFFERS};
use crate::client::Client;

/// Entry point for `client.shopping()`
#[derive(Debug, Clone)]
pub struct Shopping {
  client: Client,
}

impl Shopping {
  pub(crate) fn new(client: Client) -> Self {
    Self { client }
  }

  /// `shopping.flight_destinations`
  pub fn flight_destinations(&self) -> FlightDestinations {
    FlightDestinations::new(self.client.clone())
  }

  /// `shopping.flight_dates`
  pub fn flight_dates(&self) -> FlightDates {
    FlightDates::new(self.client.clone())
  }

  /// `shopping.flight_offers`
  pub fn flight_offers(&self) -> FlightOffers {
    FlightOffers::new(self.client.clone())
  }

  /// `shopping.hotel_offers`
  pub fn hotel_offers(&self) -> HotelOffers {
    HotelOffers::new(self.client.clone())
  }
}

decorator! {
  /// Cheapest destinations from an origin
  ///
  /// Parameters: `origin` (IATA code, required), `departureDate`,
  /// `oneWay`, `duration`, `nonStop`, `maxPrice`.
  FlightDestinations => FLIGHT_DESTINATIONS { get }
}

decorator! {
  /// Cheapest travel dates for a route
  ///
  /// Parameters: `origin` and `destination` (IATA codes, required).
  FlightDates => FLIGHT_DATES { get }
}

decorator! {
  /// Priced flight offers for a route and date
  ///
  /// Parameters: `origin`, `destination`, `departureDate` (required),
  /// `returnDate`, `adults`, `currency`, `max`.
  FlightOffers => FLIGHT_OFFERS { get }
}

decorator! {
  /// Hotel offers in a city
  ///
  /// Parameters: `cityCode` (IATA code, required), `checkInDate`,
  /// `checkOutDate`, `adults`.
  HotelOffers => HOTEL_OFFERS { get }
}
