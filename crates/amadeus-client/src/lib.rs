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

//! # amadeus-client
//!
//! A client for the Amadeus travel APIs.
//!
//! ## Features
//!
//! - **Namespaced access**: `client.travel().analytics().air_traffic().traveled()`
//!   mirrors the API's resource tree
//! - **Validated configuration**: credentials from arguments or `AMADEUS_*`
//!   environment variables, checked once at construction
//! - **Pluggable transport**: `reqwest` by default, or any [`HttpTransport`]
//!   passed as the `http` option
//! - **Pluggable logging**: `tracing` by default, or any [`Logger`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use amadeus_client::{Client, ClientParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // AMADEUS_API_KEY / AMADEUS_API_SECRET fill in anything not given here
//!     let client = Client::new(ClientParams::new().with("hostname", "test"))?;
//!
//!     let response = client
//!         .travel()
//!         .analytics()
//!         .air_traffic()
//!         .traveled()
//!         .get([("origin", "LHR"), ("period", "2017-03")])
//!         .await?;
//!     println!("{} {}", response.status, response.body);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, amadeus_core::Error>`. Transport failures are
//! returned exactly as the transport reported them.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// The [`Client`] type and its low-level verb methods
pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use amadeus_core::{
  ClientConfig, ClientOption, ClientParams, EndpointRequest, Error, Hostname, HttpTransport,
  LogLevel, Logger, ParamValue, Params, Response, Result, TracingLogger, Verb,
};
pub use client::Client;
pub use endpoints::{Endpoint, IntoParams, ENDPOINTS};
pub use transport::ReqwestTransport;

// Re-export namespace and decorator types for direct access if needed
pub use endpoints::{
  reference_data::{Airlines, CheckinLinks, Locations, ReferenceData, Urls},
  shopping::{FlightDates, FlightDestinations, FlightOffers, HotelOffers, Shopping},
  travel::{AirTraffic, Analytics, Booked, BusiestPeriod, FareSearches, Travel, Traveled},
};
