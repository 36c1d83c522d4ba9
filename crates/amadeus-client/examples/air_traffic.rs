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

//! Air Traffic Example
//!
//! Looks up where travellers from an origin went in a given month, using
//! credentials from `AMADEUS_API_KEY` / `AMADEUS_API_SECRET` (or a `.env` file).
//!
//! ```text
//! cargo run --example air_traffic -- LHR 2017-03
//! ```

use amadeus_client::{Client, ClientParams, LogLevel};
use serde_json::Value;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let mut args = env::args().skip(1);
  let origin = args.next().unwrap_or_else(|| "LHR".to_string());
  let period = args.next().unwrap_or_else(|| "2017-03".to_string());

  let client = Client::new(ClientParams::new().with("log_level", LogLevel::Debug))?;
  println!("Using host {}", client.host());

  let response = client
    .travel()
    .analytics()
    .air_traffic()
    .traveled()
    .get([("origin", origin.as_str()), ("period", period.as_str())])
    .await?;

  if !response.is_success() {
    eprintln!("Request failed with status {}: {}", response.status, response.body);
    return Ok(());
  }

  let body: Value = response.json()?;
  let destinations = body["data"].as_array().cloned().unwrap_or_default();
  println!("Top destinations from {} in {}:", origin, period);
  for entry in destinations {
    let destination = entry["destination"].as_str().unwrap_or("?");
    let flights = &entry["analytics"]["flights"]["score"];
    let travellers = &entry["analytics"]["travelers"]["score"];
    println!("  {:<4} flights: {:>3}  travelers: {:>3}", destination, flights, travellers);
  }

  Ok(())
}
