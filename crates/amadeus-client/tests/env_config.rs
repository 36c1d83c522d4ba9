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

//! Construction from `AMADEUS_*` environment variables
//!
//! Kept in its own test binary so no other test observes the variables.

use amadeus_client::{Client, ClientParams, Error, Hostname};
use std::env;

#[test]
fn test_environment_configuration() {
  env::set_var("AMADEUS_API_KEY", "123");
  env::set_var("AMADEUS_API_SECRET", "234");
  env::set_var("AMADEUS_HOSTNAME", "production");

  let client = Client::from_env().expect("Failed to create client from env");
  assert_eq!(client.config().api_key(), "123");
  assert_eq!(client.config().api_secret(), "234");
  assert_eq!(client.host(), Hostname::Production.host());

  // explicit arguments still win
  let client = Client::new(ClientParams::new().with("api_key", "explicit")).unwrap();
  assert_eq!(client.config().api_key(), "explicit");
  assert_eq!(client.config().api_secret(), "234");

  env::remove_var("AMADEUS_API_KEY");
  env::remove_var("AMADEUS_API_SECRET");
  env::remove_var("AMADEUS_HOSTNAME");

  match Client::from_env() {
    Err(Error::MissingArgument(key)) => assert_eq!(key, "api_key"),
    other => panic!("Expected MissingArgument, got {:?}", other),
  }
}
