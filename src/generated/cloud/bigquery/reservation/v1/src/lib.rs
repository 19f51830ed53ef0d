// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Google Cloud Client Libraries for Rust - BigQuery Reservation API
//!
//! This crate contains the list and search RPCs of the BigQuery Reservation
//! API, and the pagers that iterate over their results.
//!
//! * [client::ReservationService] is the async client. Its request builders
//!   return a single page with `send()`, or an async pager with `pager()`.
//! * [blocking::ReservationService] returns blocking pagers, for
//!   applications without an async runtime.
//! * [stub::ReservationService] is the trait implemented by the transport,
//!   and by mocks in application tests.

pub use gax::Result;
pub use gax::error::Error;

pub mod model;

pub mod stub;

pub mod client;

pub mod builder;

pub mod blocking;

pub mod pagers;

pub(crate) mod tracing;
