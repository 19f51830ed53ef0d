// Copyright 2024 Google LLC
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

//! Google APIs helpers for the BigQuery Reservation client library.
//!
//! This crate contains the types and functions used to turn the list RPCs of
//! the service into sequences of pages, or sequences of items. It also defines
//! the error type and the per-request options shared by all the RPCs.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client library.
pub mod error;

pub mod options;

/// Defines some types and traits to convert list RPCs into sequences of pages
/// or sequences of items, either as a [futures::Stream] or as a blocking
/// [Iterator].
pub mod paginator;
