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

use crate::Result;
use crate::model::*;
use gax::options::RequestOptions;

/// Implements a [ReservationService](super::stub::ReservationService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ReservationService<T>
where
    T: super::stub::ReservationService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ReservationService<T>
where
    T: super::stub::ReservationService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ReservationService for ReservationService<T>
where
    T: super::stub::ReservationService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn list_reservations(
        &self,
        req: ListReservationsRequest,
        options: RequestOptions,
    ) -> Result<ListReservationsResponse> {
        self.inner.list_reservations(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_capacity_commitments(
        &self,
        req: ListCapacityCommitmentsRequest,
        options: RequestOptions,
    ) -> Result<ListCapacityCommitmentsResponse> {
        self.inner.list_capacity_commitments(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_assignments(
        &self,
        req: ListAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<ListAssignmentsResponse> {
        self.inner.list_assignments(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn search_assignments(
        &self,
        req: SearchAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<SearchAssignmentsResponse> {
        self.inner.search_assignments(req, options).await
    }
}
