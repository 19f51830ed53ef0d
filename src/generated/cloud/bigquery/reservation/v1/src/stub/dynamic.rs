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

/// A dyn-compatible, crate-private version of [super::ReservationService].
#[async_trait::async_trait]
pub trait ReservationService: std::fmt::Debug + Send + Sync {
    async fn list_reservations(
        &self,
        req: ListReservationsRequest,
        options: RequestOptions,
    ) -> Result<ListReservationsResponse>;

    async fn list_capacity_commitments(
        &self,
        req: ListCapacityCommitmentsRequest,
        options: RequestOptions,
    ) -> Result<ListCapacityCommitmentsResponse>;

    async fn list_assignments(
        &self,
        req: ListAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<ListAssignmentsResponse>;

    async fn search_assignments(
        &self,
        req: SearchAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<SearchAssignmentsResponse>;
}

/// All implementations of [super::ReservationService] also implement [ReservationService].
#[async_trait::async_trait]
impl<T: super::ReservationService> ReservationService for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_reservations(
        &self,
        req: ListReservationsRequest,
        options: RequestOptions,
    ) -> Result<ListReservationsResponse> {
        T::list_reservations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_capacity_commitments(
        &self,
        req: ListCapacityCommitmentsRequest,
        options: RequestOptions,
    ) -> Result<ListCapacityCommitmentsResponse> {
        T::list_capacity_commitments(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_assignments(
        &self,
        req: ListAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<ListAssignmentsResponse> {
        T::list_assignments(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn search_assignments(
        &self,
        req: SearchAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<SearchAssignmentsResponse> {
        T::search_assignments(self, req, options).await
    }
}
