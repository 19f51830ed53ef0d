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

//! Pagers for the list and search RPCs in [ReservationService][crate::client::ReservationService].
//!
//! Each RPC has a blocking pager, returned by
//! [blocking::ReservationService][crate::blocking::ReservationService], and an
//! async pager, returned by the `pager()` method of the request builders.
//! Both yield the items of every page in order, and fetch the next page only
//! when the application asks for it.

use crate::model::*;
use gax::paginator;

/// Iterates over the [Reservation] items of [list_reservations][crate::blocking::ReservationService::list_reservations].
pub type ListReservationsPager = paginator::blocking::Paginator<
    ListReservationsRequest,
    ListReservationsResponse,
    paginator::blocking::BoxedMethod<ListReservationsRequest, ListReservationsResponse>,
>;

/// Streams the [Reservation] items of [list_reservations][crate::client::ReservationService::list_reservations].
pub type ListReservationsAsyncPager = paginator::Paginator<
    ListReservationsRequest,
    ListReservationsResponse,
    paginator::BoxedMethod<ListReservationsRequest, ListReservationsResponse>,
>;

/// Iterates over the [CapacityCommitment] items of [list_capacity_commitments][crate::blocking::ReservationService::list_capacity_commitments].
pub type ListCapacityCommitmentsPager = paginator::blocking::Paginator<
    ListCapacityCommitmentsRequest,
    ListCapacityCommitmentsResponse,
    paginator::blocking::BoxedMethod<
        ListCapacityCommitmentsRequest,
        ListCapacityCommitmentsResponse,
    >,
>;

/// Streams the [CapacityCommitment] items of [list_capacity_commitments][crate::client::ReservationService::list_capacity_commitments].
pub type ListCapacityCommitmentsAsyncPager = paginator::Paginator<
    ListCapacityCommitmentsRequest,
    ListCapacityCommitmentsResponse,
    paginator::BoxedMethod<ListCapacityCommitmentsRequest, ListCapacityCommitmentsResponse>,
>;

/// Iterates over the [Assignment] items of [list_assignments][crate::blocking::ReservationService::list_assignments].
pub type ListAssignmentsPager = paginator::blocking::Paginator<
    ListAssignmentsRequest,
    ListAssignmentsResponse,
    paginator::blocking::BoxedMethod<ListAssignmentsRequest, ListAssignmentsResponse>,
>;

/// Streams the [Assignment] items of [list_assignments][crate::client::ReservationService::list_assignments].
pub type ListAssignmentsAsyncPager = paginator::Paginator<
    ListAssignmentsRequest,
    ListAssignmentsResponse,
    paginator::BoxedMethod<ListAssignmentsRequest, ListAssignmentsResponse>,
>;

/// Iterates over the [Assignment] items of [search_assignments][crate::blocking::ReservationService::search_assignments].
pub type SearchAssignmentsPager = paginator::blocking::Paginator<
    SearchAssignmentsRequest,
    SearchAssignmentsResponse,
    paginator::blocking::BoxedMethod<SearchAssignmentsRequest, SearchAssignmentsResponse>,
>;

/// Streams the [Assignment] items of [search_assignments][crate::client::ReservationService::search_assignments].
pub type SearchAssignmentsAsyncPager = paginator::Paginator<
    SearchAssignmentsRequest,
    SearchAssignmentsResponse,
    paginator::BoxedMethod<SearchAssignmentsRequest, SearchAssignmentsResponse>,
>;
