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

use gax::Result as GaxResult;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::options::RequestOptions;
use google_cloud_bigquery_reservation_v1::model::*;
use google_cloud_bigquery_reservation_v1::stub::ReservationService as Stub;
use reservation_test_utils::pages::{PARENT, names};

mockall::mock! {
    #[derive(Debug)]
    pub ReservationService {}
    impl Stub for ReservationService {
        async fn list_reservations(
            &self,
            req: ListReservationsRequest,
            _options: RequestOptions,
        ) -> GaxResult<ListReservationsResponse>;
        async fn list_capacity_commitments(
            &self,
            req: ListCapacityCommitmentsRequest,
            _options: RequestOptions,
        ) -> GaxResult<ListCapacityCommitmentsResponse>;
        async fn list_assignments(
            &self,
            req: ListAssignmentsRequest,
            _options: RequestOptions,
        ) -> GaxResult<ListAssignmentsResponse>;
        async fn search_assignments(
            &self,
            req: SearchAssignmentsRequest,
            _options: RequestOptions,
        ) -> GaxResult<SearchAssignmentsResponse>;
    }
}

pub fn make_reservations(count: usize, start: usize) -> Vec<Reservation> {
    names(PARENT, "reservations", count, start)
        .into_iter()
        .map(|name| Reservation::new().set_name(name).set_slot_capacity(100))
        .collect()
}

pub fn make_commitments(count: usize, start: usize) -> Vec<CapacityCommitment> {
    names(PARENT, "capacityCommitments", count, start)
        .into_iter()
        .map(|name| {
            CapacityCommitment::new()
                .set_name(name)
                .set_plan(CommitmentPlan::Annual)
                .set_state(CapacityCommitmentState::Active)
        })
        .collect()
}

pub fn make_assignments(parent: &str, count: usize, start: usize) -> Vec<Assignment> {
    names(parent, "assignments", count, start)
        .into_iter()
        .map(|name| {
            Assignment::new()
                .set_name(name)
                .set_assignee("projects/test-project")
                .set_job_type(JobType::Query)
                .set_state(AssignmentState::Active)
        })
        .collect()
}

pub fn unavailable() -> Error {
    Error::service(
        Status::default()
            .set_code(Code::Unavailable)
            .set_message("try again later"),
    )
}
