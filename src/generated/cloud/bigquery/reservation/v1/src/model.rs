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

//! The messages and enums used by the BigQuery Reservation list RPCs.

use gax::paginator::{PageableRequest, PageableResponse};

/// A reservation is a mechanism used to guarantee slots to users.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Reservation {
    /// The resource name of the reservation, e.g.,
    /// `projects/*/locations/*/reservations/team1-prod`.
    pub name: String,

    /// Baseline slots available to this reservation.
    pub slot_capacity: i64,

    /// If false, any query or pipeline job using this reservation will use
    /// idle slots from other reservations within the same admin project.
    pub ignore_idle_slots: bool,

    /// Job concurrency target, 0 lets the service choose.
    pub concurrency: i64,

    /// Applicable only for reservations located within one of the BigQuery
    /// multi-regions.
    pub multi_region_auxiliary: bool,

    /// Edition of the reservation.
    pub edition: Edition,
}

impl Reservation {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Reservation::name].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::model::Reservation;
    /// let x = Reservation::new().set_name("projects/p/locations/us/reservations/r");
    /// assert_eq!(x.name, "projects/p/locations/us/reservations/r");
    /// ```
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [slot_capacity][Reservation::slot_capacity].
    pub fn set_slot_capacity<T: Into<i64>>(mut self, v: T) -> Self {
        self.slot_capacity = v.into();
        self
    }

    /// Sets the value of [ignore_idle_slots][Reservation::ignore_idle_slots].
    pub fn set_ignore_idle_slots<T: Into<bool>>(mut self, v: T) -> Self {
        self.ignore_idle_slots = v.into();
        self
    }

    /// Sets the value of [concurrency][Reservation::concurrency].
    pub fn set_concurrency<T: Into<i64>>(mut self, v: T) -> Self {
        self.concurrency = v.into();
        self
    }

    /// Sets the value of [multi_region_auxiliary][Reservation::multi_region_auxiliary].
    pub fn set_multi_region_auxiliary<T: Into<bool>>(mut self, v: T) -> Self {
        self.multi_region_auxiliary = v.into();
        self
    }

    /// Sets the value of [edition][Reservation::edition].
    pub fn set_edition<T: Into<Edition>>(mut self, v: T) -> Self {
        self.edition = v.into();
        self
    }
}

/// Capacity commitment is a way to purchase compute capacity for BigQuery
/// jobs, in the form of slots, with some committed period of usage.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CapacityCommitment {
    /// The resource name of the capacity commitment, e.g.,
    /// `projects/myproject/locations/US/capacityCommitments/123`.
    pub name: String,

    /// Number of slots in this commitment.
    pub slot_count: i64,

    /// Capacity commitment commitment plan.
    pub plan: CommitmentPlan,

    /// State of the commitment.
    pub state: CapacityCommitmentState,

    /// The plan this capacity commitment is converted to after the end of
    /// the commitment.
    pub renewal_plan: CommitmentPlan,

    /// Applicable only for commitments located within one of the BigQuery
    /// multi-regions.
    pub multi_region_auxiliary: bool,

    /// Edition of the capacity commitment.
    pub edition: Edition,
}

impl CapacityCommitment {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CapacityCommitment::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [slot_count][CapacityCommitment::slot_count].
    pub fn set_slot_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.slot_count = v.into();
        self
    }

    /// Sets the value of [plan][CapacityCommitment::plan].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::model::{CapacityCommitment, CommitmentPlan};
    /// let x = CapacityCommitment::new().set_plan(CommitmentPlan::Annual);
    /// assert_eq!(x.plan.name(), Some("ANNUAL"));
    /// ```
    pub fn set_plan<T: Into<CommitmentPlan>>(mut self, v: T) -> Self {
        self.plan = v.into();
        self
    }

    /// Sets the value of [state][CapacityCommitment::state].
    pub fn set_state<T: Into<CapacityCommitmentState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [renewal_plan][CapacityCommitment::renewal_plan].
    pub fn set_renewal_plan<T: Into<CommitmentPlan>>(mut self, v: T) -> Self {
        self.renewal_plan = v.into();
        self
    }

    /// Sets the value of [multi_region_auxiliary][CapacityCommitment::multi_region_auxiliary].
    pub fn set_multi_region_auxiliary<T: Into<bool>>(mut self, v: T) -> Self {
        self.multi_region_auxiliary = v.into();
        self
    }

    /// Sets the value of [edition][CapacityCommitment::edition].
    pub fn set_edition<T: Into<Edition>>(mut self, v: T) -> Self {
        self.edition = v.into();
        self
    }
}

/// An assignment allows a project, folder, or organization to submit jobs
/// using slots from a reservation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Assignment {
    /// Name of the resource, e.g.,
    /// `projects/myproject/locations/US/reservations/team1-prod/assignments/123`.
    pub name: String,

    /// The resource which will use the reservation, e.g.,
    /// `projects/myproject`, `folders/123`, or `organizations/456`.
    pub assignee: String,

    /// Which type of jobs will use the reservation.
    pub job_type: JobType,

    /// State of the assignment.
    pub state: AssignmentState,
}

impl Assignment {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Assignment::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [assignee][Assignment::assignee].
    pub fn set_assignee<T: Into<String>>(mut self, v: T) -> Self {
        self.assignee = v.into();
        self
    }

    /// Sets the value of [job_type][Assignment::job_type].
    pub fn set_job_type<T: Into<JobType>>(mut self, v: T) -> Self {
        self.job_type = v.into();
        self
    }

    /// Sets the value of [state][Assignment::state].
    pub fn set_state<T: Into<AssignmentState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }
}

/// The request for [ReservationService::list_reservations].
///
/// [ReservationService::list_reservations]: crate::client::ReservationService::list_reservations
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListReservationsRequest {
    /// The parent resource name containing project and location, e.g.:
    /// `projects/myproject/locations/US`
    pub parent: String,

    /// The maximum number of items to return per page.
    pub page_size: i32,

    /// The next_page_token value returned from a previous List request, if any.
    pub page_token: String,
}

impl ListReservationsRequest {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListReservationsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListReservationsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListReservationsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl PageableRequest for ListReservationsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// The response for [ReservationService::list_reservations].
///
/// [ReservationService::list_reservations]: crate::client::ReservationService::list_reservations
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListReservationsResponse {
    /// List of reservations visible to the user.
    pub reservations: Vec<Reservation>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl ListReservationsResponse {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [reservations][ListReservationsResponse::reservations].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::model::{ListReservationsResponse, Reservation};
    /// let x = ListReservationsResponse::new().set_reservations([
    ///     Reservation::new().set_name("projects/p/locations/us/reservations/r1"),
    ///     Reservation::new().set_name("projects/p/locations/us/reservations/r2"),
    /// ]);
    /// assert_eq!(x.reservations.len(), 2);
    /// ```
    pub fn set_reservations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Reservation>,
    {
        self.reservations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListReservationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListReservationsResponse {
    type PageItem = Reservation;

    fn items(&self) -> &[Self::PageItem] {
        &self.reservations
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The request for [ReservationService::list_capacity_commitments].
///
/// [ReservationService::list_capacity_commitments]: crate::client::ReservationService::list_capacity_commitments
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListCapacityCommitmentsRequest {
    /// Resource name of the parent reservation, e.g.,
    /// `projects/myproject/locations/US`
    pub parent: String,

    /// The maximum number of items to return.
    pub page_size: i32,

    /// The next_page_token value returned from a previous List request, if any.
    pub page_token: String,
}

impl ListCapacityCommitmentsRequest {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListCapacityCommitmentsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListCapacityCommitmentsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListCapacityCommitmentsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl PageableRequest for ListCapacityCommitmentsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// The response for [ReservationService::list_capacity_commitments].
///
/// [ReservationService::list_capacity_commitments]: crate::client::ReservationService::list_capacity_commitments
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListCapacityCommitmentsResponse {
    /// List of capacity commitments visible to the user.
    pub capacity_commitments: Vec<CapacityCommitment>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl ListCapacityCommitmentsResponse {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [capacity_commitments][ListCapacityCommitmentsResponse::capacity_commitments].
    pub fn set_capacity_commitments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CapacityCommitment>,
    {
        self.capacity_commitments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListCapacityCommitmentsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListCapacityCommitmentsResponse {
    type PageItem = CapacityCommitment;

    fn items(&self) -> &[Self::PageItem] {
        &self.capacity_commitments
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The request for [ReservationService::list_assignments].
///
/// [ReservationService::list_assignments]: crate::client::ReservationService::list_assignments
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAssignmentsRequest {
    /// The parent resource name e.g.:
    ///
    /// `projects/myproject/locations/US/reservations/team1-prod`
    ///
    /// Or:
    ///
    /// `projects/myproject/locations/US/reservations/-`
    pub parent: String,

    /// The maximum number of items to return per page.
    pub page_size: i32,

    /// The next_page_token value returned from a previous List request, if any.
    pub page_token: String,
}

impl ListAssignmentsRequest {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListAssignmentsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListAssignmentsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListAssignmentsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl PageableRequest for ListAssignmentsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// The response for [ReservationService::list_assignments].
///
/// [ReservationService::list_assignments]: crate::client::ReservationService::list_assignments
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAssignmentsResponse {
    /// List of assignments visible to the user.
    pub assignments: Vec<Assignment>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl ListAssignmentsResponse {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [assignments][ListAssignmentsResponse::assignments].
    pub fn set_assignments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Assignment>,
    {
        self.assignments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListAssignmentsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListAssignmentsResponse {
    type PageItem = Assignment;

    fn items(&self) -> &[Self::PageItem] {
        &self.assignments
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The request for [ReservationService::search_assignments].
///
/// [ReservationService::search_assignments]: crate::client::ReservationService::search_assignments
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SearchAssignmentsRequest {
    /// The resource name of the admin project (containing project and
    /// location), e.g.: `projects/myproject/locations/US`.
    pub parent: String,

    /// Please specify resource name as assignee in the query.
    ///
    /// Examples:
    ///
    /// * `assignee=projects/myproject`
    /// * `assignee=folders/123`
    /// * `assignee=organizations/456`
    pub query: String,

    /// The maximum number of items to return per page.
    pub page_size: i32,

    /// The next_page_token value returned from a previous List request, if any.
    pub page_token: String,
}

impl SearchAssignmentsRequest {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][SearchAssignmentsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [query][SearchAssignmentsRequest::query].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::model::SearchAssignmentsRequest;
    /// let x = SearchAssignmentsRequest::new().set_query("assignee=projects/myproject");
    /// assert_eq!(x.query, "assignee=projects/myproject");
    /// ```
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = v.into();
        self
    }

    /// Sets the value of [page_size][SearchAssignmentsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][SearchAssignmentsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl PageableRequest for SearchAssignmentsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// The response for [ReservationService::search_assignments].
///
/// [ReservationService::search_assignments]: crate::client::ReservationService::search_assignments
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SearchAssignmentsResponse {
    /// List of assignments visible to the user.
    pub assignments: Vec<Assignment>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl SearchAssignmentsResponse {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [assignments][SearchAssignmentsResponse::assignments].
    pub fn set_assignments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Assignment>,
    {
        self.assignments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][SearchAssignmentsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for SearchAssignmentsResponse {
    type PageItem = Assignment;

    fn items(&self) -> &[Self::PageItem] {
        &self.assignments
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The type of editions.
///
/// Different features and behaviors are provided to different editions.
/// Capacity commitments and reservations are linked to editions.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values over time. Values unknown to this version of the library are
/// preserved in [Edition::UnknownValue].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Edition {
    /// Default value, which will be treated as ENTERPRISE.
    #[default]
    Unspecified,
    /// Standard edition.
    Standard,
    /// Enterprise edition.
    Enterprise,
    /// Enterprise plus edition.
    EnterprisePlus,
    /// A value not known to this version of the library.
    UnknownValue(i32),
}

impl Edition {
    /// Gets the numeric value of the enum.
    pub fn value(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Standard => 1,
            Self::Enterprise => 2,
            Self::EnterprisePlus => 3,
            Self::UnknownValue(v) => *v,
        }
    }

    /// Gets the enum value name, `None` for unknown values.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unspecified => Some("EDITION_UNSPECIFIED"),
            Self::Standard => Some("STANDARD"),
            Self::Enterprise => Some("ENTERPRISE"),
            Self::EnterprisePlus => Some("ENTERPRISE_PLUS"),
            Self::UnknownValue(_) => None,
        }
    }
}

impl std::convert::From<i32> for Edition {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Standard,
            2 => Self::Enterprise,
            3 => Self::EnterprisePlus,
            _ => Self::UnknownValue(value),
        }
    }
}

/// Commitment plan defines the current committed period.
///
/// Capacity commitment cannot be deleted during its committed period.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum CommitmentPlan {
    /// Invalid plan value. Requests with this value will be rejected.
    #[default]
    Unspecified,
    /// Flex commitments have committed period of 1 minute after becoming
    /// ACTIVE.
    Flex,
    /// Same as FLEX, should only be used if flat-rate commitments are still
    /// available.
    FlexFlatRate,
    /// Trial commitments have a committed period of 182 days after becoming
    /// ACTIVE.
    Trial,
    /// Monthly commitments have a committed period of 30 days after becoming
    /// ACTIVE.
    Monthly,
    /// Same as MONTHLY, should only be used if flat-rate commitments are
    /// still available.
    MonthlyFlatRate,
    /// Annual commitments have a committed period of 365 days after becoming
    /// ACTIVE.
    Annual,
    /// Same as ANNUAL, should only be used if flat-rate commitments are still
    /// available.
    AnnualFlatRate,
    /// 3-year commitments have a committed period of 1095 days after becoming
    /// ACTIVE.
    ThreeYear,
    /// Should only be used for `renewal_plan`, the commitment is deleted
    /// after its end.
    None,
    /// A value not known to this version of the library.
    UnknownValue(i32),
}

impl CommitmentPlan {
    /// Gets the numeric value of the enum.
    pub fn value(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Flex => 3,
            Self::FlexFlatRate => 7,
            Self::Trial => 5,
            Self::Monthly => 2,
            Self::MonthlyFlatRate => 8,
            Self::Annual => 4,
            Self::AnnualFlatRate => 9,
            Self::ThreeYear => 10,
            Self::None => 6,
            Self::UnknownValue(v) => *v,
        }
    }

    /// Gets the enum value name, `None` for unknown values.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unspecified => Some("COMMITMENT_PLAN_UNSPECIFIED"),
            Self::Flex => Some("FLEX"),
            Self::FlexFlatRate => Some("FLEX_FLAT_RATE"),
            Self::Trial => Some("TRIAL"),
            Self::Monthly => Some("MONTHLY"),
            Self::MonthlyFlatRate => Some("MONTHLY_FLAT_RATE"),
            Self::Annual => Some("ANNUAL"),
            Self::AnnualFlatRate => Some("ANNUAL_FLAT_RATE"),
            Self::ThreeYear => Some("THREE_YEAR"),
            Self::None => Some("NONE"),
            Self::UnknownValue(_) => Option::None,
        }
    }
}

impl std::convert::From<i32> for CommitmentPlan {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            2 => Self::Monthly,
            3 => Self::Flex,
            4 => Self::Annual,
            5 => Self::Trial,
            6 => Self::None,
            7 => Self::FlexFlatRate,
            8 => Self::MonthlyFlatRate,
            9 => Self::AnnualFlatRate,
            10 => Self::ThreeYear,
            _ => Self::UnknownValue(value),
        }
    }
}

/// Capacity commitment can either become ACTIVE right away or transition
/// from PENDING to ACTIVE or FAILED.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum CapacityCommitmentState {
    /// Invalid state value.
    #[default]
    Unspecified,
    /// Capacity commitment is pending provisioning.
    Pending,
    /// Once slots are provisioned, capacity commitment becomes active.
    Active,
    /// Capacity commitment is failed to be activated by the backend.
    Failed,
    /// A value not known to this version of the library.
    UnknownValue(i32),
}

impl CapacityCommitmentState {
    /// Gets the numeric value of the enum.
    pub fn value(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Pending => 1,
            Self::Active => 2,
            Self::Failed => 3,
            Self::UnknownValue(v) => *v,
        }
    }

    /// Gets the enum value name, `None` for unknown values.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unspecified => Some("STATE_UNSPECIFIED"),
            Self::Pending => Some("PENDING"),
            Self::Active => Some("ACTIVE"),
            Self::Failed => Some("FAILED"),
            Self::UnknownValue(_) => None,
        }
    }
}

impl std::convert::From<i32> for CapacityCommitmentState {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Pending,
            2 => Self::Active,
            3 => Self::Failed,
            _ => Self::UnknownValue(value),
        }
    }
}

/// Types of job, which could be specified when using the reservation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum JobType {
    /// Invalid type. Requests with this value will be rejected.
    #[default]
    Unspecified,
    /// Pipeline (load/export) jobs from the project will use the reservation.
    Pipeline,
    /// Query jobs from the project will use the reservation.
    Query,
    /// BigQuery ML jobs that use services external to BigQuery for model
    /// training.
    MlExternal,
    /// Background jobs that BigQuery runs for the customers in the
    /// background.
    Background,
    /// Continuous SQL jobs will use this reservation.
    Continuous,
    /// A value not known to this version of the library.
    UnknownValue(i32),
}

impl JobType {
    /// Gets the numeric value of the enum.
    pub fn value(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Pipeline => 1,
            Self::Query => 2,
            Self::MlExternal => 3,
            Self::Background => 4,
            Self::Continuous => 6,
            Self::UnknownValue(v) => *v,
        }
    }

    /// Gets the enum value name, `None` for unknown values.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unspecified => Some("JOB_TYPE_UNSPECIFIED"),
            Self::Pipeline => Some("PIPELINE"),
            Self::Query => Some("QUERY"),
            Self::MlExternal => Some("ML_EXTERNAL"),
            Self::Background => Some("BACKGROUND"),
            Self::Continuous => Some("CONTINUOUS"),
            Self::UnknownValue(_) => None,
        }
    }
}

impl std::convert::From<i32> for JobType {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Pipeline,
            2 => Self::Query,
            3 => Self::MlExternal,
            4 => Self::Background,
            6 => Self::Continuous,
            _ => Self::UnknownValue(value),
        }
    }
}

/// Assignment will remain in PENDING state if no active capacity commitment
/// is present. It will become ACTIVE when some capacity commitment becomes
/// active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum AssignmentState {
    /// Invalid state value.
    #[default]
    Unspecified,
    /// Queries from assignee will be executed as on-demand, if related
    /// assignment is pending.
    Pending,
    /// Assignment is ready.
    Active,
    /// A value not known to this version of the library.
    UnknownValue(i32),
}

impl AssignmentState {
    /// Gets the numeric value of the enum.
    pub fn value(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Pending => 1,
            Self::Active => 2,
            Self::UnknownValue(v) => *v,
        }
    }

    /// Gets the enum value name, `None` for unknown values.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unspecified => Some("STATE_UNSPECIFIED"),
            Self::Pending => Some("PENDING"),
            Self::Active => Some("ACTIVE"),
            Self::UnknownValue(_) => None,
        }
    }
}

impl std::convert::From<i32> for AssignmentState {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Pending,
            2 => Self::Active,
            _ => Self::UnknownValue(value),
        }
    }
}
