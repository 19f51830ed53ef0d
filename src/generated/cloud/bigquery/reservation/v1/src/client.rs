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

//! Contains the ReservationService client and related types.

use gax::options::ClientConfig;
use std::sync::Arc;

/// Implements a client for the BigQuery Reservation API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_bigquery_reservation_v1::client::ReservationService;
/// # use google_cloud_bigquery_reservation_v1::model::*;
/// # #[derive(Debug)]
/// # struct Fake;
/// # impl google_cloud_bigquery_reservation_v1::stub::ReservationService for Fake {
/// #     async fn list_reservations(&self, _req: ListReservationsRequest, _options: gax::options::RequestOptions)
/// #         -> gax::Result<ListReservationsResponse> {
/// #         Ok(ListReservationsResponse::new().set_reservations([Reservation::new().set_name("r1")]))
/// #     }
/// # }
/// let client = ReservationService::from_stub(Fake);
/// let mut reservations = client
///     .list_reservations("projects/my-project/locations/US")
///     .pager()
///     .await?;
/// while let Some(reservation) = reservations.next().await {
///     let reservation = reservation?;
///     println!("{reservation:?}");
/// }
/// # gax::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// This API allows users to manage their BigQuery reservations.
///
/// A reservation provides computational resource guarantees, in the form of
/// [slots](https://cloud.google.com/bigquery/docs/slots), to users. A slot is
/// a unit of computational power in BigQuery, and serves as the basic unit of
/// parallelism. In a scan of a multi-partitioned table, a single slot operates
/// on a single partition of the table. A reservation resource exists as a
/// child resource of the admin project and location, e.g.:
/// `projects/myproject/locations/US/reservations/reservationName`.
///
/// A capacity commitment is a way to purchase compute capacity for BigQuery
/// jobs (in the form of slots) with some committed period of usage. A capacity
/// commitment resource exists as a child resource of the admin project and
/// location, e.g.:
/// `projects/myproject/locations/US/capacityCommitments/id`.
///
/// # Pooling and Cloning
///
/// `ReservationService` holds its stub in an [Arc], it is cheap to clone and
/// you do not need to wrap it in an [Rc](std::rc::Rc) or [Arc] to reuse it.
#[derive(Clone, Debug)]
pub struct ReservationService {
    inner: Arc<dyn super::stub::dynamic::ReservationService>,
}

impl ReservationService {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ReservationService + 'static,
    {
        Self::from_stub_with_config(stub, ClientConfig::default())
    }

    /// Creates a new client from the provided stub and configuration.
    ///
    /// If the configuration (or the environment) enables tracing, each RPC is
    /// recorded as a `DEBUG` span.
    pub fn from_stub_with_config<T>(stub: T, config: ClientConfig) -> Self
    where
        T: super::stub::ReservationService + 'static,
    {
        let inner: Arc<dyn super::stub::dynamic::ReservationService> = if config.tracing_enabled() {
            Arc::new(crate::tracing::ReservationService::new(stub))
        } else {
            Arc::new(stub)
        };
        Self { inner }
    }

    pub(crate) fn stub(&self) -> Arc<dyn super::stub::dynamic::ReservationService> {
        self.inner.clone()
    }

    /// Lists all the reservations for the project in the specified location.
    ///
    /// # Parameters
    /// * `parent` - the parent resource name containing project and location,
    ///   e.g. `projects/myproject/locations/US`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::client::ReservationService;
    /// async fn example(client: &ReservationService) -> gax::Result<()> {
    ///     let mut reservations = client
    ///         .list_reservations("projects/my-project/locations/US")
    ///         .set_page_size(100)
    ///         .pager()
    ///         .await?;
    ///     while let Some(reservation) = reservations.next().await {
    ///         println!("{:?}", reservation?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_reservations<T: Into<String>>(
        &self,
        parent: T,
    ) -> super::builder::reservation_service::ListReservations {
        super::builder::reservation_service::ListReservations::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Lists all the capacity commitments for the admin project.
    ///
    /// # Parameters
    /// * `parent` - the parent resource name, e.g. `projects/myproject/locations/US`.
    pub fn list_capacity_commitments<T: Into<String>>(
        &self,
        parent: T,
    ) -> super::builder::reservation_service::ListCapacityCommitments {
        super::builder::reservation_service::ListCapacityCommitments::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Lists assignments.
    ///
    /// Only explicitly created assignments will be returned. Use `-` as the
    /// reservation id to list the assignments of all the reservations in a
    /// location.
    ///
    /// # Parameters
    /// * `parent` - the parent reservation, e.g.
    ///   `projects/myproject/locations/US/reservations/team1-prod`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::client::ReservationService;
    /// async fn example(client: &ReservationService) -> gax::Result<()> {
    ///     let mut paginator = client
    ///         .list_assignments("projects/my-project/locations/US/reservations/-")
    ///         .pager()
    ///         .await?;
    ///     let mut pages = paginator.pages();
    ///     while let Some(page) = pages.next().await {
    ///         let page = page?;
    ///         println!("{} assignments", page.assignments.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_assignments<T: Into<String>>(
        &self,
        parent: T,
    ) -> super::builder::reservation_service::ListAssignments {
        super::builder::reservation_service::ListAssignments::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Looks up assignments for a specified resource for a particular region.
    ///
    /// If the request is about a project, its assignment is returned if
    /// present. Otherwise the assignments of its folder or organization are
    /// returned.
    ///
    /// # Parameters
    /// * `parent` - the admin project and location, e.g.
    ///   `projects/myproject/locations/US`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::client::ReservationService;
    /// async fn example(client: &ReservationService) -> gax::Result<()> {
    ///     let mut assignments = client
    ///         .search_assignments("projects/my-project/locations/US")
    ///         .set_query("assignee=projects/my-project")
    ///         .pager()
    ///         .await?;
    ///     while let Some(assignment) = assignments.next().await {
    ///         println!("{:?}", assignment?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn search_assignments<T: Into<String>>(
        &self,
        parent: T,
    ) -> super::builder::reservation_service::SearchAssignments {
        super::builder::reservation_service::SearchAssignments::new(self.inner.clone())
            .set_parent(parent)
    }
}
