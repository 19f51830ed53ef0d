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

//! A blocking client for applications without an async runtime.

use crate::Result;
use crate::model::*;
use crate::pagers::*;
use gax::error::Error;
use gax::options::{ClientConfig, RequestOptions};
use gax::paginator::blocking::Paginator;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Implements a blocking client for the BigQuery Reservation API.
///
/// Each RPC runs to completion on a private, single-threaded runtime before
/// the call returns. The pagers returned by this client use the same runtime
/// to fetch subsequent pages.
///
/// Do not use this client from inside an async runtime. Blocking on the
/// private runtime from a task panics.
///
/// # Example
/// ```
/// # use google_cloud_bigquery_reservation_v1::blocking::ReservationService;
/// # use google_cloud_bigquery_reservation_v1::model::*;
/// # use gax::options::RequestOptions;
/// # #[derive(Debug)]
/// # struct Fake;
/// # impl google_cloud_bigquery_reservation_v1::stub::ReservationService for Fake {
/// #     async fn list_reservations(&self, _req: ListReservationsRequest, _options: RequestOptions)
/// #         -> gax::Result<ListReservationsResponse> {
/// #         Ok(ListReservationsResponse::new().set_reservations([Reservation::new().set_name("r1")]))
/// #     }
/// # }
/// let client = ReservationService::from_stub(Fake)?;
/// let request = ListReservationsRequest::new().set_parent("projects/my-project/locations/US");
/// for reservation in client.list_reservations(request, RequestOptions::default())? {
///     println!("{:?}", reservation?);
/// }
/// # gax::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct ReservationService {
    inner: crate::client::ReservationService,
    runtime: Arc<Runtime>,
}

impl ReservationService {
    /// Creates a blocking client wrapping an async client.
    pub fn new(inner: crate::client::ReservationService) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::io)?;
        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Result<Self>
    where
        T: crate::stub::ReservationService + 'static,
    {
        Self::new(crate::client::ReservationService::from_stub(stub))
    }

    /// Creates a new client from the provided stub and configuration.
    pub fn from_stub_with_config<T>(stub: T, config: ClientConfig) -> Result<Self>
    where
        T: crate::stub::ReservationService + 'static,
    {
        let inner = crate::client::ReservationService::from_stub_with_config(stub, config);
        Self::new(inner)
    }

    /// Lists all the reservations for the project in the specified location.
    ///
    /// Sends `request` and returns a pager starting at its response. The
    /// `options` are sent with the first and every subsequent call.
    pub fn list_reservations(
        &self,
        request: ListReservationsRequest,
        options: RequestOptions,
    ) -> Result<ListReservationsPager> {
        let stub = self.inner.stub();
        let first = self
            .runtime
            .block_on(stub.list_reservations(request.clone(), options.clone()))?;
        let runtime = self.runtime.clone();
        let method = move |request: ListReservationsRequest, options: RequestOptions| {
            runtime.block_on(stub.list_reservations(request, options))
        };
        Ok(Paginator::new(Box::new(method), request, first, options))
    }

    /// Lists all the capacity commitments for the admin project.
    pub fn list_capacity_commitments(
        &self,
        request: ListCapacityCommitmentsRequest,
        options: RequestOptions,
    ) -> Result<ListCapacityCommitmentsPager> {
        let stub = self.inner.stub();
        let first = self
            .runtime
            .block_on(stub.list_capacity_commitments(request.clone(), options.clone()))?;
        let runtime = self.runtime.clone();
        let method = move |request: ListCapacityCommitmentsRequest, options: RequestOptions| {
            runtime.block_on(stub.list_capacity_commitments(request, options))
        };
        Ok(Paginator::new(Box::new(method), request, first, options))
    }

    /// Lists assignments.
    pub fn list_assignments(
        &self,
        request: ListAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<ListAssignmentsPager> {
        let stub = self.inner.stub();
        let first = self
            .runtime
            .block_on(stub.list_assignments(request.clone(), options.clone()))?;
        let runtime = self.runtime.clone();
        let method = move |request: ListAssignmentsRequest, options: RequestOptions| {
            runtime.block_on(stub.list_assignments(request, options))
        };
        Ok(Paginator::new(Box::new(method), request, first, options))
    }

    /// Looks up assignments for a specified resource for a particular region.
    pub fn search_assignments(
        &self,
        request: SearchAssignmentsRequest,
        options: RequestOptions,
    ) -> Result<SearchAssignmentsPager> {
        let stub = self.inner.stub();
        let first = self
            .runtime
            .block_on(stub.search_assignments(request.clone(), options.clone()))?;
        let runtime = self.runtime.clone();
        let method = move |request: SearchAssignmentsRequest, options: RequestOptions| {
            runtime.block_on(stub.search_assignments(request, options))
        };
        Ok(Paginator::new(Box::new(method), request, first, options))
    }
}
