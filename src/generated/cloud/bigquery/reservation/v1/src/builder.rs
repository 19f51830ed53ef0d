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

//! Request builders.

pub mod reservation_service {
    use crate::Result;
    use crate::model::*;
    use crate::pagers::*;
    use futures::future::BoxFuture;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use std::sync::Arc;

    type Stub = Arc<dyn crate::stub::dynamic::ReservationService>;

    /// Common implementation for [crate::client::ReservationService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Stub,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ReservationService::list_reservations][crate::client::ReservationService::list_reservations] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_bigquery_reservation_v1::builder::reservation_service::ListReservations;
    /// # use google_cloud_bigquery_reservation_v1::client::ReservationService;
    /// # use gax::options::RequestOptionsBuilder;
    /// async fn sample(client: &ReservationService) -> gax::Result<()> {
    ///     let mut reservations = client
    ///         .list_reservations("projects/my-project/locations/US")
    ///         .with_metadata("x-goog-request-params", "parent=projects/my-project/locations/US")
    ///         .pager()
    ///         .await?;
    ///     while let Some(reservation) = reservations.next().await {
    ///         println!("{:?}", reservation?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListReservations(RequestBuilder<ListReservationsRequest>);

    impl ListReservations {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<ListReservationsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning a single page.
        pub async fn send(self) -> Result<ListReservationsResponse> {
            self.0
                .stub
                .list_reservations(self.0.request, self.0.options)
                .await
        }

        /// Sends the request, returning a pager over all the pages.
        ///
        /// The pager starts with the response to this request. It sends the
        /// same request, with a new page token and the same options, to fetch
        /// each subsequent page.
        pub async fn pager(self) -> Result<ListReservationsAsyncPager> {
            let RequestBuilder {
                stub,
                request,
                options,
            } = self.0;
            let first = stub
                .list_reservations(request.clone(), options.clone())
                .await?;
            let method = move |request: ListReservationsRequest, options: RequestOptions| {
                let stub = stub.clone();
                let fetch: BoxFuture<'static, Result<_>> = Box::pin(async move {
                    stub.list_reservations(request, options).await
                });
                fetch
            };
            Ok(Paginator::new(Box::new(method), request, first, options))
        }

        /// Sets the value of [parent][ListReservationsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][ListReservationsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][ListReservationsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListReservations {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReservationService::list_capacity_commitments][crate::client::ReservationService::list_capacity_commitments] calls.
    #[derive(Clone, Debug)]
    pub struct ListCapacityCommitments(RequestBuilder<ListCapacityCommitmentsRequest>);

    impl ListCapacityCommitments {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<ListCapacityCommitmentsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning a single page.
        pub async fn send(self) -> Result<ListCapacityCommitmentsResponse> {
            self.0
                .stub
                .list_capacity_commitments(self.0.request, self.0.options)
                .await
        }

        /// Sends the request, returning a pager over all the pages.
        pub async fn pager(self) -> Result<ListCapacityCommitmentsAsyncPager> {
            let RequestBuilder {
                stub,
                request,
                options,
            } = self.0;
            let first = stub
                .list_capacity_commitments(request.clone(), options.clone())
                .await?;
            let method = move |request: ListCapacityCommitmentsRequest, options: RequestOptions| {
                let stub = stub.clone();
                let fetch: BoxFuture<'static, Result<_>> = Box::pin(async move {
                    stub.list_capacity_commitments(request, options).await
                });
                fetch
            };
            Ok(Paginator::new(Box::new(method), request, first, options))
        }

        /// Sets the value of [parent][ListCapacityCommitmentsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][ListCapacityCommitmentsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][ListCapacityCommitmentsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListCapacityCommitments {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReservationService::list_assignments][crate::client::ReservationService::list_assignments] calls.
    #[derive(Clone, Debug)]
    pub struct ListAssignments(RequestBuilder<ListAssignmentsRequest>);

    impl ListAssignments {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<ListAssignmentsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning a single page.
        pub async fn send(self) -> Result<ListAssignmentsResponse> {
            self.0
                .stub
                .list_assignments(self.0.request, self.0.options)
                .await
        }

        /// Sends the request, returning a pager over all the pages.
        pub async fn pager(self) -> Result<ListAssignmentsAsyncPager> {
            let RequestBuilder {
                stub,
                request,
                options,
            } = self.0;
            let first = stub
                .list_assignments(request.clone(), options.clone())
                .await?;
            let method = move |request: ListAssignmentsRequest, options: RequestOptions| {
                let stub = stub.clone();
                let fetch: BoxFuture<'static, Result<_>> = Box::pin(async move {
                    stub.list_assignments(request, options).await
                });
                fetch
            };
            Ok(Paginator::new(Box::new(method), request, first, options))
        }

        /// Sets the value of [parent][ListAssignmentsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][ListAssignmentsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][ListAssignmentsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAssignments {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReservationService::search_assignments][crate::client::ReservationService::search_assignments] calls.
    #[derive(Clone, Debug)]
    pub struct SearchAssignments(RequestBuilder<SearchAssignmentsRequest>);

    impl SearchAssignments {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<SearchAssignmentsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning a single page.
        pub async fn send(self) -> Result<SearchAssignmentsResponse> {
            self.0
                .stub
                .search_assignments(self.0.request, self.0.options)
                .await
        }

        /// Sends the request, returning a pager over all the pages.
        pub async fn pager(self) -> Result<SearchAssignmentsAsyncPager> {
            let RequestBuilder {
                stub,
                request,
                options,
            } = self.0;
            let first = stub
                .search_assignments(request.clone(), options.clone())
                .await?;
            let method = move |request: SearchAssignmentsRequest, options: RequestOptions| {
                let stub = stub.clone();
                let fetch: BoxFuture<'static, Result<_>> = Box::pin(async move {
                    stub.search_assignments(request, options).await
                });
                fetch
            };
            Ok(Paginator::new(Box::new(method), request, first, options))
        }

        /// Sets the value of [parent][SearchAssignmentsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [query][SearchAssignmentsRequest::query].
        pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.query = v.into();
            self
        }

        /// Sets the value of [page_size][SearchAssignmentsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][SearchAssignmentsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SearchAssignments {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
