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

//! A blocking version of the paginator.
//!
//! Each subsequent page is fetched with a blocking call on the calling thread.

use super::{PageableRequest, PageableResponse, State, Step};
use crate::options::RequestOptions;

/// The list RPC used by a blocking [Paginator] to fetch subsequent pages.
///
/// This is implemented by any `FnMut(Req, RequestOptions) -> Result<Resp, E>`.
pub trait Method<Req, Resp> {
    /// The error returned by the RPC.
    type Error;

    /// Fetches the page identified by `request`, blocking until it arrives.
    fn call(
        &mut self,
        request: Req,
        options: RequestOptions,
    ) -> std::result::Result<Resp, Self::Error>;
}

impl<F, Req, Resp, E> Method<Req, Resp> for F
where
    F: FnMut(Req, RequestOptions) -> std::result::Result<Resp, E>,
{
    type Error = E;

    fn call(&mut self, request: Req, options: RequestOptions) -> std::result::Result<Resp, E> {
        self(request, options)
    }
}

/// A type-erased, `Send` blocking list RPC.
pub type BoxedMethod<Req, Resp> = Box<dyn FnMut(Req, RequestOptions) -> crate::Result<Resp> + Send>;

/// An adapter that converts a list RPC into an [Iterator] of items, making
/// blocking calls to fetch subsequent pages as needed.
///
/// This is the blocking counterpart of [super::Paginator], with the same
/// guarantees: no prefetching, pages and items in order, empty pages
/// skipped, only the most recent response retained, errors returned
/// unchanged and ending the iteration.
///
/// The paginator is not synchronized. Every call that advances it takes
/// `&mut self`, use one paginator from one thread at a time.
///
/// # Example
/// ```
/// # use reservation_gax::paginator::{PageableRequest, PageableResponse};
/// # use reservation_gax::paginator::blocking::Paginator;
/// # use reservation_gax::options::RequestOptions;
/// # #[derive(Clone, Debug, Default)]
/// # struct Request { page_token: String }
/// # impl PageableRequest for Request {
/// #     fn set_page_token(&mut self, token: String) { self.page_token = token; }
/// # }
/// # #[derive(Clone, Debug, Default)]
/// # struct Response { items: Vec<String>, next_page_token: String }
/// # impl PageableResponse for Response {
/// #     type PageItem = String;
/// #     fn items(&self) -> &[String] { &self.items }
/// #     fn next_page_token(&self) -> String { self.next_page_token.clone() }
/// # }
/// let first = Response { items: vec!["a".into(), "b".into()], next_page_token: "t1".into() };
/// let list = |request: Request, _options: RequestOptions| {
///     assert_eq!(request.page_token, "t1");
///     Ok::<_, std::io::Error>(Response { items: vec!["c".into()], ..Default::default() })
/// };
/// let paginator = Paginator::new(list, Request::default(), first, RequestOptions::default());
/// let items = paginator.collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(items, ["a", "b", "c"]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Paginator<Req, Resp, M>
where
    Resp: PageableResponse,
{
    method: M,
    request: Req,
    response: Resp,
    options: RequestOptions,
    state: State,
    // The next item to return from `response`, `None` until it is read as items.
    cursor: Option<usize>,
}

impl<Req, Resp, M> Paginator<Req, Resp, M>
where
    Resp: PageableResponse,
{
    /// Creates a paginator from the initial response.
    ///
    /// See [super::Paginator::new] for a description of the parameters.
    pub fn new(method: M, request: Req, response: Resp, options: RequestOptions) -> Self {
        Self {
            method,
            request,
            response,
            options,
            state: State::Unread,
            cursor: None,
        }
    }

    /// The most recently fetched response.
    ///
    /// Before any subsequent page is fetched this is the initial response.
    pub fn response(&self) -> &Resp {
        &self.response
    }

    /// The `next_page_token` in the most recently fetched response.
    pub fn next_page_token(&self) -> String {
        self.response.next_page_token()
    }

    /// The request sent to fetch the most recent page.
    pub fn request(&self) -> &Req {
        &self.request
    }

    /// The options sent with each request.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl<Req, Resp, M> Paginator<Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
{
    /// Returns an iterator over the full responses.
    ///
    /// The first element is the initial response. Subsequent elements are
    /// fetched on demand, each `next()` call may block.
    pub fn pages(&mut self) -> Pages<'_, Req, Resp, M> {
        Pages { paginator: self }
    }

    /// Returns an iterator over the items in each page.
    ///
    /// The paginator is also an iterator over the same items, this is useful
    /// to iterate without giving up ownership of the paginator.
    pub fn items(&mut self) -> Items<'_, Req, Resp, M> {
        Items { paginator: self }
    }

    /// Moves to the next page, fetching it if needed.
    ///
    /// On `Some(Ok(()))` the current response is a page not returned before.
    fn advance(&mut self) -> Option<std::result::Result<(), M::Error>> {
        match self.state.step(&self.response) {
            Step::Emit => Some(Ok(())),
            Step::Finish => None,
            Step::Fetch(token) => {
                tracing::debug!(page_token = %token, "fetching next page");
                self.request.set_page_token(token);
                match self.method.call(self.request.clone(), self.options.clone()) {
                    Ok(response) => {
                        self.response = response;
                        Some(Ok(()))
                    }
                    Err(e) => {
                        self.state.failed();
                        Some(Err(e))
                    }
                }
            }
        }
    }

    fn next_page(&mut self) -> Option<std::result::Result<Resp, M::Error>> {
        self.cursor = None;
        let advanced = self.advance()?;
        Some(advanced.map(|()| self.response.clone()))
    }

    fn next_item(&mut self) -> Option<std::result::Result<Resp::PageItem, M::Error>> {
        loop {
            let position = self.cursor;
            if let Some(item) = position.and_then(|i| self.response.items().get(i)) {
                let item = item.clone();
                self.cursor = position.map(|i| i + 1);
                return Some(Ok(item));
            }
            match self.advance()? {
                Err(e) => return Some(Err(e)),
                Ok(()) => self.cursor = Some(0),
            }
        }
    }
}

impl<Req, Resp, M> Iterator for Paginator<Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
{
    type Item = std::result::Result<Resp::PageItem, M::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item()
    }
}

impl<Req, Resp, M> std::fmt::Debug for Paginator<Req, Resp, M>
where
    Resp: PageableResponse + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Paginator<{:?}>", self.response)
    }
}

/// An [Iterator] over the pages of a blocking [Paginator].
///
/// Returned by [Paginator::pages].
pub struct Pages<'a, Req, Resp, M>
where
    Resp: PageableResponse,
{
    paginator: &'a mut Paginator<Req, Resp, M>,
}

impl<Req, Resp, M> Iterator for Pages<'_, Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
{
    type Item = std::result::Result<Resp, M::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.paginator.next_page()
    }
}

/// An [Iterator] over the items of a blocking [Paginator].
///
/// Returned by [Paginator::items].
pub struct Items<'a, Req, Resp, M>
where
    Resp: PageableResponse,
{
    paginator: &'a mut Paginator<Req, Resp, M>,
}

impl<Req, Resp, M> Iterator for Items<'_, Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
{
    type Item = std::result::Result<Resp::PageItem, M::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.paginator.next_item()
    }
}
