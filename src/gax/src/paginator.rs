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

//! Adapters for list RPCs as defined by [AIP-158].
//!
//! A list RPC returns one page of results and a `next_page_token`. An empty
//! token marks the last page. The adapters in this module start from the
//! first response, and transparently call the RPC again, with the token from
//! the previous page, whenever the application asks for more data.
//!
//! [Paginator] fetches the pages asynchronously. It is a [futures::Stream] of
//! items, and [Paginator::pages] returns a stream of the full responses.
//! [blocking::Paginator] offers the same operations as an [Iterator], making
//! blocking calls to fetch each page.
//!
//! [AIP-158]: https://google.aip.dev/158

use crate::options::RequestOptions;
use futures::Stream;
use futures::future::BoxFuture;
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

pub mod blocking;

/// Describes a request that can be sent again to fetch a subsequent page.
pub trait PageableRequest {
    /// Sets the token identifying the page to fetch.
    fn set_page_token(&mut self, token: String);
}

/// Describes a response that holds one page of a list RPC.
pub trait PageableResponse {
    /// The type of item contained in each page.
    type PageItem: Clone + Send;

    /// The items in this page, in order.
    fn items(&self) -> &[Self::PageItem];

    /// The token to fetch the next page. Empty on the last page.
    fn next_page_token(&self) -> String;
}

/// The list RPC used by a [Paginator] to fetch subsequent pages.
///
/// This is implemented by any `Fn(Req, RequestOptions) -> impl Future` with
/// the right output, typically a closure calling a method in the service stub.
pub trait Method<Req, Resp> {
    /// The error returned by the RPC.
    type Error;
    /// The future returned by the RPC.
    type Future: Future<Output = std::result::Result<Resp, Self::Error>>;

    /// Starts a call to fetch the page identified by `request`.
    fn call(&self, request: Req, options: RequestOptions) -> Self::Future;
}

impl<F, Fut, Req, Resp, E> Method<Req, Resp> for F
where
    F: Fn(Req, RequestOptions) -> Fut,
    Fut: Future<Output = std::result::Result<Resp, E>>,
{
    type Error = E;
    type Future = Fut;

    fn call(&self, request: Req, options: RequestOptions) -> Self::Future {
        self(request, options)
    }
}

/// A type-erased, `Send` list RPC.
///
/// The paginators returned by the client library use this type, so their
/// types can be named without closures.
pub type BoxedMethod<Req, Resp> =
    Box<dyn Fn(Req, RequestOptions) -> BoxFuture<'static, crate::Result<Resp>> + Send + Sync>;

/// Tracks the position of a paginator in the sequence of pages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum State {
    /// The current response has not been returned to the application.
    Unread,
    /// The current response was returned, its token decides what is next.
    Read,
    /// The last page was returned, or fetching a page failed.
    Done,
}

/// The next action to produce a page.
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    /// Return the current response.
    Emit,
    /// Fetch the page identified by this token.
    Fetch(String),
    /// There are no more pages.
    Finish,
}

impl State {
    /// Decides the next step and updates the state to reflect it.
    ///
    /// On [Step::Fetch] the state stays [State::Read], the caller must call
    /// [State::failed] if the fetch does not complete successfully.
    pub(crate) fn step<R: PageableResponse>(&mut self, response: &R) -> Step {
        match self {
            State::Unread => {
                *self = State::Read;
                Step::Emit
            }
            State::Done => Step::Finish,
            State::Read => {
                let token = response.next_page_token();
                if token.is_empty() {
                    tracing::debug!("no more pages");
                    *self = State::Done;
                    return Step::Finish;
                }
                Step::Fetch(token)
            }
        }
    }

    pub(crate) fn failed(&mut self) {
        *self = State::Done;
    }
}

/// An adapter that converts a list RPC into a [Stream] of items, fetching
/// subsequent pages asynchronously as needed.
///
/// The paginator starts from the response to an initial request. It returns
/// the items in that response, then uses the `next_page_token` to fetch the
/// next page, and so on, until a page has an empty `next_page_token`.
///
/// * At most one request is in flight, and only while the application is
///   waiting for the next item or page. There is no prefetching.
/// * Pages are returned in the order they are fetched, items in the order
///   they appear in each page. Empty pages are skipped.
/// * Only the most recent response is retained, see [response()][Self::response].
/// * If fetching a page fails the error is returned unchanged, and the
///   paginator ends. Retrying is up to the RPC or the application.
/// * Items already fetched are returned without suspending. A consumer that
///   stops at a page boundary never triggers the next fetch. Dropping the
///   paginator cancels a fetch in progress. Dropping only the future returned
///   by `next()` keeps the fetch in the paginator, the next call resumes it.
///
/// The sequence cannot be restarted: pages and items are returned exactly
/// once. Use [pages()][Self::pages] or [items()][Self::items] to iterate,
/// but do not interleave them. Returning a page discards the position within
/// the page being read as items.
///
/// [pages()][Self::pages], [items()][Self::items], and [next()][Self::next]
/// require the paginator to be [Unpin]. That is the case when the RPC returns
/// a boxed future, as the paginators returned by the client library do.
/// Otherwise pin the paginator first, e.g. with [Box::pin], and use it as a
/// [Stream] of items.
///
/// # Example
/// ```
/// # use reservation_gax::paginator::{Paginator, PageableRequest, PageableResponse};
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
/// # tokio_test::block_on(async {
/// let first = Response { items: vec!["a".into(), "b".into()], next_page_token: "t1".into() };
/// let list = |request: Request, _options: RequestOptions| {
///     assert_eq!(request.page_token, "t1");
///     std::future::ready(Ok::<_, std::io::Error>(
///         Response { items: vec!["c".into()], ..Default::default() }))
/// };
/// let mut paginator = Paginator::new(list, Request::default(), first, RequestOptions::default());
/// let mut items = Vec::new();
/// while let Some(item) = paginator.items().next().await {
///     items.push(item?);
/// }
/// assert_eq!(items, ["a", "b", "c"]);
/// # Ok::<(), std::io::Error>(()) });
/// ```
#[pin_project]
pub struct Paginator<Req, Resp, M>
where
    Resp: PageableResponse,
    M: Method<Req, Resp>,
{
    method: M,
    request: Req,
    response: Resp,
    options: RequestOptions,
    state: State,
    // The next item to return from `response`, `None` until it is read as items.
    cursor: Option<usize>,
    #[pin]
    pending: Option<M::Future>,
}

impl<Req, Resp, M> Paginator<Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
{
    /// Creates a paginator from the initial response.
    ///
    /// # Parameters
    /// * `method` - the list RPC, called to fetch subsequent pages.
    /// * `request` - the request that produced `response`. The paginator owns
    ///   this copy and only changes its page token.
    /// * `response` - the first page, returned without any additional calls.
    /// * `options` - the options, including the metadata, sent with every
    ///   subsequent call.
    pub fn new(method: M, request: Req, response: Resp, options: RequestOptions) -> Self {
        Self {
            method,
            request,
            response,
            options,
            state: State::Unread,
            cursor: None,
            pending: None,
        }
    }

    /// Returns a stream over the full responses.
    ///
    /// The first element is the initial response. Subsequent elements are
    /// fetched on demand.
    pub fn pages(&mut self) -> Pages<'_, Req, Resp, M>
    where
        Self: Unpin,
    {
        Pages { paginator: self }
    }

    /// Returns a stream over the items in each page.
    pub fn items(&mut self) -> Items<'_, Req, Resp, M>
    where
        Self: Unpin,
    {
        Items { paginator: self }
    }

    /// Returns the next item, fetching a new page if needed.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self>
    where
        Self: Unpin,
    {
        futures::StreamExt::next(self)
    }

    /// Moves to the next page, fetching it if needed.
    ///
    /// On `Some(Ok(()))` the current response is a page not returned before.
    fn poll_advance(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<std::result::Result<(), M::Error>>> {
        let mut this = self.project();
        loop {
            if let Some(pending) = this.pending.as_mut().as_pin_mut() {
                let result = ready!(pending.poll(cx));
                this.pending.set(None);
                return match result {
                    Ok(response) => {
                        *this.response = response;
                        Poll::Ready(Some(Ok(())))
                    }
                    Err(e) => {
                        this.state.failed();
                        Poll::Ready(Some(Err(e)))
                    }
                };
            }
            match this.state.step(&*this.response) {
                Step::Emit => return Poll::Ready(Some(Ok(()))),
                Step::Finish => return Poll::Ready(None),
                Step::Fetch(token) => {
                    tracing::debug!(page_token = %token, "fetching next page");
                    this.request.set_page_token(token);
                    let call = this.method.call(this.request.clone(), this.options.clone());
                    this.pending.set(Some(call));
                }
            }
        }
    }

    fn poll_page(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<std::result::Result<Resp, M::Error>>> {
        let advanced = ready!(self.as_mut().poll_advance(cx));
        let this = self.project();
        *this.cursor = None;
        Poll::Ready(advanced.map(|r| r.map(|()| this.response.clone())))
    }

    fn poll_item(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<std::result::Result<Resp::PageItem, M::Error>>> {
        loop {
            let this = self.as_mut().project();
            let position = *this.cursor;
            if let Some(item) = position.and_then(|i| this.response.items().get(i)) {
                let item = item.clone();
                *this.cursor = position.map(|i| i + 1);
                return Poll::Ready(Some(Ok(item)));
            }
            match ready!(self.as_mut().poll_advance(cx)) {
                None => return Poll::Ready(None),
                Some(Err(e)) => return Poll::Ready(Some(Err(e))),
                Some(Ok(())) => *self.as_mut().project().cursor = Some(0),
            }
        }
    }
}

impl<Req, Resp, M> Paginator<Req, Resp, M>
where
    Resp: PageableResponse,
    M: Method<Req, Resp>,
{
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
    ///
    /// Before any subsequent page is fetched this is the initial request.
    pub fn request(&self) -> &Req {
        &self.request
    }

    /// The options sent with each request.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl<Req, Resp, M> Stream for Paginator<Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
{
    type Item = std::result::Result<Resp::PageItem, M::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.poll_item(cx)
    }
}

impl<Req, Resp, M> std::fmt::Debug for Paginator<Req, Resp, M>
where
    Resp: PageableResponse + std::fmt::Debug,
    M: Method<Req, Resp>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Paginator<{:?}>", self.response)
    }
}

/// A [Stream] over the pages of a [Paginator].
///
/// Returned by [Paginator::pages].
pub struct Pages<'a, Req, Resp, M>
where
    Resp: PageableResponse,
    M: Method<Req, Resp>,
{
    paginator: &'a mut Paginator<Req, Resp, M>,
}

impl<Req, Resp, M> Pages<'_, Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
    Paginator<Req, Resp, M>: Unpin,
{
    /// Returns the next page, fetching it if needed.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        futures::StreamExt::next(self)
    }
}

impl<Req, Resp, M> Stream for Pages<'_, Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
    Paginator<Req, Resp, M>: Unpin,
{
    type Item = std::result::Result<Resp, M::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut *self.get_mut().paginator).poll_page(cx)
    }
}

/// A [Stream] over the items of a [Paginator].
///
/// Returned by [Paginator::items].
pub struct Items<'a, Req, Resp, M>
where
    Resp: PageableResponse,
    M: Method<Req, Resp>,
{
    paginator: &'a mut Paginator<Req, Resp, M>,
}

impl<Req, Resp, M> Items<'_, Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
    Paginator<Req, Resp, M>: Unpin,
{
    /// Returns the next item, fetching a new page if needed.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        futures::StreamExt::next(self)
    }
}

impl<Req, Resp, M> Stream for Items<'_, Req, Resp, M>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse + Clone,
    M: Method<Req, Resp>,
    Paginator<Req, Resp, M>: Unpin,
{
    type Item = std::result::Result<Resp::PageItem, M::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut *self.get_mut().paginator).poll_item(cx)
    }
}
