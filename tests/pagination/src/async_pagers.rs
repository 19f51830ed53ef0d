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

//! Verify the async pagers returned by the request builders.

use crate::mocks::*;
use futures::TryStreamExt;
use gax::options::RequestOptionsBuilder;
use google_cloud_bigquery_reservation_v1::client::ReservationService;
use google_cloud_bigquery_reservation_v1::model::*;
use google_cloud_bigquery_reservation_v1::pagers::*;
use pretty_assertions::assert_eq;
use reservation_test_utils::pages::{PARENT, PageLink, chain};

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_reservations_items() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    for (i, link) in chain(3).into_iter().enumerate() {
        let PageLink {
            page_token,
            next_page_token,
        } = link;
        mock.expect_list_reservations()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| r.parent == PARENT && r.page_token == page_token)
            .return_once(move |_, _| {
                Ok(ListReservationsResponse::new()
                    .set_reservations(make_reservations(2, 2 * i))
                    .set_next_page_token(next_page_token))
            });
    }

    let client = ReservationService::from_stub(mock);
    let mut paginator = client.list_reservations(PARENT).pager().await?;
    let mut names = Vec::new();
    while let Some(reservation) = paginator.next().await {
        names.push(reservation?.name);
    }

    let want = make_reservations(6, 0)
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    assert_eq!(names, want);
    Ok(())
}

#[tokio::test]
async fn list_capacity_commitments_pages() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    let links = chain(3);
    let responses = vec![
        ListCapacityCommitmentsResponse::new()
            .set_capacity_commitments(make_commitments(2, 0))
            .set_next_page_token(links[0].next_page_token.clone()),
        // An empty page in the middle does not end the iteration.
        ListCapacityCommitmentsResponse::new()
            .set_next_page_token(links[1].next_page_token.clone()),
        ListCapacityCommitmentsResponse::new()
            .set_capacity_commitments(make_commitments(1, 2)),
    ];
    for (link, response) in links.into_iter().zip(responses.clone()) {
        mock.expect_list_capacity_commitments()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| r.parent == PARENT && r.page_token == link.page_token)
            .return_once(move |_, _| Ok(response));
    }

    let client = ReservationService::from_stub(mock);
    let mut paginator = client.list_capacity_commitments(PARENT).pager().await?;
    let mut got = Vec::new();
    let mut pages = paginator.pages();
    while let Some(page) = pages.next().await {
        got.push(page?);
    }
    assert_eq!(got, responses);
    assert_eq!(paginator.response(), &responses[2]);
    assert_eq!(paginator.request().page_token, "test-page-002");
    Ok(())
}

#[tokio::test]
async fn list_assignments_metadata() -> anyhow::Result<()> {
    const PARENT_RESERVATION: &str = "projects/test-project/locations/us/reservations/-";
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    for (i, link) in chain(2).into_iter().enumerate() {
        let PageLink {
            page_token,
            next_page_token,
        } = link;
        mock.expect_list_assignments()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, o| {
                r.parent == PARENT_RESERVATION
                    && r.page_size == 10
                    && r.page_token == page_token
                    && o.metadata()
                        == [
                            ("x-goog-request-params".to_string(), "parent=test".to_string()),
                            ("x-test-header".to_string(), "value".to_string()),
                        ]
                    && o.user_agent().as_deref() == Some("test-agent/1.0")
            })
            .return_once(move |_, _| {
                Ok(ListAssignmentsResponse::new()
                    .set_assignments(make_assignments(PARENT_RESERVATION, 1, i))
                    .set_next_page_token(next_page_token))
            });
    }

    let client = ReservationService::from_stub(mock);
    let paginator = client
        .list_assignments(PARENT_RESERVATION)
        .set_page_size(10)
        .with_metadata("x-goog-request-params", "parent=test")
        .with_metadata("x-test-header", "value")
        .with_user_agent("test-agent/1.0")
        .pager()
        .await?;
    let got = paginator.try_collect::<Vec<_>>().await?;
    assert_eq!(got, make_assignments(PARENT_RESERVATION, 2, 0));
    Ok(())
}

#[tokio::test]
async fn search_assignments_keeps_query() -> anyhow::Result<()> {
    const QUERY: &str = "assignee=projects/test-project";
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    for (i, link) in chain(3).into_iter().enumerate() {
        let PageLink {
            page_token,
            next_page_token,
        } = link;
        mock.expect_search_assignments()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| {
                r.parent == PARENT && r.query == QUERY && r.page_token == page_token
            })
            .return_once(move |_, _| {
                Ok(SearchAssignmentsResponse::new()
                    .set_assignments(make_assignments(PARENT, 1, i))
                    .set_next_page_token(next_page_token))
            });
    }

    let client = ReservationService::from_stub(mock);
    let request = SearchAssignmentsRequest::new().set_parent(PARENT).set_query(QUERY);
    let mut paginator = client
        .search_assignments("ignored")
        .with_request(request.clone())
        .pager()
        .await?;
    let mut items = paginator.items();
    let mut got = Vec::new();
    while let Some(assignment) = items.next().await {
        got.push(assignment?);
    }
    assert_eq!(got, make_assignments(PARENT, 3, 0));
    // The pager works on its own copy of the request.
    assert_eq!(request.page_token, "");
    Ok(())
}

#[tokio::test]
async fn single_empty_page() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    mock.expect_list_reservations()
        .once()
        .return_once(|_, _| Ok(ListReservationsResponse::new()));

    let client = ReservationService::from_stub(mock);
    let mut paginator = client.list_reservations(PARENT).pager().await?;
    let mut pages = Vec::new();
    while let Some(page) = paginator.pages().next().await {
        pages.push(page?);
    }
    assert_eq!(pages, [ListReservationsResponse::new()]);
    assert!(paginator.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn first_page_error() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    mock.expect_list_capacity_commitments()
        .once()
        .return_once(|_, _| Err(unavailable()));

    let client = ReservationService::from_stub(mock);
    let Err(err) = client.list_capacity_commitments(PARENT).pager().await else {
        anyhow::bail!("the initial call should fail");
    };
    assert_eq!(
        err.status().map(|s| s.code),
        Some(gax::error::rpc::Code::Unavailable)
    );
    Ok(())
}

#[tokio::test]
async fn error_after_first_page() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_assignments()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(ListAssignmentsResponse::new()
                .set_assignments(make_assignments(PARENT, 2, 0))
                .set_next_page_token("test-page-001"))
        });
    mock.expect_list_assignments()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "test-page-001")
        .return_once(|_, _| Err(unavailable()));

    let client = ReservationService::from_stub(mock);
    let mut paginator = client.list_assignments(PARENT).pager().await?;
    let mut names = Vec::new();
    let err = loop {
        match paginator.next().await {
            Some(Ok(a)) => names.push(a.name),
            Some(Err(e)) => break e,
            None => anyhow::bail!("expected an error after {names:?}"),
        }
    };
    assert_eq!(names.len(), 2, "{names:?}");
    assert!(err.status().is_some(), "{err:?}");
    assert!(paginator.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn cancel_before_second_page() -> anyhow::Result<()> {
    use tokio_util::sync::CancellationToken;

    let mut mock = MockReservationService::new();
    mock.expect_list_reservations().once().return_once(|_, _| {
        Ok(ListReservationsResponse::new()
            .set_reservations(make_reservations(2, 0))
            .set_next_page_token("test-page-001"))
    });
    // mockall panics if the pager fetches the second page.

    let client = ReservationService::from_stub(mock);
    let mut paginator = client.list_reservations(PARENT).pager().await?;
    let cancel = CancellationToken::new();
    let mut names = Vec::new();
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            item = paginator.next() => match item {
                Some(r) => {
                    names.push(r?.name);
                    if names.len() == 2 {
                        cancel.cancel();
                    }
                }
                None => break,
            },
        }
    }
    let want = make_reservations(2, 0)
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    assert_eq!(names, want);
    assert_eq!(paginator.next_page_token(), "test-page-001");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn pagers_are_send() -> anyhow::Result<()> {
    static_assertions::assert_impl_all!(SearchAssignmentsAsyncPager: Send, Unpin);

    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_search_assignments()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(SearchAssignmentsResponse::new()
                .set_assignments(make_assignments(PARENT, 2, 0))
                .set_next_page_token("test-page-001"))
        });
    mock.expect_search_assignments()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "test-page-001")
        .return_once(|_, _| {
            Ok(SearchAssignmentsResponse::new()
                .set_assignments(make_assignments(PARENT, 1, 2)))
        });

    async fn other_task(
        mut paginator: SearchAssignmentsAsyncPager,
    ) -> gax::Result<Vec<Assignment>> {
        let mut items = Vec::new();
        while let Some(item) = paginator.next().await {
            items.push(item?);
        }
        Ok(items)
    }

    let client = ReservationService::from_stub(mock);
    let paginator = client
        .search_assignments(PARENT)
        .set_query("assignee=projects/test-project")
        .pager()
        .await?;
    let join = tokio::spawn(async move { other_task(paginator).await });
    let got = join.await??;
    assert_eq!(got, make_assignments(PARENT, 3, 0));
    Ok(())
}

#[tokio::test]
async fn send_returns_one_page() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    mock.expect_list_reservations()
        .once()
        .withf(|r, _| r.page_token == "test-page-007")
        .return_once(|_, _| {
            Ok(ListReservationsResponse::new()
                .set_reservations(make_reservations(1, 7))
                .set_next_page_token("test-page-008"))
        });

    let client = ReservationService::from_stub(mock);
    let response = client
        .list_reservations(PARENT)
        .set_page_token("test-page-007")
        .send()
        .await?;
    assert_eq!(response.reservations, make_reservations(1, 7));
    assert_eq!(response.next_page_token, "test-page-008");
    Ok(())
}
