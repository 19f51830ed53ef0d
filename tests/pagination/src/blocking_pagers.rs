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

//! Verify the pagers returned by the blocking client.

use crate::mocks::*;
use gax::options::RequestOptions;
use google_cloud_bigquery_reservation_v1::blocking::ReservationService;
use google_cloud_bigquery_reservation_v1::model::*;
use google_cloud_bigquery_reservation_v1::pagers::*;
use pretty_assertions::assert_eq;
use reservation_test_utils::pages::{PARENT, PageLink, chain};
use reservation_test_utils::tracing::enable_tracing;
use test_case::test_case;

#[test_case(1, 0; "single page")]
#[test_case(1, 3; "single page with items")]
#[test_case(4, 2; "several pages")]
#[test_case(3, 0; "several empty pages")]
fn list_reservations(count: usize, per_page: usize) -> anyhow::Result<()> {
    let _guard = enable_tracing();
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    for (i, link) in chain(count).into_iter().enumerate() {
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
                    .set_reservations(make_reservations(per_page, per_page * i))
                    .set_next_page_token(next_page_token))
            });
    }

    let client = ReservationService::from_stub(mock)?;
    let request = ListReservationsRequest::new().set_parent(PARENT);
    let pager = client.list_reservations(request, RequestOptions::default())?;
    let got = pager.collect::<gax::Result<Vec<_>>>()?;
    assert_eq!(got, make_reservations(count * per_page, 0));
    Ok(())
}

#[test]
fn list_capacity_commitments_pages() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_capacity_commitments()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token.is_empty())
        .return_once(|_, _| {
            Ok(ListCapacityCommitmentsResponse::new()
                .set_capacity_commitments(make_commitments(2, 0))
                .set_next_page_token("test-page-001"))
        });
    mock.expect_list_capacity_commitments()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "test-page-001")
        .return_once(|_, _| {
            Ok(ListCapacityCommitmentsResponse::new()
                .set_capacity_commitments(make_commitments(1, 2)))
        });

    let client = ReservationService::from_stub(mock)?;
    let request = ListCapacityCommitmentsRequest::new().set_parent(PARENT);
    let mut pager = client.list_capacity_commitments(request, RequestOptions::default())?;

    let mut pages = pager.pages();
    let first = pages.next().transpose()?;
    assert_eq!(
        first.map(|p| p.capacity_commitments),
        Some(make_commitments(2, 0))
    );
    let second = pages.next().transpose()?;
    assert_eq!(
        second.map(|p| p.capacity_commitments),
        Some(make_commitments(1, 2))
    );
    assert!(pages.next().is_none());

    assert_eq!(
        pager.response().capacity_commitments,
        make_commitments(1, 2)
    );
    assert_eq!(pager.next_page_token(), "");
    Ok(())
}

#[test]
fn empty_middle_page() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    let links = chain(3);
    let responses = vec![
        ListReservationsResponse::new()
            .set_reservations(make_reservations(1, 0))
            .set_next_page_token(links[0].next_page_token.clone()),
        ListReservationsResponse::new()
            .set_next_page_token(links[1].next_page_token.clone()),
        ListReservationsResponse::new()
            .set_reservations(make_reservations(1, 1)),
    ];
    for (link, response) in links.into_iter().zip(responses) {
        mock.expect_list_reservations()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| r.page_token == link.page_token)
            .return_once(move |_, _| Ok(response));
    }

    let client = ReservationService::from_stub(mock)?;
    let request = ListReservationsRequest::new().set_parent(PARENT);
    let mut pager = client.list_reservations(request, RequestOptions::default())?;
    let got = pager.by_ref().collect::<gax::Result<Vec<_>>>()?;
    assert_eq!(got, make_reservations(2, 0));
    assert_eq!(pager.request().page_token, "test-page-002");
    Ok(())
}

#[test]
fn list_assignments_metadata() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    for (i, link) in chain(3).into_iter().enumerate() {
        let PageLink {
            page_token,
            next_page_token,
        } = link;
        mock.expect_list_assignments()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, o| {
                r.page_token == page_token
                    && o.metadata() == [("x-test-header".to_string(), "value".to_string())]
            })
            .return_once(move |_, _| {
                Ok(ListAssignmentsResponse::new()
                    .set_assignments(make_assignments(PARENT, 1, i))
                    .set_next_page_token(next_page_token))
            });
    }

    let client = ReservationService::from_stub(mock)?;
    let mut options = RequestOptions::default();
    options.add_metadata("x-test-header", "value");
    let request = ListAssignmentsRequest::new().set_parent(PARENT);
    let pager = client.list_assignments(request, options)?;
    assert_eq!(pager.options().metadata().len(), 1);
    let names = pager
        .map(|a| a.map(|a| a.name))
        .collect::<gax::Result<Vec<_>>>()?;
    assert_eq!(
        names,
        make_assignments(PARENT, 3, 0)
            .into_iter()
            .map(|a| a.name)
            .collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn search_assignments_error() -> anyhow::Result<()> {
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
        .withf(|r, _| {
            r.query == "assignee=projects/test-project" && r.page_token == "test-page-001"
        })
        .return_once(|_, _| Err(unavailable()));

    let client = ReservationService::from_stub(mock)?;
    let request = SearchAssignmentsRequest::new()
        .set_parent(PARENT)
        .set_query("assignee=projects/test-project");
    let mut pager = client.search_assignments(request, RequestOptions::default())?;

    let mut items = pager.items();
    assert!(matches!(items.next(), Some(Ok(_))));
    assert!(matches!(items.next(), Some(Ok(_))));
    let err = match items.next() {
        Some(Err(e)) => e,
        other => anyhow::bail!("expected an error, got {other:?}"),
    };
    assert_eq!(
        err.status().map(|s| s.code),
        Some(gax::error::rpc::Code::Unavailable)
    );
    assert!(items.next().is_none());
    Ok(())
}

#[test]
fn first_page_error() -> anyhow::Result<()> {
    let mut mock = MockReservationService::new();
    mock.expect_list_reservations()
        .once()
        .return_once(|_, _| Err(unavailable()));

    let client = ReservationService::from_stub(mock)?;
    let got = client.list_reservations(ListReservationsRequest::new(), RequestOptions::default());
    assert!(got.is_err());
    Ok(())
}

#[test]
fn pagers_are_send() -> anyhow::Result<()> {
    static_assertions::assert_impl_all!(ListAssignmentsPager: Send);

    let mut mock = MockReservationService::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_assignments()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(ListAssignmentsResponse::new()
                .set_assignments(make_assignments(PARENT, 1, 0))
                .set_next_page_token("test-page-001"))
        });
    mock.expect_list_assignments()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _| {
            Ok(ListAssignmentsResponse::new()
                .set_assignments(make_assignments(PARENT, 1, 1)))
        });

    let client = ReservationService::from_stub(mock)?;
    let pager = client.list_assignments(
        ListAssignmentsRequest::new().set_parent(PARENT),
        RequestOptions::default(),
    )?;
    let join = std::thread::spawn(move || pager.collect::<gax::Result<Vec<_>>>());
    let got = join
        .join()
        .map_err(|_| anyhow::anyhow!("the pager thread panicked"))??;
    assert_eq!(got, make_assignments(PARENT, 2, 0));
    Ok(())
}
