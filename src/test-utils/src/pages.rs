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

//! Helpers to describe a sequence of pages returned by a fake list RPC.

/// The parent used in most tests.
pub const PARENT: &str = "projects/test-project/locations/us";

/// The tokens linking one page of a fake list RPC to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLink {
    /// The page token in the request for this page. Empty for the first page.
    pub page_token: String,
    /// The `next_page_token` in the response. Empty for the last page.
    pub next_page_token: String,
}

/// Returns the links for a chain of `count` pages.
///
/// The tokens are `test-page-001`, `test-page-002`, etc.
///
/// # Example
/// ```
/// use reservation_test_utils::pages::chain;
/// let links = chain(2);
/// assert_eq!(links[0].page_token, "");
/// assert_eq!(links[0].next_page_token, "test-page-001");
/// assert_eq!(links[1].page_token, "test-page-001");
/// assert_eq!(links[1].next_page_token, "");
/// ```
pub fn chain(count: usize) -> Vec<PageLink> {
    (0..count)
        .map(|i| PageLink {
            page_token: token(i),
            next_page_token: if i + 1 == count {
                String::new()
            } else {
                token(i + 1)
            },
        })
        .collect()
}

fn token(i: usize) -> String {
    if i == 0 {
        return String::new();
    }
    format!("test-page-{i:03}")
}

/// Returns `count` resource names under `collection`, starting at `start`.
///
/// # Example
/// ```
/// use reservation_test_utils::pages::{PARENT, names};
/// let got = names(PARENT, "reservations", 2, 3);
/// assert_eq!(got, [
///     "projects/test-project/locations/us/reservations/r-3",
///     "projects/test-project/locations/us/reservations/r-4",
/// ]);
/// ```
pub fn names(parent: &str, collection: &str, count: usize, start: usize) -> Vec<String> {
    let prefix = collection.chars().next().unwrap_or('x');
    (start..start + count)
        .map(|i| format!("{parent}/{collection}/{prefix}-{i}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(5)]
    fn chain_links(count: usize) {
        let links = chain(count);
        assert_eq!(links.len(), count);
        if let Some(first) = links.first() {
            assert!(first.page_token.is_empty(), "{links:?}");
        }
        if let Some(last) = links.last() {
            assert!(last.next_page_token.is_empty(), "{links:?}");
        }
        for pair in links.windows(2) {
            assert!(!pair[0].next_page_token.is_empty(), "{links:?}");
            assert_eq!(pair[0].next_page_token, pair[1].page_token);
        }
    }

    #[test]
    fn names_in_collection() {
        let got = names("projects/p/locations/eu", "capacityCommitments", 2, 0);
        assert_eq!(
            got,
            vec![
                "projects/p/locations/eu/capacityCommitments/c-0".to_string(),
                "projects/p/locations/eu/capacityCommitments/c-1".to_string(),
            ]
        );
        assert!(names(PARENT, "assignments", 0, 7).is_empty());
    }
}
