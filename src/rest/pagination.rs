//! Page-by-page collection of list results.
//!
//! A listing starts at the pinned page (or page 1) and requests pages one
//! after another until the [`PaginationPolicy`] says it is done. A pinned
//! page is fetched once and nothing else. Any failure aborts the listing
//! and the records gathered so far are dropped.

use serde::de::DeserializeOwned;

use crate::clients::{QueryParams, RestClient, TOTAL_PAGES_HEADER};
use crate::rest::{decode_json, ResourceError};

/// Page size used by [`PaginationPolicy::UntilEmptyPage`] when the caller
/// did not set `per_page`.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// How a resource collection learns that it has seen the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationPolicy {
    /// The last page is read from the `X-WP-TotalPages` response header.
    TotalPagesHeader,
    /// Pages are fetched until one comes back empty.
    UntilEmptyPage,
    /// The collection comes back in a single response with no `page` param.
    Unpaginated,
}

/// Pagination state for one listing.
///
/// ```rust
/// use woocommerce_api::rest::{PaginationPolicy, Paginator};
///
/// let mut paginator = Paginator::new(PaginationPolicy::TotalPagesHeader, None);
/// assert_eq!(paginator.current_page(), Some(1));
///
/// paginator.advance(10, Some("2")).unwrap();
/// assert_eq!(paginator.current_page(), Some(2));
///
/// paginator.advance(4, Some("2")).unwrap();
/// assert_eq!(paginator.current_page(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Paginator {
    policy: PaginationPolicy,
    page: u32,
    max_page: u32,
    pinned: bool,
    finished: bool,
}

impl Paginator {
    /// Starts a listing at `pinned_page`, or at page 1 when none is pinned.
    #[must_use]
    pub fn new(policy: PaginationPolicy, pinned_page: Option<u32>) -> Self {
        let page = pinned_page.unwrap_or(1);
        Self {
            policy,
            page,
            max_page: page,
            pinned: pinned_page.is_some(),
            finished: false,
        }
    }

    /// The page to request next, or `None` once the listing is done.
    #[must_use]
    pub const fn current_page(&self) -> Option<u32> {
        if self.finished {
            None
        } else {
            Some(self.page)
        }
    }

    /// The last page known so far.
    #[must_use]
    pub const fn max_page(&self) -> u32 {
        self.max_page
    }

    /// Returns `true` when the listing was pinned to one page.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Records a fetched page.
    ///
    /// `records` is the number of records on the page and `total_pages` the
    /// raw `X-WP-TotalPages` header value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PaginationHeader`] when the header is needed
    /// and missing or not a number.
    pub fn advance(&mut self, records: usize, total_pages: Option<&str>) -> Result<(), ResourceError> {
        match self.policy {
            PaginationPolicy::Unpaginated => self.finished = true,
            PaginationPolicy::UntilEmptyPage => {
                if self.pinned || records == 0 {
                    self.finished = true;
                } else {
                    self.next_page();
                }
            }
            PaginationPolicy::TotalPagesHeader => {
                if self.pinned {
                    self.finished = true;
                    return Ok(());
                }

                let total = parse_total_pages(total_pages)?;
                if self.page > 1 && total < self.max_page {
                    tracing::warn!(
                        previous = self.max_page,
                        current = total,
                        "total page count shrank during listing"
                    );
                }
                self.max_page = total;
                self.next_page();
                self.finished |= self.page > self.max_page;
            }
        }
        Ok(())
    }
}

impl Paginator {
    // Past `u32::MAX` there is no page left to ask for.
    fn next_page(&mut self) {
        match self.page.checked_add(1) {
            Some(next) => self.page = next,
            None => self.finished = true,
        }
    }
}

fn parse_total_pages(value: Option<&str>) -> Result<u32, ResourceError> {
    let value = value.ok_or_else(|| ResourceError::PaginationHeader {
        header: TOTAL_PAGES_HEADER,
        reason: "header missing".to_string(),
    })?;

    value
        .trim()
        .parse::<u32>()
        .map_err(|e| ResourceError::PaginationHeader {
            header: TOTAL_PAGES_HEADER,
            reason: format!("{e}: '{value}'"),
        })
}

/// Fetches every page of a collection and concatenates the records.
///
/// # Errors
///
/// Returns the first error met. Records fetched before it are dropped.
pub async fn list_pages<T: DeserializeOwned>(
    client: &RestClient,
    resource: &'static str,
    path: &str,
    policy: PaginationPolicy,
    pinned_page: Option<u32>,
    mut query: QueryParams,
) -> Result<Vec<T>, ResourceError> {
    if policy == PaginationPolicy::UntilEmptyPage {
        query
            .entry("per_page".to_string())
            .or_insert_with(|| DEFAULT_PAGE_SIZE.to_string());
    }

    let mut paginator = Paginator::new(policy, pinned_page);
    let mut records: Vec<T> = Vec::new();

    while let Some(page) = paginator.current_page() {
        if policy != PaginationPolicy::Unpaginated {
            query.insert("page".to_string(), page.to_string());
        }

        let response = client.get(path, Some(query.clone())).await?;
        let batch: Vec<T> = decode_json(resource, &response.body)?;

        tracing::debug!(
            resource,
            page,
            records = batch.len(),
            "fetched page"
        );

        paginator.advance(batch.len(), response.total_pages())?;
        records.extend(batch);
    }

    Ok(records)
}
