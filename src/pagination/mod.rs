//! Sequential page traversal
//!
//! A page producer is any `FnMut(u32) -> Future<Output =
//! HubrefResult<ApiResponse<Page<T>>>>`. Pages are requested one at a time
//! starting at 1 and following `next`, so results keep API order and a
//! search stops fetching as soon as it has its answer. Every page goes
//! through strict classification; the first failure aborts the traversal
//! and partial results are dropped.

use crate::classify::ErrorClassifier;
use crate::core::HubrefResult;
use crate::github::types::{ApiResponse, Page};
use std::future::Future;

/// How well an item matched in [`PageIterator::find_best`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Ends the traversal immediately
    Exact,
    /// Ends the traversal after the current page
    Prefix,
}

/// Drives a page producer from page 1 until `next` is absent
pub struct PageIterator<'a> {
    classifier: &'a ErrorClassifier,
}

impl<'a> PageIterator<'a> {
    pub fn new(classifier: &'a ErrorClassifier) -> Self {
        Self { classifier }
    }

    /// Fetch every page and concatenate the items in order
    pub async fn collect_all<T, F, Fut>(&self, mut producer: F) -> HubrefResult<Vec<T>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = HubrefResult<ApiResponse<Page<T>>>>,
    {
        let mut result = Vec::new();
        let mut cursor = Some(1);

        while let Some(page_number) = cursor {
            let page = self.fetch(&mut producer, page_number).await?;
            cursor = page.next;
            result.extend(page.items);
        }

        Ok(result)
    }

    /// Return the first item, in page order, that satisfies `predicate`
    ///
    /// No page after the one holding the match is requested.
    pub async fn find_first<T, F, Fut, P>(
        &self,
        mut producer: F,
        mut predicate: P,
    ) -> HubrefResult<Option<T>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = HubrefResult<ApiResponse<Page<T>>>>,
        P: FnMut(&T) -> bool,
    {
        let mut cursor = Some(1);

        while let Some(page_number) = cursor {
            let page = self.fetch(&mut producer, page_number).await?;
            cursor = page.next;
            if let Some(item) = page.items.into_iter().find(|item| predicate(item)) {
                return Ok(Some(item));
            }
        }

        Ok(None)
    }

    /// Return the first exact match, or else the first prefix match
    ///
    /// Traversal stops on the page holding the first match of either kind.
    /// An exact match on that page beats an earlier prefix match on it.
    pub async fn find_best<T, F, Fut, R>(
        &self,
        mut producer: F,
        mut rank: R,
    ) -> HubrefResult<Option<T>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = HubrefResult<ApiResponse<Page<T>>>>,
        R: FnMut(&T) -> Option<Match>,
    {
        let mut cursor = Some(1);

        while let Some(page_number) = cursor {
            let page = self.fetch(&mut producer, page_number).await?;
            cursor = page.next;

            let mut candidate = None;
            for item in page.items {
                match rank(&item) {
                    Some(Match::Exact) => return Ok(Some(item)),
                    Some(Match::Prefix) if candidate.is_none() => candidate = Some(item),
                    _ => {}
                }
            }
            if candidate.is_some() {
                return Ok(candidate);
            }
        }

        Ok(None)
    }

    async fn fetch<T, F, Fut>(&self, producer: &mut F, page_number: u32) -> HubrefResult<Page<T>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = HubrefResult<ApiResponse<Page<T>>>>,
    {
        let response = producer(page_number).await?;
        let page = self.classifier.strict(response)?;
        tracing::debug!(
            page = page_number,
            of = page.total_pages(),
            items = page.items.len(),
            "fetched page"
        );
        Ok(page)
    }
}
