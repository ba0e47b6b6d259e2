use std::time::{Duration, Instant};

use super::domain::ServiceFilter;
use super::engine::{DirectoryFilters, DirectoryQuery, DirectorySort};
use crate::config::DEFAULT_DIRECTORY_PAGE_SIZE;

/// Quiet period after the last keystroke before a search is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Filter and paging state behind the directory screen. Any filter change sends the user
/// back to page 1.
#[derive(Debug, Clone)]
pub struct DirectoryBrowser {
    filters: DirectoryFilters,
    sort: DirectorySort,
    page: usize,
    page_size: usize,
    pending_search: Option<PendingSearch>,
}

#[derive(Debug, Clone)]
struct PendingSearch {
    text: String,
    typed_at: Instant,
}

impl Default for DirectoryBrowser {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY_PAGE_SIZE)
    }
}

impl DirectoryBrowser {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: DirectoryFilters::default(),
            sort: DirectorySort::default(),
            page: 1,
            page_size: page_size.max(1),
            pending_search: None,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filters(&self) -> &DirectoryFilters {
        &self.filters
    }

    pub fn set_county(&mut self, county: Option<String>) {
        let county = county.filter(|value| !value.trim().is_empty());
        if self.filters.county != county {
            self.filters.county = county;
            self.page = 1;
        }
    }

    pub fn set_service(&mut self, service: ServiceFilter) {
        if self.filters.service != service {
            self.filters.service = service;
            self.page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: DirectorySort) {
        if self.sort != sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Record a keystroke. The text is applied by `poll` once typing settles.
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        self.pending_search = Some(PendingSearch {
            text: text.into(),
            typed_at: now,
        });
    }

    /// Apply the pending search if the debounce window has elapsed. Returns true when the
    /// filters changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let settled = self
            .pending_search
            .as_ref()
            .map(|pending| now.saturating_duration_since(pending.typed_at) >= SEARCH_DEBOUNCE)
            .unwrap_or(false);
        if !settled {
            return false;
        }

        let Some(pending) = self.pending_search.take() else {
            return false;
        };
        let text = Some(pending.text).filter(|value| !value.trim().is_empty());
        if self.filters.search_text == text {
            return false;
        }
        self.filters.search_text = text;
        self.page = 1;
        true
    }

    pub fn clear_filters(&mut self) {
        self.filters = DirectoryFilters::default();
        self.pending_search = None;
        self.page = 1;
    }

    /// Move to `page`, clamped to `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn query(&self) -> DirectoryQuery {
        DirectoryQuery {
            filters: self.filters.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
