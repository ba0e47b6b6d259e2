//! Ranking, filtering and pagination over the active provider list.

pub mod filters;
pub mod ranking;

use serde::{Deserialize, Serialize};

use super::domain::{Provider, ServiceFilter};
use super::views::ProviderCardView;

/// Ordering applied after filtering. `Recommended` is the placement ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectorySort {
    #[default]
    Recommended,
    Name,
    Tier,
}

/// Filter criteria applied to the active provider list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectoryFilters {
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub service: ServiceFilter,
    #[serde(default)]
    pub search_text: Option<String>,
}

/// A full query: filters, ordering, and the 1-based page window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(flatten)]
    pub filters: DirectoryFilters,
    #[serde(default)]
    pub sort: DirectorySort,
    pub page: usize,
    pub page_size: usize,
}

impl DirectoryQuery {
    pub fn new(filters: DirectoryFilters, page: usize, page_size: usize) -> Self {
        Self {
            filters,
            sort: DirectorySort::default(),
            page,
            page_size,
        }
    }
}

/// One page of ranked results plus totals over the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage {
    pub items: Vec<ProviderCardView>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Filter and order the providers without paginating.
pub fn rank(providers: &[Provider], filters: &DirectoryFilters, sort: DirectorySort) -> Vec<Provider> {
    let county = filters.county.as_deref();
    let search = filters.search_text.as_deref();

    let mut matched: Vec<Provider> = providers
        .iter()
        .filter(|provider| filters::matches_county(provider, county))
        .filter(|provider| filters::matches_service(provider, filters.service))
        .filter(|provider| filters::matches_search(provider, search))
        .cloned()
        .collect();

    match sort {
        DirectorySort::Recommended => matched.sort_by(ranking::by_recommendation),
        DirectorySort::Name => matched.sort_by(ranking::by_name),
        DirectorySort::Tier => matched.sort_by(ranking::by_tier_level),
    }

    matched
}

/// `total_pages` is `ceil(count / page_size)`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Filter, rank and slice the providers. Out-of-range pages yield an empty slice.
pub fn rank_and_paginate(providers: &[Provider], query: &DirectoryQuery) -> DirectoryPage {
    let ranked = rank(providers, &query.filters, query.sort);
    let total_count = ranked.len();

    let items = if query.page == 0 || query.page_size == 0 {
        Vec::new()
    } else {
        let start = (query.page - 1).saturating_mul(query.page_size);
        ranked
            .iter()
            .skip(start)
            .take(query.page_size)
            .map(ProviderCardView::from)
            .collect()
    };

    DirectoryPage {
        items,
        total_count,
        total_pages: total_pages(total_count, query.page_size),
        page: query.page,
        page_size: query.page_size,
    }
}
