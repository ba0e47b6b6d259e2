use serde::Serialize;

use super::domain::{Provider, ServiceFilter};
use super::engine::{rank_and_paginate, DirectoryFilters, DirectoryPage, DirectoryQuery};
use crate::reference::{self, County};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountySummary {
    pub name: &'static str,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
}

impl From<&County> for CountySummary {
    fn from(county: &County) -> Self {
        Self {
            name: county.name,
            slug: county.slug(),
            region: county.region.map(|region| region.label()),
        }
    }
}

/// Landing page content for a single county.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyPage {
    pub county: CountySummary,
    pub providers: DirectoryPage,
    pub nearby: Vec<CountySummary>,
}

/// Build the county page for `slug`, or `None` when the slug is not a Georgia county.
pub fn county_page(
    providers: &[Provider],
    slug: &str,
    page: usize,
    page_size: usize,
) -> Option<CountyPage> {
    let county = reference::find_by_slug(slug)?;
    let query = DirectoryQuery::new(
        DirectoryFilters {
            county: Some(county.name.to_string()),
            service: ServiceFilter::All,
            search_text: None,
        },
        page,
        page_size,
    );

    Some(CountyPage {
        county: CountySummary::from(county),
        providers: rank_and_paginate(providers, &query),
        nearby: reference::nearby_counties(county.name)
            .into_iter()
            .map(CountySummary::from)
            .collect(),
    })
}
