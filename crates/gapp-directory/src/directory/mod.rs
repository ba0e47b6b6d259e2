//! Provider directory: ranking engine, county pages, listing lifecycle, and HTTP routes.

pub mod browser;
pub mod county;
pub mod domain;
pub mod engine;
pub mod lifecycle;
pub mod listing;
pub mod router;
pub mod seed;
pub mod service;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use browser::{DirectoryBrowser, SEARCH_DEBOUNCE};
pub use county::{county_page, CountyPage, CountySummary};
pub use domain::{LifecycleStage, Provider, ProviderId, ServiceFilter, ServiceType};
pub use engine::{
    rank, rank_and_paginate, total_pages, DirectoryFilters, DirectoryPage, DirectoryQuery,
    DirectorySort,
};
pub use lifecycle::{AdminAction, ClaimError, ClaimRequest};
pub use listing::{
    ListingRequest, ListingRequestId, ListingRequestStatus, ListingSubmission, SubmissionError,
};
pub use router::directory_router;
pub use seed::{load_providers_from_path, load_providers_from_reader, SeedError};
pub use service::{DirectoryService, DirectoryServiceError};
pub use store::{ListingRequestStore, ProviderStore, StoreError};
pub use views::{ProviderCardView, ServiceBadge};
