use super::domain::{Provider, ProviderId};
use super::listing::{ListingRequest, ListingRequestId};

/// Provider Store contract. `list_active_providers` returns only active listings, in any
/// order.
pub trait ProviderStore: Send + Sync {
    fn list_active_providers(&self) -> Result<Vec<Provider>, StoreError>;
    fn fetch(&self, id: &ProviderId) -> Result<Option<Provider>, StoreError>;
    fn insert(&self, provider: Provider) -> Result<Provider, StoreError>;
    fn update(&self, provider: Provider) -> Result<(), StoreError>;
}

/// Storage for listing requests awaiting admin review.
pub trait ListingRequestStore: Send + Sync {
    fn insert(&self, request: ListingRequest) -> Result<ListingRequest, StoreError>;
    fn update(&self, request: ListingRequest) -> Result<(), StoreError>;
    fn fetch(&self, id: &ListingRequestId) -> Result<Option<ListingRequest>, StoreError>;
    fn pending(&self) -> Result<Vec<ListingRequest>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
