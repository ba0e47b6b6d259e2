use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::DirectoryConfig;
use crate::directory::domain::{Provider, ProviderId, ServiceType};
use crate::directory::lifecycle::ClaimRequest;
use crate::directory::listing::{
    ListingRequest, ListingRequestId, ListingRequestStatus, ListingSubmission,
};
use crate::directory::service::DirectoryService;
use crate::directory::store::{ListingRequestStore, ProviderStore, StoreError};

pub(super) fn provider(id: &str, name: &str, counties: &[&str]) -> Provider {
    let mut provider = Provider::unclaimed(ProviderId(id.to_string()), name, "Atlanta");
    provider.counties_served = counties.iter().map(|county| county.to_string()).collect();
    provider.services_offered = [ServiceType::Rn].into_iter().collect();
    provider
}

pub(super) fn flagged(
    id: &str,
    name: &str,
    counties: &[&str],
    claimed: bool,
    verified: bool,
    featured: bool,
) -> Provider {
    let mut provider = provider(id, name, counties);
    provider.is_claimed = claimed;
    provider.is_verified = verified;
    provider.is_featured = featured;
    provider
}

pub(super) fn submission() -> ListingSubmission {
    ListingSubmission {
        provider_name: "Harbor Pediatric Home Care".to_string(),
        city: "Brunswick".to_string(),
        counties_served: vec!["Glynn".to_string(), "Camden".to_string()],
        services_offered: [ServiceType::Lpn, ServiceType::Pcs].into_iter().collect(),
        contact_name: "Morgan Ellis".to_string(),
        contact_email: "morgan@harbor.example".to_string(),
        contact_phone: Some("912-555-0142".to_string()),
        company_name: None,
        website: None,
    }
}

pub(super) fn claim() -> ClaimRequest {
    ClaimRequest {
        contact_name: "Jordan Reyes".to_string(),
        contact_email: "jordan@agency.example".to_string(),
        contact_phone: None,
    }
}

pub(super) fn build_service(
    providers: Vec<Provider>,
) -> (
    DirectoryService<MemoryProviders, MemoryListings>,
    Arc<MemoryProviders>,
    Arc<MemoryListings>,
) {
    let store = Arc::new(MemoryProviders::with(providers));
    let listings = Arc::new(MemoryListings::default());
    let service = DirectoryService::new(store.clone(), listings.clone(), DirectoryConfig::default());
    (service, store, listings)
}

#[derive(Default, Clone)]
pub(super) struct MemoryProviders {
    records: Arc<Mutex<HashMap<ProviderId, Provider>>>,
}

impl MemoryProviders {
    pub(super) fn with(providers: Vec<Provider>) -> Self {
        let records = providers
            .into_iter()
            .map(|provider| (provider.id.clone(), provider))
            .collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub(super) fn get(&self, id: &str) -> Option<Provider> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(&ProviderId(id.to_string()))
            .cloned()
    }
}

impl ProviderStore for MemoryProviders {
    fn list_active_providers(&self) -> Result<Vec<Provider>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .filter(|provider| provider.is_active)
            .cloned()
            .collect())
    }

    fn fetch(&self, id: &ProviderId) -> Result<Option<Provider>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn insert(&self, provider: Provider) -> Result<Provider, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&provider.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(provider.id.clone(), provider.clone());
        Ok(provider)
    }

    fn update(&self, provider: Provider) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(provider.id.clone(), provider);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryListings {
    records: Arc<Mutex<HashMap<ListingRequestId, ListingRequest>>>,
}

impl ListingRequestStore for MemoryListings {
    fn insert(&self, request: ListingRequest) -> Result<ListingRequest, StoreError> {
        let mut guard = self.records.lock().expect("listing mutex poisoned");
        if guard.contains_key(&request.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn update(&self, request: ListingRequest) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("listing mutex poisoned");
        guard.insert(request.id.clone(), request);
        Ok(())
    }

    fn fetch(&self, id: &ListingRequestId) -> Result<Option<ListingRequest>, StoreError> {
        let guard = self.records.lock().expect("listing mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self) -> Result<Vec<ListingRequest>, StoreError> {
        let guard = self.records.lock().expect("listing mutex poisoned");
        Ok(guard
            .values()
            .filter(|request| request.status == ListingRequestStatus::Pending)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableProviders;

impl ProviderStore for UnavailableProviders {
    fn list_active_providers(&self) -> Result<Vec<Provider>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProviderId) -> Result<Option<Provider>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _provider: Provider) -> Result<Provider, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _provider: Provider) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
