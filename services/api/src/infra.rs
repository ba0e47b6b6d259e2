use gapp_directory::config::DirectoryConfig;
use gapp_directory::directory::{
    load_providers_from_path, DirectoryService, ListingRequest, ListingRequestId,
    ListingRequestStatus, ListingRequestStore, Provider, ProviderId, ProviderStore, SeedError,
    StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type InMemoryDirectoryService =
    DirectoryService<InMemoryProviderStore, InMemoryListingRequestStore>;

#[derive(Default, Clone)]
pub(crate) struct InMemoryProviderStore {
    providers: Arc<Mutex<HashMap<ProviderId, Provider>>>,
}

impl InMemoryProviderStore {
    pub(crate) fn with_providers(providers: Vec<Provider>) -> Self {
        let store = Self::default();
        {
            let mut guard = store.providers.lock().expect("provider mutex poisoned");
            for provider in providers {
                guard.insert(provider.id.clone(), provider);
            }
        }
        store
    }

    pub(crate) fn len(&self) -> usize {
        self.providers.lock().expect("provider mutex poisoned").len()
    }
}

impl ProviderStore for InMemoryProviderStore {
    fn list_active_providers(&self) -> Result<Vec<Provider>, StoreError> {
        let guard = self.providers.lock().expect("provider mutex poisoned");
        Ok(guard
            .values()
            .filter(|provider| provider.is_active)
            .cloned()
            .collect())
    }

    fn fetch(&self, id: &ProviderId) -> Result<Option<Provider>, StoreError> {
        let guard = self.providers.lock().expect("provider mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn insert(&self, provider: Provider) -> Result<Provider, StoreError> {
        let mut guard = self.providers.lock().expect("provider mutex poisoned");
        if guard.contains_key(&provider.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(provider.id.clone(), provider.clone());
        Ok(provider)
    }

    fn update(&self, provider: Provider) -> Result<(), StoreError> {
        let mut guard = self.providers.lock().expect("provider mutex poisoned");
        if guard.contains_key(&provider.id) {
            guard.insert(provider.id.clone(), provider);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryListingRequestStore {
    requests: Arc<Mutex<HashMap<ListingRequestId, ListingRequest>>>,
}

impl ListingRequestStore for InMemoryListingRequestStore {
    fn insert(&self, request: ListingRequest) -> Result<ListingRequest, StoreError> {
        let mut guard = self.requests.lock().expect("listing mutex poisoned");
        if guard.contains_key(&request.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn update(&self, request: ListingRequest) -> Result<(), StoreError> {
        let mut guard = self.requests.lock().expect("listing mutex poisoned");
        if guard.contains_key(&request.id) {
            guard.insert(request.id.clone(), request);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &ListingRequestId) -> Result<Option<ListingRequest>, StoreError> {
        let guard = self.requests.lock().expect("listing mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self) -> Result<Vec<ListingRequest>, StoreError> {
        let guard = self.requests.lock().expect("listing mutex poisoned");
        Ok(guard
            .values()
            .filter(|request| request.status == ListingRequestStatus::Pending)
            .cloned()
            .collect())
    }
}

/// Load the configured seed, if any, into an in-memory provider store.
pub(crate) fn seeded_provider_store(
    config: &DirectoryConfig,
) -> Result<InMemoryProviderStore, SeedError> {
    let Some(path) = config.seed_csv.as_ref() else {
        return Ok(InMemoryProviderStore::default());
    };

    let providers = load_providers_from_path(path)?;
    info!(path = %path.display(), providers = providers.len(), "provider seed loaded");
    Ok(InMemoryProviderStore::with_providers(providers))
}

pub(crate) fn directory_service(
    config: &DirectoryConfig,
) -> Result<InMemoryDirectoryService, SeedError> {
    let providers = Arc::new(seeded_provider_store(config)?);
    let listings = Arc::new(InMemoryListingRequestStore::default());
    Ok(DirectoryService::new(providers, listings, config.clone()))
}
