use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::county::{county_page, CountyPage};
use super::domain::{Provider, ProviderId};
use super::engine::{rank_and_paginate, DirectoryPage, DirectoryQuery};
use super::lifecycle::{AdminAction, ClaimError, ClaimRequest};
use super::listing::{
    ListingRequest, ListingRequestId, ListingRequestStatus, ListingSubmission, SubmissionError,
};
use super::store::{ListingRequestStore, ProviderStore, StoreError};
use crate::config::DirectoryConfig;

/// Service composing the provider store, listing requests, and the directory engine.
pub struct DirectoryService<P, L> {
    providers: Arc<P>,
    listings: Arc<L>,
    config: DirectoryConfig,
}

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PROVIDER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_listing_id() -> ListingRequestId {
    let id = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ListingRequestId(format!("lr-{id:06}"))
}

fn next_provider_id() -> ProviderId {
    let id = PROVIDER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProviderId(format!("prov-{id:06}"))
}

impl<P, L> DirectoryService<P, L>
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    pub fn new(providers: Arc<P>, listings: Arc<L>, config: DirectoryConfig) -> Self {
        Self {
            providers,
            listings,
            config,
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Run a directory query over the active providers.
    pub fn search(&self, query: &DirectoryQuery) -> Result<DirectoryPage, DirectoryServiceError> {
        let providers = self.providers.list_active_providers()?;
        Ok(rank_and_paginate(&providers, query))
    }

    pub fn county_page(&self, slug: &str, page: usize) -> Result<CountyPage, DirectoryServiceError> {
        let providers = self.providers.list_active_providers()?;
        county_page(&providers, slug, page, self.config.county_page_size)
            .ok_or_else(|| DirectoryServiceError::CountyNotFound(slug.to_string()))
    }

    pub fn provider(&self, id: &ProviderId) -> Result<Provider, DirectoryServiceError> {
        self.providers
            .fetch(id)?
            .ok_or_else(|| DirectoryServiceError::ProviderNotFound(id.clone()))
    }

    /// Apply an admin transition and persist the provider.
    pub fn apply_admin_action(
        &self,
        id: &ProviderId,
        action: AdminAction,
    ) -> Result<Provider, DirectoryServiceError> {
        let mut provider = self.provider(id)?;
        action.apply(&mut provider);
        self.providers.update(provider.clone())?;

        info!(
            provider_id = %provider.id,
            action = action.label(),
            verified = provider.is_verified,
            featured = provider.is_featured,
            tier_level = provider.tier_level,
            "provider admin action applied"
        );
        Ok(provider)
    }

    pub fn verify(&self, id: &ProviderId) -> Result<Provider, DirectoryServiceError> {
        self.apply_admin_action(id, AdminAction::Verify)
    }

    pub fn unverify(&self, id: &ProviderId) -> Result<Provider, DirectoryServiceError> {
        self.apply_admin_action(id, AdminAction::Unverify)
    }

    pub fn feature(&self, id: &ProviderId) -> Result<Provider, DirectoryServiceError> {
        self.apply_admin_action(id, AdminAction::Feature)
    }

    pub fn unfeature(&self, id: &ProviderId) -> Result<Provider, DirectoryServiceError> {
        self.apply_admin_action(id, AdminAction::Unfeature)
    }

    pub fn deactivate(&self, id: &ProviderId) -> Result<Provider, DirectoryServiceError> {
        self.apply_admin_action(id, AdminAction::Deactivate)
    }

    /// Claim an unclaimed listing on behalf of the agency.
    pub fn claim_provider(
        &self,
        id: &ProviderId,
        claim: ClaimRequest,
    ) -> Result<Provider, DirectoryServiceError> {
        claim.validate()?;
        let mut provider = self.provider(id)?;
        if provider.is_claimed {
            return Err(DirectoryServiceError::AlreadyClaimed(id.clone()));
        }

        claim.apply(&mut provider);
        self.providers.update(provider.clone())?;

        info!(provider_id = %provider.id, "provider listing claimed");
        Ok(provider)
    }

    pub fn submit_listing_request(
        &self,
        submission: ListingSubmission,
    ) -> Result<ListingRequest, DirectoryServiceError> {
        submission.validate()?;
        let request = ListingRequest::pending(next_listing_id(), submission, Utc::now());
        let stored = self.listings.insert(request)?;

        info!(
            listing_request_id = %stored.id,
            provider_name = %stored.submission.provider_name,
            "listing request submitted"
        );
        Ok(stored)
    }

    pub fn pending_listing_requests(&self) -> Result<Vec<ListingRequest>, DirectoryServiceError> {
        let mut pending = self.listings.pending()?;
        pending.sort_by(|left, right| left.submitted_at.cmp(&right.submitted_at));
        Ok(pending)
    }

    /// Approve a pending request, creating a claimed but unverified provider.
    pub fn approve_listing_request(
        &self,
        id: &ListingRequestId,
    ) -> Result<(ListingRequest, Provider), DirectoryServiceError> {
        let mut request = self.pending_request(id)?;
        let provider_id = self.unused_provider_id()?;
        let provider = self.providers.insert(request.to_provider(provider_id))?;

        request.status = ListingRequestStatus::Approved;
        request.reviewed_at = Some(Utc::now());
        request.provider_id = Some(provider.id.clone());
        self.listings.update(request.clone())?;

        info!(
            listing_request_id = %request.id,
            provider_id = %provider.id,
            "listing request approved"
        );
        Ok((request, provider))
    }

    pub fn reject_listing_request(
        &self,
        id: &ListingRequestId,
        reason: Option<String>,
    ) -> Result<ListingRequest, DirectoryServiceError> {
        let mut request = self.pending_request(id)?;
        request.status = ListingRequestStatus::Rejected;
        request.reviewed_at = Some(Utc::now());
        request.rejection_reason = reason.filter(|value| !value.trim().is_empty());
        self.listings.update(request.clone())?;

        info!(listing_request_id = %request.id, "listing request rejected");
        Ok(request)
    }

    /// Next sequence id not already held by the store, so seeded ids are skipped.
    fn unused_provider_id(&self) -> Result<ProviderId, DirectoryServiceError> {
        loop {
            let id = next_provider_id();
            if self.providers.fetch(&id)?.is_none() {
                return Ok(id);
            }
        }
    }

    fn pending_request(
        &self,
        id: &ListingRequestId,
    ) -> Result<ListingRequest, DirectoryServiceError> {
        let request = self
            .listings
            .fetch(id)?
            .ok_or_else(|| DirectoryServiceError::ListingNotFound(id.clone()))?;

        if request.status != ListingRequestStatus::Pending {
            return Err(DirectoryServiceError::InvalidTransition {
                id: id.clone(),
                status: request.status.label(),
            });
        }
        Ok(request)
    }
}

/// Error raised by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryServiceError {
    #[error("provider {0} not found")]
    ProviderNotFound(ProviderId),
    #[error("listing request {0} not found")]
    ListingNotFound(ListingRequestId),
    #[error("no Georgia county matches '{0}'")]
    CountyNotFound(String),
    #[error("provider {0} has already been claimed")]
    AlreadyClaimed(ProviderId),
    #[error("listing request {id} was already {status}")]
    InvalidTransition {
        id: ListingRequestId,
        status: &'static str,
    },
    #[error(transparent)]
    InvalidSubmission(#[from] SubmissionError),
    #[error(transparent)]
    InvalidClaim(#[from] ClaimError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
