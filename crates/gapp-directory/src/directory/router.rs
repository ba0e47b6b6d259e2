use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::county::CountySummary;
use super::domain::{ProviderId, ServiceFilter};
use super::engine::{DirectoryFilters, DirectoryQuery, DirectorySort};
use super::lifecycle::{AdminAction, ClaimRequest};
use super::listing::{ListingRequestId, ListingSubmission};
use super::service::{DirectoryService, DirectoryServiceError};
use super::store::{ListingRequestStore, ProviderStore, StoreError};
use crate::reference;

const MAX_PAGE_SIZE: usize = 100;

/// Router builder exposing directory, county, listing, claim, and admin endpoints.
pub fn directory_router<P, L>(service: Arc<DirectoryService<P, L>>) -> Router
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    Router::new()
        .route("/api/v1/providers", get(search_handler::<P, L>))
        .route(
            "/api/v1/providers/:provider_id",
            get(provider_handler::<P, L>),
        )
        .route(
            "/api/v1/providers/:provider_id/claim",
            post(claim_handler::<P, L>),
        )
        .route("/api/v1/counties", get(counties_handler))
        .route("/api/v1/counties/:slug", get(county_handler::<P, L>))
        .route("/api/v1/faq", get(faq_handler))
        .route(
            "/api/v1/listing-requests",
            post(submit_listing_handler::<P, L>),
        )
        .route(
            "/api/v1/admin/listing-requests",
            get(pending_listings_handler::<P, L>),
        )
        .route(
            "/api/v1/admin/listing-requests/:request_id/approve",
            post(approve_listing_handler::<P, L>),
        )
        .route(
            "/api/v1/admin/listing-requests/:request_id/reject",
            post(reject_listing_handler::<P, L>),
        )
        .route(
            "/api/v1/admin/providers/:provider_id/:action",
            post(admin_action_handler::<P, L>),
        )
        .with_state(service)
}

/// Query string accepted by the directory search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderSearchParams {
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<DirectorySort>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RejectListingRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

pub(crate) async fn search_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Query(params): Query<ProviderSearchParams>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    let service_filter = match params
        .service
        .as_deref()
        .map(str::parse::<ServiceFilter>)
        .transpose()
    {
        Ok(filter) => filter.unwrap_or_default(),
        Err(err) => return error_payload(StatusCode::BAD_REQUEST, err.to_string()),
    };

    let page_size = params
        .page_size
        .unwrap_or(service.config().page_size)
        .clamp(1, MAX_PAGE_SIZE);
    let query = DirectoryQuery {
        filters: DirectoryFilters {
            county: params.county,
            service: service_filter,
            search_text: params.search,
        },
        sort: params.sort.unwrap_or_default(),
        page: params.page.unwrap_or(1).max(1),
        page_size,
    };

    match service.search(&query) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn provider_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Path(provider_id): Path<String>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    match service.provider(&ProviderId(provider_id)) {
        Ok(provider) => (StatusCode::OK, Json(provider)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn claim_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Path(provider_id): Path<String>,
    Json(claim): Json<ClaimRequest>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    match service.claim_provider(&ProviderId(provider_id), claim) {
        Ok(provider) => (StatusCode::OK, Json(provider)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn counties_handler() -> Json<Vec<CountySummary>> {
    Json(
        reference::all_counties()
            .iter()
            .map(CountySummary::from)
            .collect(),
    )
}

pub(crate) async fn county_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    match service.county_page(&slug, params.page.unwrap_or(1).max(1)) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn faq_handler() -> Json<&'static [reference::FaqEntry]> {
    Json(reference::faq_entries())
}

pub(crate) async fn submit_listing_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Json(submission): Json<ListingSubmission>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    match service.submit_listing_request(submission) {
        Ok(request) => (StatusCode::ACCEPTED, Json(request)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn pending_listings_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    match service.pending_listing_requests() {
        Ok(requests) => (StatusCode::OK, Json(requests)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn approve_listing_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Path(request_id): Path<String>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    match service.approve_listing_request(&ListingRequestId(request_id)) {
        Ok((request, provider)) => (
            StatusCode::OK,
            Json(json!({ "request": request, "provider": provider })),
        )
            .into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn reject_listing_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Path(request_id): Path<String>,
    body: Option<Json<RejectListingRequest>>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    let reason = body.and_then(|Json(body)| body.reason);
    match service.reject_listing_request(&ListingRequestId(request_id), reason) {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn admin_action_handler<P, L>(
    State(service): State<Arc<DirectoryService<P, L>>>,
    Path((provider_id, action)): Path<(String, String)>,
) -> Response
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    let action = match action.parse::<AdminAction>() {
        Ok(action) => action,
        Err(err) => return error_payload(StatusCode::NOT_FOUND, err.to_string()),
    };

    match service.apply_admin_action(&ProviderId(provider_id), action) {
        Ok(provider) => (StatusCode::OK, Json(provider)).into_response(),
        Err(err) => service_error_response(err),
    }
}

impl DirectoryServiceError {
    /// HTTP status reported for this error by the directory endpoints.
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryServiceError::ProviderNotFound(_)
            | DirectoryServiceError::ListingNotFound(_)
            | DirectoryServiceError::CountyNotFound(_)
            | DirectoryServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            DirectoryServiceError::AlreadyClaimed(_)
            | DirectoryServiceError::InvalidTransition { .. }
            | DirectoryServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
            DirectoryServiceError::InvalidSubmission(_)
            | DirectoryServiceError::InvalidClaim(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DirectoryServiceError::Store(StoreError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

fn service_error_response(err: DirectoryServiceError) -> Response {
    error_payload(err.status_code(), err.to_string())
}

fn error_payload(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
