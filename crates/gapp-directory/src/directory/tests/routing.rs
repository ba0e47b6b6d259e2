use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::config::DirectoryConfig;
use crate::directory::router::directory_router;
use crate::directory::service::DirectoryService;

fn router_with(providers: Vec<crate::directory::domain::Provider>) -> axum::Router {
    let (service, _, _) = build_service(providers);
    directory_router(Arc::new(service))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("json body")))
        .expect("request builds")
}

#[tokio::test]
async fn search_route_returns_ranked_page() {
    let router = router_with(vec![
        flagged("c", "C", &["Fulton"], true, false, true),
        flagged("a", "A", &["Fulton", "Cobb"], true, true, true),
        flagged("b", "B", &["Fulton"], true, true, false),
    ]);

    let response = router
        .oneshot(
            Request::get("/api/v1/providers?county=Fulton&service=all&page=1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let names: Vec<&str> = payload["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(payload["totalCount"], json!(3));
    assert_eq!(payload["totalPages"], json!(1));
    assert_eq!(payload["pageSize"], json!(12));
}

#[tokio::test]
async fn search_route_rejects_unknown_service() {
    let response = router_with(Vec::new())
        .oneshot(
            Request::get("/api/v1/providers?service=CNA")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn county_route_returns_not_found_for_unknown_slug() {
    let response = router_with(Vec::new())
        .oneshot(
            Request::get("/api/v1/counties/metropolis")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn county_list_contains_every_county() {
    let response = router_with(Vec::new())
        .oneshot(
            Request::get("/api/v1/counties")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(159));
}

#[tokio::test]
async fn admin_route_verifies_provider() {
    let response = router_with(vec![provider("p-1", "Pending Agency", &["Floyd"])])
        .oneshot(post_json("/api/v1/admin/providers/p-1/verify", json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["isVerified"], json!(true));
    assert_eq!(payload["acceptingNewPatients"], json!(true));
}

#[tokio::test]
async fn admin_route_rejects_unknown_action() {
    let response = router_with(vec![provider("p-1", "Pending Agency", &["Floyd"])])
        .oneshot(post_json("/api/v1/admin/providers/p-1/promote", json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn claim_route_conflicts_on_claimed_listing() {
    let router = router_with(vec![flagged("p-1", "Owned", &["Floyd"], true, false, false)]);
    let response = router
        .oneshot(post_json(
            "/api/v1/providers/p-1/claim",
            serde_json::to_value(claim()).expect("claim json"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn listing_submission_is_accepted_then_listed_for_review() {
    let (service, _, _) = build_service(Vec::new());
    let service = Arc::new(service);

    let response = directory_router(service.clone())
        .oneshot(post_json(
            "/api/v1/listing-requests",
            serde_json::to_value(submission()).expect("submission json"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], json!("pending"));

    let response = directory_router(service)
        .oneshot(
            Request::get("/api/v1/admin/listing-requests")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn invalid_listing_submission_is_unprocessable() {
    let mut invalid = submission();
    invalid.counties_served.clear();

    let response = router_with(Vec::new())
        .oneshot(post_json(
            "/api/v1/listing-requests",
            serde_json::to_value(invalid).expect("submission json"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn store_outage_maps_to_internal_error() {
    let service = DirectoryService::new(
        Arc::new(UnavailableProviders),
        Arc::new(MemoryListings::default()),
        DirectoryConfig::default(),
    );
    let response = directory_router(Arc::new(service))
        .oneshot(
            Request::get("/api/v1/providers")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
