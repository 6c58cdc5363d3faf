use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::applications::ProgramAdminService;

fn json_post(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn review_page_renders_html() {
    let (service, _, _) = build_service(application(Some("ada@example.com")));
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/admin/programs/3/applications/12?success=Application%20note%20updated")
                .header(header::HOST, "localhost:9000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let html = read_text_body(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Program: Utility Discount"));
    assert!(html.contains("cf-program-admin-status-update-form"));
    assert!(html.contains("Application note updated"));
    assert!(html.contains("/assets/admin_application_view.js"));
}

#[tokio::test]
async fn review_page_returns_not_found_for_unknown_application() {
    let (service, _, _) = build_service(application(None));
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/admin/programs/3/applications/404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_page_hides_repository_failures() {
    let service = ProgramAdminService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    );
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/admin/programs/3/applications/12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "internal server error");
}

fn form_post(uri: &str, body: &'static str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn update_status_route_applies_message() {
    let (service, repository, notifier) = build_service(application(Some("ada@example.com")));
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(json_post(
            "/admin/programs/3/applications/12/updateStatus",
            json!({
                "messageType": "UPDATE_STATUS",
                "programId": 3,
                "applicationId": 12,
                "currentStatus": "",
                "newStatus": "Approved",
                "sendEmail": true,
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "Approved");
    assert_eq!(payload["email_sent"], true);
    assert_eq!(
        payload["redirect"],
        "/admin/programs/3/applications/12?success=Application%20status%20updated"
    );
    assert_eq!(
        repository.stored(APPLICATION).latest_status.as_deref(),
        Some("Approved")
    );
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn update_status_route_reports_conflict_for_stale_edit() {
    let mut current = application(None);
    current.latest_status = Some("Denied".to_string());
    let (service, _, _) = build_service(current);
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(json_post(
            "/admin/programs/3/applications/12/updateStatus",
            json!({
                "programId": 3,
                "applicationId": 12,
                "currentStatus": "",
                "newStatus": "Approved",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_status_route_rejects_mismatched_ids() {
    let (service, _, _) = build_service(application(None));
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(json_post(
            "/admin/programs/3/applications/12/updateStatus",
            json!({
                "programId": 3,
                "applicationId": 13,
                "currentStatus": "",
                "newStatus": "Approved",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_note_route_stores_note() {
    let (service, repository, _) = build_service(application(None));
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(json_post(
            "/admin/programs/3/applications/12/updateNote",
            json!({
                "messageType": "EDIT_NOTE",
                "programId": 3,
                "applicationId": 12,
                "note": "Requested proof of address",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["note"], "Requested proof of address");
    assert_eq!(
        repository.stored(APPLICATION).note.as_deref(),
        Some("Requested proof of address")
    );
}

#[tokio::test]
async fn update_routes_accept_modal_form_fields() {
    let (service, repository, notifier) = build_service(application(Some("ada@example.com")));
    let router = admin_router_with_service(service);

    let response = router
        .clone()
        .oneshot(form_post(
            "/admin/programs/3/applications/12/updateStatus",
            "programId=3&applicationId=12&currentStatus=&newStatus=Approved",
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["email_sent"], false);
    assert!(notifier.sent().is_empty());

    let response = router
        .clone()
        .oneshot(form_post(
            "/admin/programs/3/applications/12/updateNote",
            "programId=3&applicationId=12&note=Called+applicant%2C+left+voicemail",
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let stored = repository.stored(APPLICATION);
    assert_eq!(stored.latest_status.as_deref(), Some("Approved"));
    assert_eq!(stored.note.as_deref(), Some("Called applicant, left voicemail"));

    let response = router
        .oneshot(form_post(
            "/admin/programs/3/applications/12/updateStatus",
            "applicationId=12&newStatus=Denied",
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await["error"],
        "bad request: missing form field `programId`"
    );
}

#[tokio::test]
async fn serves_admin_script() {
    let (service, _, _) = build_service(application(None));
    let router = admin_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/assets/admin_application_view.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/javascript; charset=utf-8"
    );
    let script = read_text_body(response).await;
    assert!(script.contains("cf-program-admin-edit-note-form"));
    assert!(script.contains("postMessage"));
}
