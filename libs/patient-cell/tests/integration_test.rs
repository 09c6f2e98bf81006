use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::json;
use tower::ServiceExt;

use patient_cell::handlers::PatientState;
use patient_cell::router::patient_routes;
use patient_cell::services::contacts::ContactBook;
use patient_cell::services::pharmacy::{MedicationSchedule, PrescriptionShelf};
use patient_cell::services::records::PatientRegistry;
use patient_cell::services::vitals::VitalsLog;

fn create_test_app() -> Router {
    patient_routes(Arc::new(PatientState {
        registry: PatientRegistry::new(),
        contacts: ContactBook::seeded(),
        vitals: VitalsLog::seeded(Utc::now()),
        prescriptions: PrescriptionShelf::seeded(),
        schedule: MedicationSchedule::seeded(),
    }))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_registration_then_profile() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({
                "name": "Asha",
                "age": 34,
                "gender": "female",
                "phone": "+91 98765 43210",
                "address": "123 Main St"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/profile")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json_response = body_json(response).await;
    assert_eq!(json_response["name"], "Asha");
}

#[tokio::test]
async fn test_registration_without_required_fields() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/", json!({ "name": "", "phone": "  " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json_response = body_json(response).await;
    let message = json_response["error"].as_str().unwrap();
    assert!(message.contains("name"));
    assert!(message.contains("phone"));
}

#[tokio::test]
async fn test_profile_before_onboarding_is_404() {
    let app = create_test_app();
    let response = app.oneshot(get("/profile")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_lifecycle() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/contacts",
            json!({ "name": "Meera", "phone": "+91 98765 43212" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let added = body_json(response).await;

    let response = app.clone().oneshot(get("/contacts")).await.unwrap();
    let listing = body_json(response).await;
    assert_eq!(listing["total"], 3);

    let request = Request::builder()
        .method("DELETE")
        .uri(&format!("/contacts/{}", added["id"].as_str().unwrap()))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/contacts")).await.unwrap();
    assert_eq!(body_json(response).await["total"], 2);
}

#[tokio::test]
async fn test_vitals_seed_and_update() {
    let app = create_test_app();

    let response = app.clone().oneshot(get("/vitals")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["systolic"], 120);

    let response = app
        .clone()
        .oneshot(post_json(
            "/vitals",
            json!({
                "systolic": 118,
                "diastolic": 76,
                "heart_rate_bpm": 68,
                "weight_kg": 69.5,
                "temperature_celsius": 36.8,
                "steps": 9200
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/vitals")).await.unwrap();
    assert_eq!(body_json(response).await["heart_rate_bpm"], 68);
}

#[tokio::test]
async fn test_prescriptions_listing() {
    let app = create_test_app();

    let response = app.oneshot(get("/prescriptions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = body_json(response).await;
    assert_eq!(json_response["total"], 2);
    assert_eq!(json_response["prescriptions"][0]["medication"], "Amoxicillin");
}

#[tokio::test]
async fn test_reminder_add_and_toggle() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/reminders",
            json!({ "medication": "Ibuprofen", "time": "20:00" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let added = body_json(response).await;
    assert_eq!(added["status"], "pending");

    let request = Request::builder()
        .method("PATCH")
        .uri(&format!("/reminders/{}/toggle", added["id"].as_str().unwrap()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "completed");
}

#[tokio::test]
async fn test_reminder_missing_fields_are_listed() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/reminders", json!({ "frequency": "Daily" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json_response = body_json(response).await;
    let message = json_response["error"].as_str().unwrap();
    assert!(message.contains("medication"));
    assert!(message.contains("time"));
}
