use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use biteright_core::{CoreConfig, DashboardStore};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::router;

fn app() -> Router {
    router(DashboardStore::new(Arc::new(CoreConfig::default())))
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "http://localhost:3001");
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|b| b.to_string());
    let (status, _, bytes) = send_raw(app, method, uri, body.as_deref()).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn seed_income() -> Value {
    json!({
        "type": "income",
        "category": "equity",
        "description": "seed",
        "amount": 600000,
        "date": "2024-01-01"
    })
}

fn new_patient() -> Value {
    json!({
        "name": "Kavya Desai",
        "phone": "9833333333",
        "treatment": "Orthodontic braces",
        "amount": "45000",
        "paid": 5000,
        "emiCount": "6"
    })
}

#[tokio::test]
async fn landing_page_is_html() {
    let app = app();
    let (status, headers, body) = send_raw(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(String::from_utf8(body).unwrap().contains("BiteRight HQ"));
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn initial_state() {
    let (status, body) = send(&app(), Method::GET, "/api/state", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentStage"], 1);
    assert_eq!(body["funding"]["equity"], 600000.0);
    assert_eq!(body["funding"]["subsidyAmount"], 425000.0);
    assert_eq!(body["targets"]["generalPerDay"], 1);
    assert_eq!(
        body["finances"],
        json!({"totalIncome": 0.0, "totalExpenses": 0.0, "profit": 0.0})
    );

    let stages = body["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 4);
    assert_eq!(stages[0]["unlocked"], true);
    assert_eq!(stages[0]["completed"], false);
    for stage in &stages[1..] {
        assert_eq!(stage["unlocked"], false);
        assert_eq!(stage["completed"], false);
    }
    assert_eq!(stages[1]["unlockRequirement"], "PMEGP Application ID required");
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = app();
    let (_, headers, _) = send_raw(&app, Method::GET, "/api/stages", None).await;
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn complete_stage_unlocks_the_next() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/stages/1/complete", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["stages"][0]["completed"], true);
    assert_eq!(body["stages"][1]["unlocked"], true);

    let (_, state) = send(&app, Method::GET, "/api/state", None).await;
    assert_eq!(state["currentStage"], 2);
}

#[tokio::test]
async fn complete_unknown_stage_is_404_and_changes_nothing() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/api/stages", None).await;

    let (status, body) = send(&app, Method::POST, "/api/stages/99/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Stage not found"}));

    let (_, after) = send(&app, Method::GET, "/api/stages", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn non_numeric_stage_id_is_not_a_route() {
    let (status, body) = send(&app(), Method::POST, "/api/stages/one/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn undecodable_path_segments_are_json_404s() {
    let app = app();
    let cases = [
        (Method::POST, "/api/stages/%FF/complete"),
        (Method::PATCH, "/api/stages/1/checklist/%FF"),
        (Method::PATCH, "/api/patients/%FF"),
    ];
    for (method, uri) in cases {
        let (status, headers, bytes) = send_raw(&app, method, uri, Some("{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json"));
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Not found"}));
    }

    let (_, stages) = send(&app, Method::GET, "/api/stages", None).await;
    assert_eq!(stages[0]["checklist"][0]["completed"], false);
}

#[tokio::test]
async fn toggling_the_whole_checklist_completes_the_stage() {
    let app = app();
    for item in ["3-1", "3-2"] {
        let uri = format!("/api/stages/3/checklist/{item}");
        let (status, body) = send(&app, Method::PATCH, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stage"]["completed"], false);
    }

    let (status, body) = send(&app, Method::PATCH, "/api/stages/3/checklist/3-3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["stage"]["id"], 3);
    assert_eq!(body["stage"]["completed"], true);

    let (_, state) = send(&app, Method::GET, "/api/state", None).await;
    assert_eq!(state["stages"][3]["unlocked"], true);
    assert_eq!(state["currentStage"], 4);
}

#[tokio::test]
async fn toggle_flips_only_the_target() {
    let app = app();
    let (_, body) = send(&app, Method::PATCH, "/api/stages/2/checklist/2-2", None).await;

    let items = body["stage"]["checklist"].as_array().unwrap();
    let flags: Vec<bool> = items
        .iter()
        .map(|item| item["completed"].as_bool().unwrap())
        .collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[tokio::test]
async fn toggle_unknown_item_or_stage_is_404() {
    let app = app();
    let (status, body) = send(&app, Method::PATCH, "/api/stages/1/checklist/9-9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Checklist item not found");

    let (status, body) = send(&app, Method::PATCH, "/api/stages/7/checklist/7-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Stage not found");
}

#[tokio::test]
async fn seed_income_updates_the_summary() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/finances", Some(seed_income())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["transaction"]["type"], "income");
    assert_eq!(body["transaction"]["amount"], 600000.0);
    assert!(!body["transaction"]["id"].as_str().unwrap().is_empty());

    let (_, finances) = send(&app, Method::GET, "/api/finances", None).await;
    assert_eq!(finances["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(
        finances["summary"],
        json!({"totalIncome": 600000.0, "totalExpenses": 0.0, "profit": 600000.0})
    );
}

#[tokio::test]
async fn invalid_transactions_are_400_and_not_recorded() {
    let app = app();

    let mut refund = seed_income();
    refund["type"] = json!("refund");
    let (status, body) = send(&app, Method::POST, "/api/finances", Some(refund)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Type must be \"income\" or \"expense\"");

    let (status, body) = send(&app, Method::POST, "/api/finances", Some(json!({"type": "expense"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: type, category, description, amount, date"
    );

    let (_, finances) = send(&app, Method::GET, "/api/finances", None).await;
    assert!(finances["transactions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app();
    for uri in ["/api/finances", "/api/patients"] {
        for raw in ["{not json", "null", "[1, 2]"] {
            let (status, _, bytes) = send_raw(&app, Method::POST, uri, Some(raw)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {raw}");
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({"error": "Invalid JSON body"}));
        }
    }
}

#[tokio::test]
async fn patients_can_be_added_and_listed() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/patients", Some(new_patient())).await;

    assert_eq!(status, StatusCode::OK);
    let patient = &body["patient"];
    assert_eq!(patient["amount"], 45000.0);
    assert_eq!(patient["paid"], 5000.0);
    assert_eq!(patient["emiCount"], 6);
    assert_eq!(patient["emiPaid"], 0);
    assert!(patient["createdAt"].as_str().is_some());

    let (_, list) = send(&app, Method::GET, "/api/patients", None).await;
    assert_eq!(list["patients"][0], *patient);
}

#[tokio::test]
async fn add_patient_requires_core_fields() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/patients",
        Some(json!({"name": "No Phone", "treatment": "Scaling", "amount": 1200})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: name, phone, treatment, amount"
    );
}

#[tokio::test]
async fn patch_patient_merges_supplied_fields() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/patients", Some(new_patient())).await;
    let before = created["patient"].clone();
    let uri = format!("/api/patients/{}", before["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"emiPaid": 1, "paid": 12500}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let mut expected = before.clone();
    expected["emiPaid"] = json!(1);
    expected["paid"] = json!(12500.0);
    assert_eq!(body["patient"], expected);
}

#[tokio::test]
async fn patch_patient_rejects_identity_fields() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/patients", Some(new_patient())).await;
    let uri = format!("/api/patients/{}", created["patient"]["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"id": "hijack"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unknown field `id`"));

    let (_, list) = send(&app, Method::GET, "/api/patients", None).await;
    assert_eq!(list["patients"][0], created["patient"]);
}

#[tokio::test]
async fn patch_unknown_patient_is_404() {
    let (status, body) = send(
        &app(),
        Method::PATCH,
        "/api/patients/does-not-exist",
        Some(json!({"paid": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Patient not found"}));
}

#[tokio::test]
async fn options_is_an_empty_200_anywhere() {
    let app = app();
    for uri in ["/api/state", "/api/patients/abc", "/nowhere"] {
        let (status, _, body) = send_raw(&app, Method::OPTIONS, uri, None).await;
        assert_eq!(status, StatusCode::OK, "uri {uri}");
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn unknown_routes_and_methods_are_404() {
    let app = app();
    let cases = [
        (Method::GET, "/api/unknown"),
        (Method::DELETE, "/api/stages"),
        (Method::GET, "/api/stages/1/complete"),
        (Method::PUT, "/api/patients/abc"),
    ];
    for (method, uri) in cases {
        let (status, body) = send(&app, method.clone(), uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, json!({"error": "Not found"}));
    }
}

#[tokio::test]
async fn openapi_document_lists_the_dashboard_routes() {
    let (status, body) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/state"));
    assert!(paths.contains_key("/api/stages/{id}/checklist/{item_id}"));
    assert!(paths.contains_key("/api/patients/{id}"));
}
