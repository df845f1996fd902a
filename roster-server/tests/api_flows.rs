//! End-to-end API tests
//!
//! Drive the real router (auth middleware included) through tower's
//! `oneshot`, the same way a client would over HTTP.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_server::{Config, ServerState, api};

/// Build a fresh app over a temp work dir. The TempDir must be kept
/// alive for the duration of the test (uploads are written into it).
async fn test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await.expect("state");
    (dir, api::app(state))
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token in response").to_string()
}

fn employee_payload(email: &str) -> Value {
    json!({
        "email": email,
        "name": "Erin Example",
        "password": "longenough1",
        "job_title": "Caregiver",
        "department": "Home Care",
        "phone_number": "555-0101"
    })
}

async fn create_employee(app: &Router, admin_token: &str, email: &str) {
    let (status, _) = send(
        app,
        "POST",
        "/api/employees",
        Some(admin_token),
        Some(employee_payload(email)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn admin_bootstrap_create_and_list_employees() {
    let (_dir, app) = test_app().await;

    // Seeded admin can log in and gets an admin-role token
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@admin.com", "password": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");
    let token = body["token"].as_str().unwrap().to_string();

    create_employee(&app, &token, "e1@x.com").await;

    let (status, list) = send(&app, "GET", "/api/employees", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap().clone();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["email"], "e1@x.com");

    // No password material in any listing field
    let raw = serde_json::to_string(&list).unwrap();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("hash_pass"));
    assert!(!raw.contains("longenough1"));
}

#[tokio::test]
async fn employee_with_no_schedules_gets_empty_list() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;

    let token = login(&app, "e1@x.com", "longenough1").await;
    let (status, body) = send(&app, "GET", "/api/schedules", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn schedules_are_visible_only_to_their_employee() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;
    create_employee(&app, &admin, "e2@x.com").await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/schedules",
        Some(&admin),
        Some(json!({"employee_email": "e1@x.com", "details": {"day": "Mon"}})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["employee_email"], "e1@x.com");

    let e1 = login(&app, "e1@x.com", "longenough1").await;
    let (status, own) = send(&app, "GET", "/api/schedules", Some(&e1), None).await;
    assert_eq!(status, StatusCode::OK);
    let own = own.as_array().unwrap().clone();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["details"], json!({"day": "Mon"}));

    let e2 = login(&app, "e2@x.com", "longenough1").await;
    let (status, other) = send(&app, "GET", "/api/schedules", Some(&e2), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn short_password_creates_neither_profile_nor_identity() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;

    let mut payload = employee_payload("short@x.com");
    payload["password"] = json!("short");
    let (status, _) = send(&app, "POST", "/api/employees", Some(&admin), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No profile was created
    let (_, list) = send(&app, "GET", "/api/employees", Some(&admin), None).await;
    assert_eq!(list, json!([]));

    // And no identity either: the login is rejected outright
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "short@x.com", "password": "short"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn employee_cannot_record_hours_for_someone_else() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;
    create_employee(&app, &admin, "e2@x.com").await;

    let e1 = login(&app, "e1@x.com", "longenough1").await;
    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/e2@x.com/hours",
        Some(&e1),
        Some(json!({"date": "2026-08-03", "hours": 8.0})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // e2's ledger is untouched
    let (_, list) = send(&app, "GET", "/api/employees", Some(&admin), None).await;
    let e2 = list
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["email"] == "e2@x.com")
        .unwrap()
        .clone();
    assert_eq!(e2["work_hours"], json!({}));
}

#[tokio::test]
async fn self_and_admin_can_record_hours() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;

    // Admin writes for the employee
    let (status, body) = send(
        &app,
        "PUT",
        "/api/employees/e1@x.com/hours",
        Some(&admin),
        Some(json!({"date": "2026-08-03", "hours": 8.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["work_hours"]["2026-08-03"], json!(8.0));

    // The employee overwrites their own entry (last write wins)
    let e1 = login(&app, "e1@x.com", "longenough1").await;
    let (status, body) = send(
        &app,
        "PUT",
        "/api/employees/e1@x.com/hours",
        Some(&e1),
        Some(json!({"date": "2026-08-03", "hours": 6.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["work_hours"]["2026-08-03"], json!(6.5));

    // Unknown employee is a 404 even for admins
    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/ghost@x.com/hours",
        Some(&admin),
        Some(json!({"date": "2026-08-03", "hours": 8.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Bad date and bad hours are rejected before any write
    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/e1@x.com/hours",
        Some(&e1),
        Some(json!({"date": "03/08/2026", "hours": 8.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/e1@x.com/hours",
        Some(&e1),
        Some(json!({"date": "2026-08-04", "hours": -2.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_only_operations_reject_employee_tokens() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;
    let e1 = login(&app, "e1@x.com", "longenough1").await;

    let attempts: Vec<(&str, &str, Option<Value>)> = vec![
        ("POST", "/api/employees", Some(employee_payload("e9@x.com"))),
        ("GET", "/api/employees", None),
        (
            "POST",
            "/api/clients",
            Some(json!({"email": "c1@x.com", "name": "Client"})),
        ),
        ("GET", "/api/clients", None),
        (
            "POST",
            "/api/schedules",
            Some(json!({"employee_email": "e1@x.com", "details": {}})),
        ),
    ];

    for (method, path, body) in attempts {
        let (status, _) = send(&app, method, path, Some(&e1), body).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {path}");
    }

    // None of the denied calls mutated anything
    let (_, employees) = send(&app, "GET", "/api/employees", Some(&admin), None).await;
    assert_eq!(employees.as_array().unwrap().len(), 1);
    let (_, clients) = send(&app, "GET", "/api/clients", Some(&admin), None).await;
    assert_eq!(clients, json!([]));
    let (_, own) = send(&app, "GET", "/api/schedules", Some(&e1), None).await;
    assert_eq!(own, json!([]));
}

#[tokio::test]
async fn missing_token_is_401_and_bad_token_is_403() {
    let (_dir, app) = test_app().await;

    let (status, _) = send(&app, "GET", "/api/employees", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/employees", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Non-bearer authorization header counts as a bad token, not a missing one
    let request = Request::builder()
        .method("GET")
        .uri("/api/employees")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admins_have_no_schedule_view_of_their_own() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;

    let (status, _) = send(&app, "GET", "/api/schedules", Some(&admin), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/employees",
        Some(&admin),
        Some(employee_payload("e1@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, list) = send(&app, "GET", "/api/employees", Some(&admin), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn schedule_references_must_resolve() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;

    // Unknown employee
    let (status, _) = send(
        &app,
        "POST",
        "/api/schedules",
        Some(&admin),
        Some(json!({"employee_email": "ghost@x.com", "details": {"day": "Mon"}})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown client
    let (status, _) = send(
        &app,
        "POST",
        "/api/schedules",
        Some(&admin),
        Some(json!({
            "employee_email": "e1@x.com",
            "details": {"day": "Mon"},
            "client_email": "ghost@x.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Neither attempt appended a record
    let e1 = login(&app, "e1@x.com", "longenough1").await;
    let (_, own) = send(&app, "GET", "/api/schedules", Some(&e1), None).await;
    assert_eq!(own, json!([]));
}

#[tokio::test]
async fn clients_are_registered_and_linked_into_schedules() {
    let (_dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;

    let (status, client) = send(
        &app,
        "POST",
        "/api/clients",
        Some(&admin),
        Some(json!({
            "email": "c1@x.com",
            "name": "Casey Client",
            "services_needed": "weekly visit"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(client["email"], "c1@x.com");

    // Clients cannot log in: no identity is provisioned for them
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "c1@x.com", "password": "weekly visit"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, record) = send(
        &app,
        "POST",
        "/api/schedules",
        Some(&admin),
        Some(json!({
            "employee_email": "e1@x.com",
            "details": {"day": "Tue", "time": "09:00"},
            "client_email": "c1@x.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["client_email"], "c1@x.com");

    let (_, clients) = send(&app, "GET", "/api/clients", Some(&admin), None).await;
    assert_eq!(clients.as_array().unwrap().len(), 1);

    // Duplicate client email is rejected
    let (status, _) = send(
        &app,
        "POST",
        "/api/clients",
        Some(&admin),
        Some(json!({"email": "c1@x.com", "name": "Duplicate"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_rejects_wrong_password_and_me_echoes_claims() {
    let (_dir, app) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@admin.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let admin = login(&app, "admin@admin.com", "admin").await;
    create_employee(&app, &admin, "e1@x.com").await;
    let e1 = login(&app, "e1@x.com", "longenough1").await;

    let (status, me) = send(&app, "GET", "/api/auth/me", Some(&e1), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "e1@x.com");
    assert_eq!(me["role"], "employee");
}

#[tokio::test]
async fn health_is_public() {
    let (_dir, app) = test_app().await;
    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn photo_upload_returns_a_reference_under_uploads() {
    let (dir, app) = test_app().await;
    let admin = login(&app, "admin@admin.com", "admin").await;

    let boundary = "roster-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"photo\"; filename=\"me.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         not-really-a-png\r\n\
         --{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(header::AUTHORIZATION, format!("Bearer {admin}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let uploaded: Value = serde_json::from_slice(&bytes).unwrap();

    let url = uploaded["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));

    // The blob landed in the work dir under the same name
    let stored = dir
        .path()
        .join("uploads")
        .join(uploaded["filename"].as_str().unwrap());
    assert!(stored.exists());

    // The reference can be attached to a profile and comes back verbatim
    let mut payload = employee_payload("e1@x.com");
    payload["photo_url"] = json!(url);
    let (status, created) = send(&app, "POST", "/api/employees", Some(&admin), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["photo_url"], json!(url));
}
