mod common;

use axum::http::StatusCode;
use common::{
    auth_json_request, auth_request, bare_request, json_request, register_and_login,
    response_json, send, setup_test_app, unique_username,
};
use serde_json::json;
use sqlx::SqlitePool;

async fn create_student(
    app: &axum::Router,
    token: &str,
    name: &str,
    course: &str,
    year_level: i64,
    email: &str,
) -> i64 {
    let body = json!({
        "student_name": name,
        "course": course,
        "year_level": year_level,
        "email": email
    });
    let response = send(app, auth_json_request("POST", "/api/students", token, &body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    let message = body["message"].as_str().unwrap();
    // "student <id> created successfully"
    message
        .split_whitespace()
        .nth(1)
        .unwrap()
        .parse()
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn full_student_lifecycle(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;

    let id = create_student(&app, &token, "A", "CS", 1, "a@b.com").await;

    // The created record reads back field-for-field.
    let response = send(&app, bare_request("GET", &format!("/api/student/{id}"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let record = response_json(response).await;
    assert_eq!(record["student_name"], "A");
    assert_eq!(record["course"], "CS");
    assert_eq!(record["year_level"], 1);
    assert_eq!(record["email"], "a@b.com");

    // Partial update touches only the named field.
    let response = send(
        &app,
        auth_json_request(
            "PUT",
            &format!("/api/student/{id}"),
            &token,
            &json!({ "year_level": 2 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, bare_request("GET", &format!("/api/student/{id}"))).await;
    let record = response_json(response).await;
    assert_eq!(record["year_level"], 2);
    assert_eq!(record["student_name"], "A");
    assert_eq!(record["course"], "CS");
    assert_eq!(record["email"], "a@b.com");

    // Delete, then the record is gone.
    let response = send(
        &app,
        auth_request("DELETE", &format!("/api/student/{id}"), &token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, bare_request("GET", &format!("/api/student/{id}"))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_inserted_records_and_filters_by_substring(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;

    let id = create_student(&app, &token, "Ana Santos", "Computer Science", 2, "ana@psu.edu").await;
    create_student(&app, &token, "Ben Cruz", "Biology", 3, "ben@psu.edu").await;

    // Unfiltered list contains the inserted record.
    let response = send(&app, bare_request("GET", "/api/students")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let all = response_json(response).await;
    assert!(
        all.as_array()
            .unwrap()
            .iter()
            .any(|s| s["id"].as_i64() == Some(id))
    );

    // Substring filter returns only matching rows.
    let response = send(&app, bare_request("GET", "/api/students?course=Computer")).await;
    let filtered = response_json(response).await;
    let filtered = filtered.as_array().unwrap();
    assert!(!filtered.is_empty());
    for student in filtered {
        assert!(student["course"].as_str().unwrap().contains("Computer"));
    }

    // Exact year_level filter.
    let response = send(&app, bare_request("GET", "/api/students?year_level=3")).await;
    let filtered = response_json(response).await;
    for student in filtered.as_array().unwrap() {
        assert_eq!(student["year_level"], 3);
    }

    // Filters combine with AND; a disjoint pair matches nothing.
    let response = send(
        &app,
        bare_request("GET", "/api/students?course=Computer&year_level=3"),
    )
    .await;
    let filtered = response_json(response).await;
    assert!(filtered.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_year_level_filter_is_ignored(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;

    let id = create_student(&app, &token, "Ana", "CS", 2, "ana@psu.edu").await;

    // An empty value behaves like an absent filter, not a rejection.
    let response = send(&app, bare_request("GET", "/api/students?year_level=")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let all = response_json(response).await;
    assert!(
        all.as_array()
            .unwrap()
            .iter()
            .any(|s| s["id"].as_i64() == Some(id))
    );

    // Same for a value that does not parse as a number.
    let response = send(&app, bare_request("GET", "/api/students?year_level=abc")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let all = response_json(response).await;
    assert!(
        all.as_array()
            .unwrap()
            .iter()
            .any(|s| s["id"].as_i64() == Some(id))
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn get_nonexistent_student_is_404(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let response = send(&app, bare_request("GET", "/api/student/9999")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "student not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn writes_without_token_are_401(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let payload = json!({
        "student_name": "Test",
        "course": "CS",
        "year_level": 1,
        "email": "t@psu.edu"
    });

    let create = send(&app, json_request("POST", "/api/students", &payload)).await;
    let update = send(&app, json_request("PUT", "/api/student/1", &payload)).await;
    let delete = send(&app, bare_request("DELETE", "/api/student/1")).await;

    assert_eq!(create.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(update.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(delete.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn garbage_token_is_401(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let payload = json!({
        "student_name": "Test",
        "course": "CS",
        "year_level": 1,
        "email": "t@psu.edu"
    });

    let response = send(
        &app,
        auth_json_request("POST", "/api/students", "not-a-jwt", &payload),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_with_missing_field_is_400(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;

    let response = send(
        &app,
        auth_json_request(
            "POST",
            "/api/students",
            &token,
            &json!({ "student_name": "Test", "course": "CS" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_with_invalid_email_is_400(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;

    let response = send(
        &app,
        auth_json_request(
            "POST",
            "/api/students",
            &token,
            &json!({
                "student_name": "Test",
                "course": "CS",
                "year_level": 1,
                "email": "invalid-email"
            }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "invalid email format");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_nonexistent_id_is_404_before_validation(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;

    // Empty payload would normally be a 400; the unknown id wins.
    let response = send(
        &app,
        auth_json_request("PUT", "/api/student/9999", &token, &json!({})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_with_no_recognized_fields_is_400(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;
    let id = create_student(&app, &token, "Test", "CS", 1, "t@psu.edu").await;

    // Unknown keys are ignored, leaving nothing to update.
    let response = send(
        &app,
        auth_json_request(
            "PUT",
            &format!("/api/student/{id}"),
            &token,
            &json!({ "nickname": "T" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "no fields to update");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_with_invalid_email_is_400(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;
    let id = create_student(&app, &token, "Test", "CS", 1, "t@psu.edu").await;

    let response = send(
        &app,
        auth_json_request(
            "PUT",
            &format!("/api/student/{id}"),
            &token,
            &json!({ "email": "no-at-sign" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_is_not_idempotent(pool: SqlitePool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app, &unique_username(), "p1").await;
    let id = create_student(&app, &token, "Test", "CS", 1, "t@psu.edu").await;

    let first = send(
        &app,
        auth_request("DELETE", &format!("/api/student/{id}"), &token),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = send(
        &app,
        auth_request("DELETE", &format!("/api/student/{id}"), &token),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}
