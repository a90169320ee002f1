//! HTTP-level integration tests for the entity CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. The store handle is cloned per request
//! so all requests in a test share state.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, created_body, delete, get, patch, patch_json, post_json};
use deadlinedash_db::Db;

/// A due date `days` from now, formatted for JSON bodies.
fn due_in(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).to_string()
}

async fn create_project(db: &Db, name: &str) -> i64 {
    let json = created_body(
        post_json(
            common::build_test_app(db.clone()),
            "/api/projects",
            serde_json::json!({"name": name, "userId": 1, "dueDate": due_in(30)}),
        )
        .await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

async fn create_deliverable(db: &Db, project_id: i64, name: &str) -> i64 {
    let json = created_body(
        post_json(
            common::build_test_app(db.clone()),
            "/api/deliverables",
            serde_json::json!({"projectId": project_id, "name": name}),
        )
        .await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

async fn create_task(db: &Db, deliverable_id: i64, name: &str) -> i64 {
    let json = created_body(
        post_json(
            common::build_test_app(db.clone()),
            "/api/tasks",
            serde_json::json!({
                "deliverableId": deliverable_id,
                "name": name,
                "dueDate": due_in(7),
                "priority": 2,
                "estimatedMinutes": 60,
            }),
        )
        .await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_returns_201_with_camel_case_fields() {
    let app = common::build_test_app(Db::new());
    let response = post_json(
        app,
        "/api/projects",
        serde_json::json!({
            "name": "Databases final",
            "description": "Query optimizer writeup",
            "userId": 1,
            "dueDate": "2026-12-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Databases final");
    assert_eq!(json["userId"], 1);
    assert_eq!(json["dueDate"], "2026-12-01");
    assert!(json["id"].is_number());
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn create_project_with_empty_name_returns_400() {
    let app = common::build_test_app(Db::new());
    let response = post_json(
        app,
        "/api/projects",
        serde_json::json!({"name": "", "userId": 1, "dueDate": due_in(30)}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn get_project_by_id() {
    let db = Db::new();
    let id = create_project(&db, "Get Me").await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
}

#[tokio::test]
async fn get_nonexistent_project_returns_404() {
    let app = common::build_test_app(Db::new());
    let response = get(app, "/api/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn patch_project_updates_only_given_fields() {
    let db = Db::new();
    let id = create_project(&db, "Original").await;

    let response = patch_json(
        common::build_test_app(db.clone()),
        &format!("/api/projects/{id}"),
        serde_json::json!({"name": "Updated"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    // Due date was not in the patch body and must survive.
    assert_eq!(json["dueDate"], due_in(30));
}

#[tokio::test]
async fn delete_project_returns_204_then_404() {
    let db = Db::new();
    let id = create_project(&db, "Delete Me").await;

    let response = delete(
        common::build_test_app(db.clone()),
        &format!("/api/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_projects_filters_by_user() {
    let db = Db::new();
    create_project(&db, "P1").await;
    create_project(&db, "P2").await;

    let response = get(common::build_test_app(db.clone()), "/api/projects?userId=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let response = get(common::build_test_app(db), "/api/projects?userId=2").await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_projects_without_user_id_returns_400() {
    let app = common::build_test_app(Db::new());
    let response = get(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Deliverables
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_deliverable_and_list_by_project() {
    let db = Db::new();
    let project_id = create_project(&db, "With Deliverables").await;

    let response = post_json(
        common::build_test_app(db.clone()),
        "/api/deliverables",
        serde_json::json!({"projectId": project_id, "name": "Final report", "points": 20}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Final report");
    assert_eq!(json["points"], 20);
    assert_eq!(json["completed"], false);

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/deliverables"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_deliverable_for_unknown_project_returns_404() {
    let app = common::build_test_app(Db::new());
    let response = post_json(
        app,
        "/api/deliverables",
        serde_json::json!({"projectId": 999, "name": "Orphan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_task_defaults_priority_to_low() {
    let db = Db::new();
    let project_id = create_project(&db, "Task Project").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;

    let response = post_json(
        common::build_test_app(db),
        "/api/tasks",
        serde_json::json!({
            "deliverableId": deliverable_id,
            "name": "No priority given",
            "dueDate": due_in(7),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["priority"], 1);
    assert_eq!(json["completed"], false);
}

#[tokio::test]
async fn create_task_with_out_of_range_priority_returns_400() {
    let db = Db::new();
    let project_id = create_project(&db, "Task Project").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;

    let response = post_json(
        common::build_test_app(db),
        "/api/tasks",
        serde_json::json!({
            "deliverableId": deliverable_id,
            "name": "Too urgent",
            "dueDate": due_in(7),
            "priority": 9,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn toggle_task_flips_completed() {
    let db = Db::new();
    let project_id = create_project(&db, "Toggle Project").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;
    let task_id = create_task(&db, deliverable_id, "Flip me").await;

    let response = patch(
        common::build_test_app(db.clone()),
        &format!("/api/tasks/{task_id}/toggle"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["completed"], true);

    // Toggling again restores the original state.
    let response = patch(
        common::build_test_app(db),
        &format!("/api/tasks/{task_id}/toggle"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["completed"], false);
}

#[tokio::test]
async fn toggle_unknown_task_returns_404() {
    let app = common::build_test_app(Db::new());
    let response = patch(app, "/api/tasks/424242/toggle").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn completing_all_tasks_marks_deliverable_completed() {
    let db = Db::new();
    let project_id = create_project(&db, "Cascade Project").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;
    let task_id = create_task(&db, deliverable_id, "Only task").await;

    patch(
        common::build_test_app(db.clone()),
        &format!("/api/tasks/{task_id}/toggle"),
    )
    .await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/deliverables"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json[0]["completed"], true);
}

#[tokio::test]
async fn list_tasks_by_deliverable() {
    let db = Db::new();
    let project_id = create_project(&db, "List Project").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;
    create_task(&db, deliverable_id, "First").await;
    create_task(&db, deliverable_id, "Second").await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/deliverables/{deliverable_id}/tasks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

#[tokio::test]
async fn availability_defaults_to_weekdays_when_unset() {
    let db = Db::new();
    let project_id = create_project(&db, "Default Availability").await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/availability"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["monday"], true);
    assert_eq!(json["friday"], true);
    assert_eq!(json["saturday"], false);
    assert_eq!(json["hoursPerDay"], 2);
}

#[tokio::test]
async fn availability_upsert_then_read_back() {
    let db = Db::new();
    let project_id = create_project(&db, "Weekend Worker").await;

    let response = post_json(
        common::build_test_app(db.clone()),
        "/api/availability",
        serde_json::json!({
            "projectId": project_id,
            "monday": false,
            "tuesday": false,
            "wednesday": false,
            "thursday": false,
            "friday": false,
            "saturday": true,
            "sunday": true,
            "hoursPerDay": 6,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/availability"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["saturday"], true);
    assert_eq!(json["monday"], false);
    assert_eq!(json["hoursPerDay"], 6);
}

#[tokio::test]
async fn availability_with_invalid_hours_returns_400() {
    let db = Db::new();
    let project_id = create_project(&db, "Too Many Hours").await;

    let response = post_json(
        common::build_test_app(db),
        "/api/availability",
        serde_json::json!({"projectId": project_id, "hoursPerDay": 25}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Project views: details, progress, schedule
// ---------------------------------------------------------------------------

#[tokio::test]
async fn details_returns_nested_view() {
    let db = Db::new();
    let project_id = create_project(&db, "Detailed").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;
    create_task(&db, deliverable_id, "A task").await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/details"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // Project fields are flattened to the top level.
    assert_eq!(json["name"], "Detailed");
    assert_eq!(json["deliverables"][0]["name"], "Deliverable");
    assert_eq!(json["deliverables"][0]["tasks"][0]["name"], "A task");
    assert_eq!(json["availability"]["monday"], true);
}

#[tokio::test]
async fn progress_counts_completed_tasks() {
    let db = Db::new();
    let project_id = create_project(&db, "Progress").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;
    let done = create_task(&db, deliverable_id, "Done").await;
    create_task(&db, deliverable_id, "Pending").await;

    patch(
        common::build_test_app(db.clone()),
        &format!("/api/tasks/{done}/toggle"),
    )
    .await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/progress"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["completed"], 1);
    assert_eq!(json["total"], 2);
    assert_eq!(json["percentage"], 50);
}

#[tokio::test]
async fn progress_of_empty_project_is_zero() {
    let db = Db::new();
    let project_id = create_project(&db, "Empty").await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/progress"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["completed"], 0);
    assert_eq!(json["total"], 0);
    assert_eq!(json["percentage"], 0);
}

#[tokio::test]
async fn schedule_groups_tasks_by_due_date() {
    let db = Db::new();
    let project_id = create_project(&db, "Scheduled").await;
    let deliverable_id = create_deliverable(&db, project_id, "Deliverable").await;
    create_task(&db, deliverable_id, "First").await;
    create_task(&db, deliverable_id, "Second").await;

    let response = get(
        common::build_test_app(db),
        &format!("/api/projects/{project_id}/schedule"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // Both tasks share a due date, so there is exactly one group.
    let groups = json.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["tasks"].as_array().unwrap().len(), 2);
    assert_eq!(groups[0]["isToday"], false);
    assert_eq!(groups[0]["tasks"][0]["deliverableName"], "Deliverable");
}
