mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_empty_table(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "[]");
}

#[sqlx::test]
async fn test_list_users_in_id_order(pool: PgPool) {
    common::add_users(&pool, 3).await;
    let server = common::make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], json!({"id": 1, "name": "User 0", "timespent": 10.0}));
    assert_eq!(items[2]["id"], 3);
}

#[sqlx::test]
async fn test_list_users_pagination(pool: PgPool) {
    common::add_users(&pool, 15).await;
    let server = common::make_server(pool);

    let page = server.get("/users?count=5&start=3").await.json::<Value>();
    let ids: Vec<i64> = page
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 5, 6, 7, 8]);

    for query in ["/users?count=0", "/users?count=-2", "/users?count=11", "/users?count=x"] {
        let body = server.get(query).await.json::<Value>();
        assert_eq!(body.as_array().unwrap().len(), 10, "{query}");
    }

    let body = server.get("/users?count=1&start=-7").await.json::<Value>();
    assert_eq!(body.as_array().unwrap()[0]["id"], 1);

    let body = server.get("/users?start=100").await;
    assert_eq!(body.text(), "[]");
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_non_existent_time_spent(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/timespent/11").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "User not found");
}

#[sqlx::test]
async fn test_get_non_existent_user(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/user/11").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({"error": "User not found"}));
}

#[sqlx::test]
async fn test_get_user(pool: PgPool) {
    common::add_users(&pool, 1).await;
    let server = common::make_server(pool);

    let response = server.get("/user/1").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"id": 1, "name": "User 0", "timespent": 10.0})
    );

    let response = server.get("/timespent/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "User 0");
}

#[sqlx::test]
async fn test_get_user_invalid_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/user/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid user ID");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_user(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/user")
        .json(&json!({"name": "test user", "timespent": 11.22}))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["name"], "test user");
    assert_eq!(body["timespent"], 11.22);
    assert_eq!(body["id"], 1);
}

#[sqlx::test]
async fn test_create_user_defaults_time_spent(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.post("/user").json(&json!({"name": "idle"})).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["timespent"], 0.0);
}

#[sqlx::test]
async fn test_create_user_invalid_payload(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/user")
        .json(&json!({"name": "x", "timespent": "lots"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid request payload");
    assert_eq!(common::count_users(&pool).await, 0);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_user(pool: PgPool) {
    common::add_users(&pool, 1).await;
    let server = common::make_server(pool);

    let before = server.get("/user/1").await.json::<Value>();

    let response = server
        .put("/user/1")
        .json(&json!({"name": "test user - updated name", "timespent": 11.22}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], before["id"]);
    assert_ne!(body["name"], before["name"]);
    assert_ne!(body["timespent"], before["timespent"]);

    let stored = server.get("/user/1").await.json::<Value>();
    assert_eq!(
        stored,
        json!({"id": 1, "name": "test user - updated name", "timespent": 11.22})
    );
}

#[sqlx::test]
async fn test_update_time_spent_keeps_name(pool: PgPool) {
    common::add_users(&pool, 2).await;
    let server = common::make_server(pool);

    let before = server.get("/timespent/1").await.json::<Value>();

    let response = server
        .put("/timespent/1")
        .json(&json!({"name": "test user - updated name", "timespent": 11.222}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], before["id"]);
    assert_eq!(body["name"], "test user - updated name");
    assert_eq!(body["timespent"], 11.22);

    let stored = server.get("/timespent/1").await.json::<Value>();
    assert_eq!(stored["name"], before["name"]);
    assert_eq!(stored["timespent"], 11.22);

    let untouched = server.get("/user/2").await.json::<Value>();
    assert_eq!(untouched["timespent"], 20.0);
}

#[sqlx::test]
async fn test_update_missing_user_is_silent(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .put("/user/42")
        .json(&json!({"name": "ghost", "timespent": 1}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], 42);
    assert_eq!(common::count_users(&pool).await, 0);

    server.get("/user/42").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_invalid_payload(pool: PgPool) {
    common::add_users(&pool, 1).await;
    let server = common::make_server(pool);

    server
        .put("/user/1")
        .text("not json")
        .content_type("application/json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let stored = server.get("/user/1").await.json::<Value>();
    assert_eq!(stored["timespent"], 10.0);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_user(pool: PgPool) {
    common::add_users(&pool, 1).await;
    let server = common::make_server(pool);

    server.get("/user/1").await.assert_status_ok();

    let response = server.delete("/user/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"result": "success"}));

    server.get("/user/1").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_missing_user_is_idempotent(pool: PgPool) {
    common::add_users(&pool, 1).await;
    let server = common::make_server(pool.clone());

    server.delete("/user/99").await.assert_status_ok();
    server.delete("/user/1").await.assert_status_ok();
    server.delete("/user/1").await.assert_status_ok();

    assert_eq!(common::count_users(&pool).await, 0);
}

#[sqlx::test]
async fn test_ids_are_not_reused(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .post("/user")
        .json(&json!({"name": "first"}))
        .await
        .assert_status(StatusCode::CREATED);
    server.delete("/user/1").await.assert_status_ok();

    let response = server.post("/user").json(&json!({"name": "second"})).await;
    assert_eq!(response.json::<Value>()["id"], 2);
}
