#![allow(dead_code)]

use axum_test::TestServer;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use timespent_api::application::services::UserService;
use timespent_api::infrastructure::persistence::PgUserRepository;
use timespent_api::routes::app_router;
use timespent_api::state::AppState;

/// Inserts `count` users named `User 0..` with time spent `10, 20, ...`.
pub async fn add_users(pool: &PgPool, count: usize) {
    for i in 0..count {
        sqlx::query("INSERT INTO users (name, timespent) VALUES ($1, $2)")
            .bind(format!("User {i}"))
            .bind(Decimal::from((i as i64 + 1) * 10))
            .execute(pool)
            .await
            .unwrap();
    }
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgUserRepository::new(Arc::new(pool)));
    let user_service = Arc::new(UserService::new(repository, Duration::from_secs(5)));
    AppState::new(user_service)
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}
