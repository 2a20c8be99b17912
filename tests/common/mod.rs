#![allow(dead_code)]

use alias_shortener::application::services::AliasPolicy;
use alias_shortener::infrastructure::persistence::{self, IN_MEMORY, PoolSettings, SqliteUrlStore};
use alias_shortener::routes::router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::RandomAliasGenerator;
use axum::Router;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// Fresh in-memory database with the schema applied.
pub async fn test_pool() -> SqlitePool {
    persistence::connect(IN_MEMORY, PoolSettings::default())
        .await
        .unwrap()
}

pub async fn insert_record(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_records(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(SqliteUrlStore::new(pool)),
        Arc::new(RandomAliasGenerator::default()),
        AliasPolicy::default(),
    )
}

pub fn create_test_router(pool: SqlitePool) -> Router {
    router(create_test_state(pool), Duration::from_secs(4))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(create_test_router(pool)).unwrap()
}
