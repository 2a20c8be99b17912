mod common;

use alias_shortener::domain::repositories::UrlStore;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::{self, PoolSettings, SqliteUrlStore};
use std::sync::Arc;

#[tokio::test]
async fn test_save_returns_increasing_ids() {
    let store = SqliteUrlStore::new(common::test_pool().await);

    let first = store.save("first1", "https://example.com/1").await.unwrap();
    let second = store.save("second", "https://example.com/2").await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_get_url() {
    let pool = common::test_pool().await;
    common::insert_record(&pool, "abc123", "https://example.com").await;

    let store = SqliteUrlStore::new(pool);
    let url = store.get_url("abc123").await.unwrap();

    assert_eq!(url, "https://example.com");
}

#[tokio::test]
async fn test_get_url_not_found() {
    let store = SqliteUrlStore::new(common::test_pool().await);

    let result = store.get_url("doesNotExist").await;

    assert!(matches!(result, Err(AppError::NotFound { ref alias }) if alias == "doesNotExist"));
}

#[tokio::test]
async fn test_alias_lookup_is_case_sensitive() {
    let store = SqliteUrlStore::new(common::test_pool().await);
    store.save("Shop", "https://example.com").await.unwrap();

    assert!(matches!(
        store.get_url("shop").await,
        Err(AppError::NotFound { .. })
    ));
    assert!(store.save("shop", "https://other.com").await.is_ok());
}

#[tokio::test]
async fn test_duplicate_alias_rejected_and_record_kept() {
    let pool = common::test_pool().await;
    let store = SqliteUrlStore::new(pool.clone());

    let id = store.save("shop", "https://example.com").await.unwrap();
    let result = store.save("shop", "https://other.com").await;

    assert!(matches!(result, Err(AppError::AliasExists { ref alias }) if alias == "shop"));

    let record = store.find_by_alias("shop").await.unwrap().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.url, "https://example.com");
    assert_eq!(common::count_records(&pool).await, 1);
}

#[tokio::test]
async fn test_same_url_under_two_aliases() {
    let pool = common::test_pool().await;
    let store = SqliteUrlStore::new(pool.clone());

    store.save("one111", "https://example.com").await.unwrap();
    store.save("two222", "https://example.com").await.unwrap();

    assert_eq!(common::count_records(&pool).await, 2);
}

#[tokio::test]
async fn test_find_by_alias() {
    let store = SqliteUrlStore::new(common::test_pool().await);
    let id = store.save("find12", "https://example.com").await.unwrap();

    let record = store.find_by_alias("find12").await.unwrap().unwrap();

    assert_eq!(record.id, id);
    assert_eq!(record.alias, "find12");
    assert_eq!(record.url, "https://example.com");
    assert!(store.find_by_alias("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_ping() {
    let store = SqliteUrlStore::new(common::test_pool().await);

    assert!(store.ping().await.is_ok());
}

#[tokio::test]
async fn test_ping_after_close_fails() {
    let store = SqliteUrlStore::new(common::test_pool().await);
    store.close().await;

    assert!(matches!(store.ping().await, Err(AppError::Storage(_))));
}

#[tokio::test]
async fn test_concurrent_saves_of_same_alias_have_one_winner() {
    let store = Arc::new(SqliteUrlStore::new(common::test_pool().await));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .save("race", &format!("https://example.com/{i}"))
                    .await
            })
        })
        .collect();

    let mut winners = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(AppError::AliasExists { .. }) => rejected += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(rejected, 15);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_on_file_store_have_one_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.db");
    let pool = persistence::connect(path.to_str().unwrap(), PoolSettings::default())
        .await
        .unwrap();
    let store = Arc::new(SqliteUrlStore::new(pool.clone()));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .save("race", &format!("https://example.com/{i}"))
                    .await
            })
        })
        .collect();

    let mut winners = Vec::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(id) => winners.push(id),
            Err(AppError::AliasExists { .. }) => rejected += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(rejected, 31);

    let record = store.find_by_alias("race").await.unwrap().unwrap();
    assert_eq!(record.id, winners[0]);
    assert_eq!(common::count_records(&pool).await, 1);

    store.close().await;
}

#[tokio::test]
async fn test_file_store_persists_across_pools() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.db");
    let path = path.to_str().unwrap();

    let store = SqliteUrlStore::new(persistence::connect(path, PoolSettings::default()).await.unwrap());
    store.save("keep12", "https://example.com").await.unwrap();
    store.close().await;

    let reopened =
        SqliteUrlStore::new(persistence::connect(path, PoolSettings::default()).await.unwrap());

    assert_eq!(reopened.get_url("keep12").await.unwrap(), "https://example.com");
}
