//! Integration tests for the enumeration loaders.

mod common;

use assert_matches::assert_matches;
use rackmap_core::error::ErrorKind;
use rackmap_core::types::POWER_CHAIN_LINK_TYPE;
use rackmap_db::repositories::DictionaryRepo;
use sqlx::PgPool;

use common::*;

#[sqlx::test(migrations = "../../db/migrations")]
async fn element_types_match_seed_data(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let reply = DictionaryRepo::element_types(&mut conn).await;

    assert!(reply.status);
    assert_eq!(reply.item.len(), 6);
    assert_eq!(reply.item["group"], GROUP);
    assert_eq!(reply.item["datacenter"], DATACENTER);
    assert_eq!(reply.item["room"], ROOM);
    assert_eq!(reply.item["row"], ROW);
    assert_eq!(reply.item["rack"], RACK);
    assert_eq!(reply.item["device"], DEVICE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn device_types_match_seed_data(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let reply = DictionaryRepo::device_types(&mut conn).await;

    assert!(reply.status);
    assert_eq!(reply.item["ups"], UPS);
    assert_eq!(reply.item["epdu"], EPDU);
    assert_eq!(reply.item["feed"], FEED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn power_chain_link_type_is_seeded(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let reply = DictionaryRepo::link_types(&mut conn).await;

    assert!(reply.status);
    assert_eq!(reply.item["power chain"], POWER_CHAIN_LINK_TYPE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn loading_twice_yields_identical_mapping(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let first = DictionaryRepo::device_types(&mut conn).await;
    let second = DictionaryRepo::device_types(&mut conn).await;

    assert_eq!(first, second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failure_returns_empty_mapping(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    drop_view(&mut conn, "v_asset_device_type").await;

    let reply = DictionaryRepo::device_types(&mut conn).await;

    assert!(!reply.status);
    assert_matches!(reply.error_kind, Some(ErrorKind::InternalDatabase));
    assert!(reply.item.is_empty());
    assert!(reply.message.unwrap().contains("v_asset_device_type"));
}
