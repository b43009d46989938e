//! Shared fixtures for repository integration tests.
//!
//! Rows are inserted with explicit ids so expectations can name them.

#![allow(dead_code)]

use rackmap_core::types::{DbId, LookupId};
use sqlx::PgConnection;

/// Seeded `asset_element_types` ids.
pub const GROUP: LookupId = 1;
pub const DATACENTER: LookupId = 2;
pub const ROOM: LookupId = 3;
pub const ROW: LookupId = 4;
pub const RACK: LookupId = 5;
pub const DEVICE: LookupId = 6;

/// Seeded `asset_device_types` ids.
pub const UPS: LookupId = 1;
pub const EPDU: LookupId = 3;
pub const FEED: LookupId = 6;

pub async fn insert_element(
    conn: &mut PgConnection,
    id: DbId,
    name: &str,
    parent_id: Option<DbId>,
    type_id: LookupId,
) {
    sqlx::query(
        "INSERT INTO asset_elements (id, name, parent_id, type_id) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(name)
    .bind(parent_id)
    .bind(type_id)
    .execute(&mut *conn)
    .await
    .unwrap_or_else(|e| panic!("insert element {name} failed: {e}"));
}

pub async fn insert_device(
    conn: &mut PgConnection,
    id: DbId,
    name: &str,
    parent_id: Option<DbId>,
    subtype_id: LookupId,
) {
    insert_element(conn, id, name, parent_id, DEVICE).await;
    sqlx::query("UPDATE asset_elements SET subtype_id = $2 WHERE id = $1")
        .bind(id)
        .bind(subtype_id)
        .execute(&mut *conn)
        .await
        .unwrap();
}

pub async fn insert_alias(conn: &mut PgConnection, element_id: DbId, alias: &str) {
    sqlx::query(
        "INSERT INTO asset_ext_attributes (element_id, keytag, value) VALUES ($1, 'name', $2)",
    )
    .bind(element_id)
    .bind(alias)
    .execute(&mut *conn)
    .await
    .unwrap();
}

pub async fn insert_link(
    conn: &mut PgConnection,
    src_id: DbId,
    src_out: Option<&str>,
    dest_id: DbId,
    dest_in: Option<&str>,
    link_type_id: LookupId,
) {
    sqlx::query(
        "INSERT INTO asset_links (src_id, src_out, dest_id, dest_in, link_type_id) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(src_id)
    .bind(src_out)
    .bind(dest_id)
    .bind(dest_in)
    .bind(link_type_id)
    .execute(&mut *conn)
    .await
    .unwrap();
}

/// Add a link type beyond the seeded power chain and return its id.
pub async fn insert_link_type(conn: &mut PgConnection, name: &str) -> LookupId {
    sqlx::query_scalar("INSERT INTO asset_link_types (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .unwrap()
}

pub async fn add_to_group(conn: &mut PgConnection, group_id: DbId, element_id: DbId) {
    sqlx::query("INSERT INTO asset_group_relations (group_id, element_id) VALUES ($1, $2)")
        .bind(group_id)
        .bind(element_id)
        .execute(&mut *conn)
        .await
        .unwrap();
}

pub async fn drop_view(conn: &mut PgConnection, view: &str) {
    sqlx::query(&format!("DROP VIEW {view} CASCADE"))
        .execute(&mut *conn)
        .await
        .unwrap();
}
