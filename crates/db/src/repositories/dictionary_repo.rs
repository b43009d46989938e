//! Loader for the small enumeration tables.
//!
//! Nothing is cached: each call re-reads the view.

use sqlx::PgConnection;

use rackmap_core::envelope::DbReply;

use super::{internal, log_failure};
use crate::models::dictionary::{into_dictionary, Dictionary, DictionaryEntry};

const ELEMENT_TYPE_QUERY: &str = "SELECT v.name, v.id FROM v_asset_element_type v";
const DEVICE_TYPE_QUERY: &str = "SELECT v.name, v.id FROM v_asset_device_type v";
const LINK_TYPE_QUERY: &str = "SELECT v.name, v.id FROM v_asset_link_type v";

pub struct DictionaryRepo;

impl DictionaryRepo {
    /// Element type name to id.
    pub async fn element_types(conn: &mut PgConnection) -> DbReply<Dictionary> {
        Self::load(conn, ELEMENT_TYPE_QUERY).await
    }

    /// Device type (element subtype) name to id.
    pub async fn device_types(conn: &mut PgConnection) -> DbReply<Dictionary> {
        Self::load(conn, DEVICE_TYPE_QUERY).await
    }

    /// Link type name to id.
    pub async fn link_types(conn: &mut PgConnection) -> DbReply<Dictionary> {
        Self::load(conn, LINK_TYPE_QUERY).await
    }

    async fn load(conn: &mut PgConnection, query: &'static str) -> DbReply<Dictionary> {
        let result = sqlx::query_as::<_, DictionaryEntry>(query)
            .fetch_all(&mut *conn)
            .await
            .map(into_dictionary)
            .map_err(internal)
            .inspect_err(|e| log_failure("load_dictionary", e));

        if let Ok(dict) = &result {
            tracing::debug!(entries = dict.len(), "Dictionary loaded");
        }
        result.into()
    }
}
