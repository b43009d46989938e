//! Power links visible from inside a container element.

use std::collections::BTreeSet;

use sqlx::PgConnection;

use rackmap_core::envelope::DbReply;
use rackmap_core::types::{DbId, POWER_CHAIN_LINK_TYPE};

use super::{internal, log_failure};
use crate::models::link::{EdgeRow, PowerEdge};

/// A power link is selected when the container is one of its endpoints or
/// appears in either endpoint's ancestor chain. Missing levels are NULL in
/// the super-parent view, so they never match.
const CONTAINER_LINKS_QUERY: &str = "\
    SELECT v.src_id, v.dest_id \
    FROM v_asset_link v \
    JOIN v_asset_element_super_parent v1 ON v1.element_id = v.src_id \
    JOIN v_asset_element_super_parent v2 ON v2.element_id = v.dest_id \
    WHERE v.link_type_id = $2 \
    AND ( \
        $1 IN (v.src_id, v1.parent1, v1.parent2, v1.parent3, v1.parent4, v1.parent5, \
               v1.parent6, v1.parent7, v1.parent8, v1.parent9, v1.parent10) \
        OR \
        $1 IN (v.dest_id, v2.parent1, v2.parent2, v2.parent3, v2.parent4, v2.parent5, \
               v2.parent6, v2.parent7, v2.parent8, v2.parent9, v2.parent10) \
    )";

pub struct TopologyRepo;

impl TopologyRepo {
    /// Power chain edges with at least one endpoint inside `container_id`,
    /// including edges that cross the container boundary.
    pub async fn links_under_container(
        conn: &mut PgConnection,
        container_id: DbId,
    ) -> DbReply<BTreeSet<PowerEdge>> {
        let result = sqlx::query_as::<_, EdgeRow>(CONTAINER_LINKS_QUERY)
            .bind(container_id)
            .bind(POWER_CHAIN_LINK_TYPE)
            .fetch_all(&mut *conn)
            .await
            .map_err(internal)
            .inspect_err(|e| log_failure("links_under_container", e));

        match result {
            Ok(rows) => {
                tracing::debug!(container_id, rows = rows.len(), "Power links selected");
                DbReply::ok(rows.into_iter().map(EdgeRow::into_edge).collect())
            }
            Err(err) => DbReply::fail(&err),
        }
    }
}
