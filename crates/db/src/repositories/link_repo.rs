//! Links touching a single device.

use sqlx::PgConnection;

use rackmap_core::link_record::LinkRecord;
use rackmap_core::types::{DbId, LookupId, ANY_LINK_TYPE};

use crate::models::link::LinkRow;

/// Column list for `v_asset_link v` queries.
const LINK_COLUMNS: &str = "v.src_id, v.dest_id, v.src_out, v.dest_in";

pub struct LinkRepo;

impl LinkRepo {
    /// Every link where `device_id` is the source or the destination.
    ///
    /// `link_type_id == ANY_LINK_TYPE` matches links of any type. Rows come
    /// back in storage order.
    ///
    /// Returns `None` when the query fails and `Some(vec![])` when the device
    /// has no links; callers rely on the difference.
    pub async fn list_for_device(
        conn: &mut PgConnection,
        device_id: DbId,
        link_type_id: LookupId,
    ) -> Option<Vec<LinkRecord>> {
        let rows = if link_type_id == ANY_LINK_TYPE {
            let query = format!(
                "SELECT {LINK_COLUMNS} FROM v_asset_link v \
                 WHERE (v.dest_id = $1 OR v.src_id = $1)"
            );
            sqlx::query_as::<_, LinkRow>(&query)
                .bind(device_id)
                .fetch_all(&mut *conn)
                .await
        } else {
            let query = format!(
                "SELECT {LINK_COLUMNS} FROM v_asset_link v \
                 WHERE (v.dest_id = $1 OR v.src_id = $1) \
                 AND v.link_type_id = $2"
            );
            sqlx::query_as::<_, LinkRow>(&query)
                .bind(device_id)
                .bind(link_type_id)
                .fetch_all(&mut *conn)
                .await
        };

        match rows {
            Ok(rows) => {
                tracing::debug!(device_id, link_type_id, count = rows.len(), "Links selected");
                Some(rows.into_iter().map(LinkRow::into_record).collect())
            }
            Err(err) => {
                tracing::warn!(device_id, link_type_id, error = %err, "Link enumeration failed");
                None
            }
        }
    }
}
