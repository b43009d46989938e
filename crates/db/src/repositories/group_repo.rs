//! Asset group membership.

use std::collections::BTreeSet;

use sqlx::PgConnection;

use rackmap_core::error::InternalDbError;
use rackmap_core::types::DbId;

use super::internal;

pub struct GroupRepo;

impl GroupRepo {
    /// Ids of the elements in `group_id`. Duplicate relation rows collapse.
    ///
    /// Unlike the other repositories this returns the failure as an error
    /// for the caller to propagate instead of an envelope.
    pub async fn list_elements(
        conn: &mut PgConnection,
        group_id: DbId,
    ) -> Result<BTreeSet<DbId>, InternalDbError> {
        let members: Vec<DbId> = sqlx::query_scalar(
            "SELECT v.element_id FROM asset_group_relations v WHERE v.group_id = $1",
        )
        .bind(group_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            tracing::warn!(group_id, error = %err, "Group membership query failed");
            InternalDbError(internal(err).message())
        })?;

        tracing::debug!(group_id, rows = members.len(), "Group members selected");
        Ok(members.into_iter().collect())
    }
}
