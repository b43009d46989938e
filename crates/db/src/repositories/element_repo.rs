//! Element resolution by name (with alias fallback), by type, and by id
//! together with the ancestor chain.

use sqlx::PgConnection;

use rackmap_core::envelope::DbReply;
use rackmap_core::error::QueryError;
use rackmap_core::naming::is_valid_name;
use rackmap_core::types::{DbId, LookupId};

use super::{internal, log_failure};
use crate::models::element::{AssetElement, AssetElementView, ElementWithAncestorsRow};

/// Column list for `v_asset_element v` queries.
const ELEMENT_COLUMNS: &str = "\
    v.id, v.name, v.parent_id, v.type_id, v.subtype_id, \
    v.status, v.priority, v.asset_tag";

/// Column list for `v_asset_element_super_parent sp`.
const ANCESTOR_COLUMNS: &str = "\
    sp.parent1, sp.parent2, sp.parent3, sp.parent4, sp.parent5, \
    sp.parent6, sp.parent7, sp.parent8, sp.parent9, sp.parent10";

/// Resolves asset elements.
pub struct ElementRepo;

impl ElementRepo {
    /// Resolve an element by its canonical name, falling back to the
    /// `name` extended attribute (alias / external name).
    ///
    /// An invalid name is rejected before any statement is issued.
    pub async fn find_by_name(conn: &mut PgConnection, name: &str) -> DbReply<AssetElement> {
        Self::resolve_name(conn, name)
            .await
            .inspect_err(|e| log_failure("find_by_name", e))
            .into()
    }

    async fn resolve_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<AssetElement, QueryError> {
        if !is_valid_name(name) {
            return Err(QueryError::InvalidName(name.to_string()));
        }

        let query = format!("SELECT {ELEMENT_COLUMNS} FROM v_asset_element v WHERE v.name = $1");
        let by_name = sqlx::query_as::<_, AssetElement>(&query)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(internal)?;

        let element = match by_name {
            Some(element) => element,
            None => {
                tracing::debug!(
                    element_name = name,
                    "No canonical name match, trying alias"
                );
                let query = format!(
                    "SELECT {ELEMENT_COLUMNS} \
                     FROM v_asset_element v \
                     JOIN v_asset_ext_attribute ext ON ext.element_id = v.id \
                     WHERE ext.keytag = 'name' AND ext.value = $1 \
                     ORDER BY v.id \
                     LIMIT 1"
                );
                sqlx::query_as::<_, AssetElement>(&query)
                    .bind(name)
                    .fetch_optional(&mut *conn)
                    .await
                    .map_err(internal)?
                    .ok_or_else(|| QueryError::NotFound {
                        entity: "element",
                        key: name.to_string(),
                    })?
            }
        };

        element.assert_integrity();
        tracing::debug!(element_name = name, element_id = element.id, "Element resolved");
        Ok(element)
    }

    /// All elements of the given type. No match is an empty success.
    pub async fn list_by_type(
        conn: &mut PgConnection,
        type_id: LookupId,
    ) -> DbReply<Vec<AssetElement>> {
        let query =
            format!("SELECT {ELEMENT_COLUMNS} FROM v_asset_element v WHERE v.type_id = $1");
        let result = sqlx::query_as::<_, AssetElement>(&query)
            .bind(type_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(internal)
            .inspect_err(|e| log_failure("list_by_type", e));

        if let Ok(elements) = &result {
            tracing::debug!(type_id, count = elements.len(), "Elements selected by type");
            elements.iter().for_each(AssetElement::assert_integrity);
        }
        result.into()
    }

    /// An element and its ten-level ancestor chain.
    pub async fn find_with_ancestors(
        conn: &mut PgConnection,
        element_id: DbId,
    ) -> DbReply<AssetElementView> {
        let query = format!(
            "SELECT {ELEMENT_COLUMNS}, {ANCESTOR_COLUMNS} \
             FROM v_asset_element v \
             JOIN v_asset_element_super_parent sp ON sp.element_id = v.id \
             WHERE v.id = $1"
        );
        sqlx::query_as::<_, ElementWithAncestorsRow>(&query)
            .bind(element_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(internal)
            .and_then(|row| {
                row.ok_or_else(|| QueryError::NotFound {
                    entity: "element",
                    key: format!("#{element_id}"),
                })
            })
            .map(|row| {
                let view = AssetElementView::from(row);
                view.element.assert_integrity();
                tracing::debug!(
                    element_id,
                    depth = view.ancestors.depth(),
                    "Element with ancestors selected"
                );
                view
            })
            .inspect_err(|e| log_failure("find_with_ancestors", e))
            .into()
    }
}
