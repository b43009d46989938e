//! Enumeration tables (element types, device types, link types).

use std::collections::BTreeMap;

use rackmap_core::types::LookupId;
use sqlx::FromRow;

/// A `(name, id)` row from one of the `v_asset_*_type` views.
#[derive(Debug, Clone, FromRow)]
pub struct DictionaryEntry {
    pub name: String,
    pub id: LookupId,
}

/// Name to id mapping with unique keys.
pub type Dictionary = BTreeMap<String, LookupId>;

/// Collect rows into a mapping. A repeated name keeps the last id seen.
pub fn into_dictionary(rows: Vec<DictionaryEntry>) -> Dictionary {
    rows.into_iter().map(|row| (row.name, row.id)).collect()
}
