//! Asset element rows and the element-with-ancestors view.

use rackmap_core::ancestry::AncestorChain;
use rackmap_core::types::{AssetStatus, DbId, LookupId, DEFAULT_PRIORITY};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `v_asset_element` view.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct AssetElement {
    pub id: DbId,
    pub name: String,
    /// `None` for a top-level element.
    pub parent_id: Option<DbId>,
    pub type_id: LookupId,
    pub subtype_id: Option<LookupId>,
    #[sqlx(try_from = "String")]
    pub status: AssetStatus,
    pub priority: i16,
    pub asset_tag: Option<String>,
}

impl Default for AssetElement {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            parent_id: None,
            type_id: 0,
            subtype_id: None,
            status: AssetStatus::default(),
            priority: DEFAULT_PRIORITY,
            asset_tag: None,
        }
    }
}

impl AssetElement {
    /// Panics when a stored row lacks an id or a name.
    ///
    /// The schema forbids both, so a hit means the database is corrupt.
    pub fn assert_integrity(&self) {
        assert!(self.id != 0, "asset element row with zero id");
        assert!(
            !self.name.is_empty(),
            "asset element {} has an empty name",
            self.id
        );
    }
}

/// An element together with its ancestor projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetElementView {
    #[serde(flatten)]
    pub element: AssetElement,
    pub ancestors: AncestorChain,
}

/// `v_asset_element` joined with `v_asset_element_super_parent`.
#[derive(Debug, Clone, FromRow)]
pub struct ElementWithAncestorsRow {
    #[sqlx(flatten)]
    pub element: AssetElement,
    pub parent1: Option<DbId>,
    pub parent2: Option<DbId>,
    pub parent3: Option<DbId>,
    pub parent4: Option<DbId>,
    pub parent5: Option<DbId>,
    pub parent6: Option<DbId>,
    pub parent7: Option<DbId>,
    pub parent8: Option<DbId>,
    pub parent9: Option<DbId>,
    pub parent10: Option<DbId>,
}

impl From<ElementWithAncestorsRow> for AssetElementView {
    fn from(row: ElementWithAncestorsRow) -> Self {
        let ancestors = AncestorChain::from_slots([
            row.parent1,
            row.parent2,
            row.parent3,
            row.parent4,
            row.parent5,
            row.parent6,
            row.parent7,
            row.parent8,
            row.parent9,
            row.parent10,
        ]);
        Self {
            element: row.element,
            ancestors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ups() -> AssetElement {
        AssetElement {
            id: 5,
            name: "UPS1".to_string(),
            parent_id: Some(2),
            type_id: 6,
            subtype_id: Some(1),
            status: AssetStatus::Active,
            priority: 1,
            asset_tag: None,
        }
    }

    #[test]
    fn default_element_has_default_priority_and_status() {
        let element = AssetElement::default();
        assert_eq!(element.priority, DEFAULT_PRIORITY);
        assert_eq!(element.status, AssetStatus::Nonactive);
    }

    #[test]
    fn sound_row_passes_integrity_check() {
        ups().assert_integrity();
    }

    #[test]
    #[should_panic(expected = "empty name")]
    fn empty_name_is_corruption() {
        let mut element = ups();
        element.name.clear();
        element.assert_integrity();
    }

    #[test]
    #[should_panic(expected = "zero id")]
    fn zero_id_is_corruption() {
        let mut element = ups();
        element.id = 0;
        element.assert_integrity();
    }

    #[test]
    fn view_from_row_zero_pads_ancestors() {
        let row = ElementWithAncestorsRow {
            element: ups(),
            parent1: Some(2),
            parent2: Some(1),
            parent3: None,
            parent4: None,
            parent5: None,
            parent6: None,
            parent7: None,
            parent8: None,
            parent9: None,
            parent10: None,
        };
        let view = AssetElementView::from(row);
        assert_eq!(view.ancestors.as_slots(), &[2, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(view.element.name, "UPS1");
    }
}
