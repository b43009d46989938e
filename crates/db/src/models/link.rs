//! Link rows from `v_asset_link`.

use rackmap_core::link_record::LinkRecord;
use rackmap_core::types::DbId;
use sqlx::FromRow;

/// Directed `(src_id, dest_id)` power edge.
pub type PowerEdge = (DbId, DbId);

/// A link touching a device, with its port labels.
#[derive(Debug, Clone, FromRow)]
pub struct LinkRow {
    pub src_id: DbId,
    pub dest_id: DbId,
    pub src_out: Option<String>,
    pub dest_in: Option<String>,
}

impl LinkRow {
    /// Panics on a zero endpoint, which the schema cannot produce.
    pub fn into_record(self) -> LinkRecord {
        assert!(self.src_id != 0, "link row with zero source id");
        assert!(self.dest_id != 0, "link row with zero destination id");
        LinkRecord {
            src_out: self.src_out,
            src_id: self.src_id,
            dest_in: self.dest_in,
            dest_id: self.dest_id,
        }
    }
}

/// Endpoints of a power link selected by container.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct EdgeRow {
    pub src_id: DbId,
    pub dest_id: DbId,
}

impl EdgeRow {
    /// Panics on a zero endpoint, which the schema cannot produce.
    pub fn into_edge(self) -> PowerEdge {
        assert!(self.src_id != 0, "power link with zero source id");
        assert!(self.dest_id != 0, "power link with zero destination id");
        (self.src_id, self.dest_id)
    }
}
