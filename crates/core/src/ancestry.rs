//! Fixed-width ancestor projection of an asset element.
//!
//! Slot 0 holds the direct parent, slot 1 the grandparent, and so on up to
//! [`ANCESTOR_DEPTH`] levels. Slots past the top of the hierarchy are zero.

use serde::Serialize;

use crate::types::DbId;

/// Number of precomputed ancestor levels per element.
pub const ANCESTOR_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AncestorChain([DbId; ANCESTOR_DEPTH]);

impl AncestorChain {
    /// Build a chain from stored slots. Missing levels become zero.
    ///
    /// Panics if a populated slot follows an empty one: the projection is
    /// computed top-down, so a gap means the stored view is corrupt.
    pub fn from_slots(slots: [Option<DbId>; ANCESTOR_DEPTH]) -> Self {
        let mut ids = [0; ANCESTOR_DEPTH];
        let mut seen_gap = false;
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(id) if id != 0 => {
                    assert!(!seen_gap, "ancestor chain has a gap before level {}", idx + 1);
                    ids[idx] = id;
                }
                _ => seen_gap = true,
            }
        }
        Self(ids)
    }

    /// Direct parent, if any.
    pub fn parent(&self) -> Option<DbId> {
        self.iter().next()
    }

    /// Number of populated levels.
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// Populated ancestor ids, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = DbId> + '_ {
        self.0.iter().copied().take_while(|&id| id != 0)
    }

    /// Whether `id` is one of the populated ancestors. Zero never matches.
    pub fn contains(&self, id: DbId) -> bool {
        id != 0 && self.iter().any(|ancestor| ancestor == id)
    }

    pub fn as_slots(&self) -> &[DbId; ANCESTOR_DEPTH] {
        &self.0
    }
}

/// Whether a link between `src` and `dest` is visible from inside `container`.
///
/// True when the container is one of the endpoints or sits in either
/// endpoint's ancestor chain, so edges crossing the container boundary count.
pub fn link_within_container(
    container: DbId,
    src: (DbId, &AncestorChain),
    dest: (DbId, &AncestorChain),
) -> bool {
    if container == 0 {
        return false;
    }
    container == src.0
        || container == dest.0
        || src.1.contains(container)
        || dest.1.contains(container)
}
