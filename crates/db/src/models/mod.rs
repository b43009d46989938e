//! Row structs for the topology views.
//!
//! Each submodule holds the `FromRow` structs matching one view and the
//! checked conversion into the domain value handed back to callers.

pub mod dictionary;
pub mod element;
pub mod link;
