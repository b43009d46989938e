//! Storage-independent domain types for the asset topology layer.

pub mod ancestry;
pub mod envelope;
pub mod error;
pub mod link_record;
pub mod naming;
pub mod types;
