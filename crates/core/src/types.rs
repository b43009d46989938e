use serde::Serialize;

/// Asset element primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Lookup table keys (element types, device types, link types) are SMALLSERIAL.
pub type LookupId = i16;

/// Link type id meaning "any type" in link queries. Never stored.
pub const ANY_LINK_TYPE: LookupId = 0;

/// Seeded id of the `power chain` row in `asset_link_types`.
pub const POWER_CHAIN_LINK_TYPE: LookupId = 1;

/// Priority assigned to elements created without one.
pub const DEFAULT_PRIORITY: i16 = 5;

/// Lifecycle state of an asset element, stored as lowercase text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    #[default]
    Nonactive,
}

impl AssetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Nonactive => "nonactive",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown asset status: {0:?}")]
pub struct UnknownStatus(pub String);

impl TryFrom<String> for AssetStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "active" => Ok(AssetStatus::Active),
            "nonactive" => Ok(AssetStatus::Nonactive),
            _ => Err(UnknownStatus(value)),
        }
    }
}
