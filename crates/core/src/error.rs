use serde::Serialize;

/// Top-level failure classification carried by [`crate::envelope::DbReply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Input rejected before any storage access.
    #[serde(rename = "bad-input")]
    BadInput,
    /// A single-entity lookup matched zero rows.
    #[serde(rename = "not-found")]
    NotFound,
    /// Any other storage fault.
    #[serde(rename = "internal-database-error")]
    InternalDatabase,
}

impl ErrorKind {
    /// Stable wire code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::BadInput => "bad-input",
            ErrorKind::NotFound => "not-found",
            ErrorKind::InternalDatabase => "internal-database-error",
        }
    }
}

/// Finer classification inside an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorSubkind {
    InvalidName,
    UnknownElement,
    Storage,
}

/// Failure of a query that reports through an envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid element name: {0:?}")]
    InvalidName(String),

    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    /// Carries the storage layer's message verbatim.
    #[error("Database error: {0}")]
    Database(String),
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::InvalidName(_) => ErrorKind::BadInput,
            QueryError::NotFound { .. } => ErrorKind::NotFound,
            QueryError::Database(_) => ErrorKind::InternalDatabase,
        }
    }

    pub fn subkind(&self) -> ErrorSubkind {
        match self {
            QueryError::InvalidName(_) => ErrorSubkind::InvalidName,
            QueryError::NotFound { .. } => ErrorSubkind::UnknownElement,
            QueryError::Database(_) => ErrorSubkind::Storage,
        }
    }

    /// Diagnostic text for the envelope. Database faults pass through untouched.
    pub fn message(&self) -> String {
        match self {
            QueryError::InvalidName(_) => "name is not valid".to_string(),
            QueryError::NotFound { entity, key } => format!("{entity} {key} was not found"),
            QueryError::Database(msg) => msg.clone(),
        }
    }
}

/// Raised by the group membership resolver instead of an envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Internal database error: {0}")]
pub struct InternalDbError(pub String);
