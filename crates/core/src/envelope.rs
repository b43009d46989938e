//! Uniform success/failure wrapper returned by the topology queries.
//!
//! A successful reply has `status = true`, a fully populated `item` and no
//! error fields. A failed reply has `status = false`, the error fields set,
//! and `item` reset to its default value so no partial data leaks out.

use serde::Serialize;

use crate::error::{ErrorKind, ErrorSubkind, QueryError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbReply<T> {
    pub status: bool,
    pub error_kind: Option<ErrorKind>,
    pub error_subkind: Option<ErrorSubkind>,
    pub message: Option<String>,
    pub item: T,
}

impl<T> DbReply<T> {
    pub fn ok(item: T) -> Self {
        Self {
            status: true,
            error_kind: None,
            error_subkind: None,
            message: None,
            item,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status
    }
}

impl<T: Default> DbReply<T> {
    pub fn fail(err: &QueryError) -> Self {
        Self {
            status: false,
            error_kind: Some(err.kind()),
            error_subkind: Some(err.subkind()),
            message: Some(err.message()),
            item: T::default(),
        }
    }
}

impl<T: Default> From<Result<T, QueryError>> for DbReply<T> {
    fn from(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(item) => DbReply::ok(item),
            Err(err) => DbReply::fail(&err),
        }
    }
}
