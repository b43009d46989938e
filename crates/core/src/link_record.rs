//! Compact directional encoding of a link row.
//!
//! Wire form is `<src_out>:<src_id>:<dest_in>:<dest_id>`. An absent port
//! label is written as the literal [`NULL_PORT`]. Port labels containing
//! `:` cannot be represented.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::types::DbId;

/// Wire text standing in for an absent port label.
pub const NULL_PORT: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkRecord {
    pub src_out: Option<String>,
    pub src_id: DbId,
    pub dest_in: Option<String>,
    pub dest_id: DbId,
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.src_out.as_deref().unwrap_or(NULL_PORT),
            self.src_id,
            self.dest_in.as_deref().unwrap_or(NULL_PORT),
            self.dest_id
        )
    }
}

impl Serialize for LinkRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseLinkRecordError {
    #[error("expected 4 ':'-separated fields, got {0}")]
    FieldCount(usize),
    #[error("invalid element id {0:?}")]
    InvalidId(String),
}

fn parse_port(raw: &str) -> Option<String> {
    (raw != NULL_PORT).then(|| raw.to_string())
}

fn parse_id(raw: &str) -> Result<DbId, ParseLinkRecordError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ParseLinkRecordError::InvalidId(raw.to_string())),
    }
}

impl FromStr for LinkRecord {
    type Err = ParseLinkRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let [src_out, src_id, dest_in, dest_id] = fields[..] else {
            return Err(ParseLinkRecordError::FieldCount(fields.len()));
        };
        Ok(LinkRecord {
            src_out: parse_port(src_out),
            src_id: parse_id(src_id)?,
            dest_in: parse_port(dest_in),
            dest_id: parse_id(dest_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_port_uses_sentinel() {
        let record = LinkRecord {
            src_out: Some("O1".into()),
            src_id: 5,
            dest_in: None,
            dest_id: 7,
        };
        assert_eq!(record.to_string(), "O1:5:null:7");
    }

    #[test]
    fn both_ports_absent() {
        let record = LinkRecord {
            src_out: None,
            src_id: 12,
            dest_in: None,
            dest_id: 3,
        };
        assert_eq!(record.to_string(), "null:12:null:3");
    }

    #[test]
    fn parses_wire_form() {
        let record: LinkRecord = "O1:5:null:7".parse().unwrap();
        assert_eq!(record.src_out.as_deref(), Some("O1"));
        assert_eq!(record.src_id, 5);
        assert_eq!(record.dest_in, None);
        assert_eq!(record.dest_id, 7);
    }

    #[test]
    fn stored_null_literal_collapses_to_absent() {
        let record = LinkRecord {
            src_out: Some(NULL_PORT.into()),
            src_id: 1,
            dest_in: Some("B".into()),
            dest_id: 2,
        };
        let reparsed: LinkRecord = record.to_string().parse().unwrap();
        assert_eq!(reparsed.src_out, None);
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(
            "O1:5:7".parse::<LinkRecord>(),
            Err(ParseLinkRecordError::FieldCount(3))
        );
        assert_eq!(
            "a:b:c:d:e".parse::<LinkRecord>(),
            Err(ParseLinkRecordError::FieldCount(5))
        );
        assert_eq!(
            "O1:0:I1:7".parse::<LinkRecord>(),
            Err(ParseLinkRecordError::InvalidId("0".into()))
        );
        assert_eq!(
            "O1:x:I1:7".parse::<LinkRecord>(),
            Err(ParseLinkRecordError::InvalidId("x".into()))
        );
    }

    #[test]
    fn serializes_as_wire_string() {
        let record = LinkRecord {
            src_out: None,
            src_id: 5,
            dest_in: Some("IN2".into()),
            dest_id: 6,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!("null:5:IN2:6"));
    }
}
