//! Serialized layout of the bucket collection.
//!
//! # Responsibility
//! - Encode buckets as a JSON array of `{id, title, kind, amount, color}`.
//! - Decode payloads written by any client version without failing on
//!   missing, extra or loosely typed keys.
//!
//! # Invariants
//! - Encoding preserves collection order.
//! - Decoded collections have unique, non-empty ids.
//! - Only a payload that is not a JSON array is rejected as a whole.

use crate::config::StoreConfig;
use crate::engine::numeric::{coerce_number, finite_or_zero};
use crate::model::bucket::{Bucket, BucketId, BucketKind};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload could not be turned into a bucket list.
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
    NotAnArray,
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid bucket payload: {err}"),
            Self::NotAnArray => write!(f, "invalid bucket payload: expected a JSON array"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NotAnArray => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decoded collection plus repair counters for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBuckets {
    pub buckets: Vec<Bucket>,
    /// Array elements that were not objects.
    pub skipped: usize,
    /// Buckets whose id was missing or duplicated and got a fresh one.
    pub reassigned_ids: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBucket {
    id: Option<Value>,
    title: Option<Value>,
    kind: Option<Value>,
    #[serde(rename = "type")]
    legacy_type: Option<Value>,
    amount: Option<Value>,
    color: Option<Value>,
}

/// Serializes `buckets` in canonical layout.
pub fn encode_buckets(buckets: &[Bucket]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(buckets)?)
}

/// Parses a persisted payload.
///
/// Missing or wrongly typed attributes fall back to creation defaults from
/// `config`; a missing colour uses the palette entry for the bucket's
/// position. Only array elements that are not objects are skipped.
pub fn decode_buckets(payload: &str, config: &StoreConfig) -> Result<DecodedBuckets, CodecError> {
    let Value::Array(items) = serde_json::from_str::<Value>(payload)? else {
        return Err(CodecError::NotAnArray);
    };

    let mut buckets = Vec::with_capacity(items.len());
    let mut seen_ids = HashSet::with_capacity(items.len());
    let mut skipped = 0;
    let mut reassigned_ids = 0;

    for item in items {
        if !item.is_object() {
            skipped += 1;
            continue;
        }
        let raw: RawBucket = serde_json::from_value(item).unwrap_or_default();

        let id = match raw.id.as_ref().and_then(text_of) {
            Some(id) if !id.is_empty() && !seen_ids.contains(&id) => BucketId::new(id),
            _ => {
                reassigned_ids += 1;
                fresh_id(&seen_ids)
            }
        };
        seen_ids.insert(id.as_str().to_string());

        let kind = match raw.kind.as_ref().or(raw.legacy_type.as_ref()) {
            Some(Value::String(value)) => BucketKind::parse_lenient(value),
            _ => BucketKind::Fixed,
        };
        let color = match raw.color {
            Some(Value::String(color)) if !color.is_empty() => color,
            _ => config.palette.color_at(buckets.len()).to_string(),
        };
        let title = raw
            .title
            .as_ref()
            .and_then(text_of)
            .unwrap_or_else(|| config.default_title.clone());

        buckets.push(Bucket {
            id,
            title,
            kind,
            amount: amount_of(raw.amount.as_ref()),
            color,
        });
    }

    Ok(DecodedBuckets {
        buckets,
        skipped,
        reassigned_ids,
    })
}

fn fresh_id(taken: &HashSet<String>) -> BucketId {
    loop {
        let id = BucketId::generate();
        if !taken.contains(id.as_str()) {
            return id;
        }
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn amount_of(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().map_or(0.0, finite_or_zero),
        Some(Value::String(text)) => coerce_number(text),
        _ => 0.0,
    }
}
