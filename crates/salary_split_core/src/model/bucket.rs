//! Allocation bucket model.
//!
//! # Responsibility
//! - Define the user-editable bucket record (title, kind, amount, colour).
//! - Map raw UI edits onto typed attribute updates.
//!
//! # Invariants
//! - `id` is assigned at creation and never mutated afterwards.
//! - `color` is assigned at creation and never recomputed.
//! - `amount` is unbounded; negative values are kept as entered.

use crate::engine::numeric::coerce_number;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque, stable bucket identifier.
///
/// Persisted as a plain string; ids written by older clients (for example
/// millisecond timestamps) are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BucketId(String);

impl BucketId {
    /// Wraps an existing identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BucketId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BucketId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// How a bucket's `amount` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    /// Absolute currency amount.
    #[default]
    Fixed,
    /// Percentage points of the salary.
    Percent,
}

impl BucketKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percent => "percent",
        }
    }

    /// Parses a kind from loose text.
    ///
    /// Anything other than `percent` (case-insensitive, trimmed) is `Fixed`.
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("percent") {
            Self::Percent
        } else {
            Self::Fixed
        }
    }
}

/// One named allocation entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub id: BucketId,
    pub title: String,
    pub kind: BucketKind,
    /// Currency units for `Fixed`, percentage points for `Percent`.
    pub amount: f64,
    pub color: String,
}

impl Bucket {
    /// Creates a bucket with creation defaults: `Fixed` kind and zero amount.
    pub fn new(id: BucketId, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            kind: BucketKind::Fixed,
            amount: 0.0,
            color: color.into(),
        }
    }

    /// Replaces the attribute named by `update`.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(title) => self.title = title,
            FieldUpdate::Kind(kind) => self.kind = kind,
            FieldUpdate::Amount(amount) => self.amount = amount,
        }
    }
}

/// Single-attribute edit applied to an existing bucket.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Title(String),
    Kind(BucketKind),
    Amount(f64),
}

impl FieldUpdate {
    /// Builds an update from an attribute name and raw input text.
    ///
    /// Accepts `title`, `kind` (or its legacy name `type`) and `amount`.
    /// Amount text is coerced to a number; unknown attribute names yield
    /// `None`.
    pub fn from_raw(key: &str, raw: &str) -> Option<Self> {
        match key.trim() {
            "title" => Some(Self::Title(raw.to_string())),
            "kind" | "type" => Some(Self::Kind(BucketKind::parse_lenient(raw))),
            "amount" => Some(Self::Amount(coerce_number(raw))),
            _ => None,
        }
    }

    /// Attribute name used in log events.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Kind(_) => "kind",
            Self::Amount(_) => "amount",
        }
    }
}
