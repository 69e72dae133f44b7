//! Store configuration.
//!
//! # Responsibility
//! - Hold the tunables that shape bucket creation (cap, default title,
//!   palette).
//!
//! # Invariants
//! - `StoreConfig::default()` is the configuration the product ships with.

use crate::model::palette::Palette;

/// Maximum number of buckets a store accepts by default.
pub const DEFAULT_CAPACITY: usize = 9;
/// Title given to freshly created buckets.
pub const DEFAULT_TITLE: &str = "New Field";
/// Key under which key-value adapters keep the serialized collection.
pub const DEFAULT_STORAGE_KEY: &str = "fields";

/// Creation-time settings for a `FieldStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Hard cap checked on `create`; loaded collections are not truncated.
    pub capacity: usize,
    pub default_title: String,
    pub palette: Palette,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_title: DEFAULT_TITLE.to_string(),
            palette: Palette::default(),
        }
    }
}
