//! Core allocation logic for SalarySplit.
//! This crate is the single source of truth for bucket invariants and the
//! allocation/projection arithmetic.

pub mod config;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreConfig, DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY, DEFAULT_TITLE};
pub use engine::allocation::{
    bucket_value, calculate, calculate_raw, AllocatedBucket, Allocation, Slice, PERSONAL_USE_LABEL,
};
pub use engine::numeric::{coerce_number, format_number};
pub use engine::projection::{project, project_selection, Frequency, Projection};
pub use engine::{evaluate, EngineInput, EngineOutput};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::bucket::{Bucket, BucketId, BucketKind, FieldUpdate};
pub use model::palette::{Palette, PERSONAL_USE_COLOR};
pub use repo::bucket_codec::{decode_buckets, encode_buckets, CodecError, DecodedBuckets};
pub use repo::persistence::{MemoryAdapter, PersistError, PersistResult, PersistenceAdapter};
pub use repo::sqlite_kv::SqliteKvAdapter;
pub use service::field_store::{FieldStore, StoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
