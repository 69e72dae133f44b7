//! Persistence boundary for the bucket collection.
//!
//! # Responsibility
//! - Define the key-value style adapter contract the store writes through.
//! - Provide in-memory and SQLite adapter implementations.
//! - Encode/decode the persisted bucket layout.
//!
//! # Invariants
//! - Adapters move opaque serialized payloads; they never interpret them.
//! - Decoding is lenient and restores id uniqueness.

pub mod bucket_codec;
pub mod persistence;
pub mod sqlite_kv;
