//! Domain model for salary allocation buckets.
//!
//! # Responsibility
//! - Define the bucket record shared by the store, codec and engine.
//! - Define the colour palette buckets draw from at creation time.
//!
//! # Invariants
//! - Every bucket is identified by a `BucketId` that is never reused.
//! - Derived values are never stored on the model; the engine computes them.

pub mod bucket;
pub mod palette;
