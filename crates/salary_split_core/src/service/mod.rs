//! Core use-case services.
//!
//! # Responsibility
//! - Own mutable bucket state and keep it synchronized with persistence.
//! - Keep UI layers decoupled from storage details.

pub mod field_store;
