//! Allocation and projection engine.
//!
//! # Responsibility
//! - Turn `(salary, buckets, selection, frequency)` into display-ready
//!   numbers.
//! - Stay free of I/O and hidden state; callers re-run it on every input
//!   change.
//!
//! # Invariants
//! - Engine functions only read the snapshot they are given.

pub mod allocation;
pub mod numeric;
pub mod projection;

use crate::model::bucket::{Bucket, BucketId};
use allocation::{calculate, Allocation};
use projection::{project_selection, Frequency, Projection};

/// Everything the engine reads for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EngineInput<'a> {
    pub salary: f64,
    pub buckets: &'a [Bucket],
    pub selected: Option<&'a BucketId>,
    pub frequency: Frequency,
}

/// Everything the engine produces for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput<'a> {
    pub allocation: Allocation<'a>,
    pub projection: Projection,
}

/// Runs the allocation pass, then projects the selected bucket.
pub fn evaluate<'a>(input: &EngineInput<'a>) -> EngineOutput<'a> {
    let allocation = calculate(input.salary, input.buckets);
    let projection = project_selection(&allocation, input.selected, input.frequency);
    EngineOutput {
        allocation,
        projection,
    }
}
