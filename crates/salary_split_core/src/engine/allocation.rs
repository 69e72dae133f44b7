//! Allocation calculator.
//!
//! # Responsibility
//! - Derive each bucket's value from the salary and the bucket definition.
//! - Derive the "personal use" remainder.
//!
//! # Invariants
//! - Output entries follow the input bucket order.
//! - `personal >= 0` for every input; a shortfall is absorbed silently.
//! - No value in the output is NaN or infinite; overflow saturates to
//!   `±f64::MAX` so oversized deductions still count.
//! - Pure: identical inputs produce identical outputs.

use crate::engine::numeric::{coerce_number, finite_or_zero, saturate};
use crate::model::bucket::{Bucket, BucketId, BucketKind};
use crate::model::palette::{Palette, PERSONAL_USE_COLOR};

/// Label of the remainder slice in the overview.
pub const PERSONAL_USE_LABEL: &str = "Personal Use";

/// A bucket paired with its derived value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocatedBucket<'a> {
    pub bucket: &'a Bucket,
    pub value: f64,
}

/// Result of one allocation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation<'a> {
    /// Salary after numeric coercion.
    pub salary: f64,
    /// Per-bucket values in collection order.
    pub entries: Vec<AllocatedBucket<'a>>,
    pub total_deductions: f64,
    /// `max(salary - total_deductions, 0)`.
    pub personal: f64,
}

/// One segment of the allocation overview chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl<'a> Allocation<'a> {
    /// Returns the derived value of the bucket with `id`, if present.
    pub fn value_of(&self, id: &BucketId) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| &entry.bucket.id == id)
            .map(|entry| entry.value)
    }

    /// Builds overview slices: one per bucket, then the remainder.
    ///
    /// Bucket slices are coloured by slice position in `palette`, not by
    /// the bucket's stored colour; the remainder always uses
    /// `PERSONAL_USE_COLOR`.
    pub fn slices(&self, palette: &Palette) -> Vec<Slice> {
        let mut slices: Vec<Slice> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Slice {
                label: entry.bucket.title.clone(),
                value: entry.value,
                color: palette.color_at(index).to_string(),
            })
            .collect();
        slices.push(Slice {
            label: PERSONAL_USE_LABEL.to_string(),
            value: self.personal,
            color: PERSONAL_USE_COLOR.to_string(),
        });
        slices
    }
}

/// Derived value of one bucket for `salary`.
///
/// `Percent` buckets take `amount` percent of the salary; `Fixed` buckets
/// contribute `amount` as-is. Non-finite inputs contribute zero; a product
/// that overflows saturates instead.
pub fn bucket_value(salary: f64, bucket: &Bucket) -> f64 {
    let amount = finite_or_zero(bucket.amount);
    let value = match bucket.kind {
        BucketKind::Percent => finite_or_zero(salary) * (amount / 100.0),
        BucketKind::Fixed => amount,
    };
    saturate(value)
}

/// Computes bucket values and the remainder for `salary`.
pub fn calculate(salary: f64, buckets: &[Bucket]) -> Allocation<'_> {
    let salary = finite_or_zero(salary);

    let entries: Vec<AllocatedBucket<'_>> = buckets
        .iter()
        .map(|bucket| AllocatedBucket {
            bucket,
            value: bucket_value(salary, bucket),
        })
        .collect();

    let total_deductions = entries
        .iter()
        .fold(0.0, |total, entry| saturate(total + entry.value));
    let personal = saturate(salary - total_deductions).max(0.0);

    Allocation {
        salary,
        entries,
        total_deductions,
        personal,
    }
}

/// Same as [`calculate`], taking the salary as raw input text.
pub fn calculate_raw<'a>(salary_text: &str, buckets: &'a [Bucket]) -> Allocation<'a> {
    calculate(coerce_number(salary_text), buckets)
}

#[cfg(test)]
mod tests {
    use super::{bucket_value, calculate, calculate_raw};
    use crate::model::bucket::{Bucket, BucketId, BucketKind};

    fn bucket(id: &str, kind: BucketKind, amount: f64) -> Bucket {
        let mut bucket = Bucket::new(BucketId::new(id), id, "#000000");
        bucket.kind = kind;
        bucket.amount = amount;
        bucket
    }

    #[test]
    fn non_finite_amount_contributes_zero() {
        let nan = bucket("nan", BucketKind::Fixed, f64::NAN);
        assert_eq!(bucket_value(1000.0, &nan), 0.0);
    }

    #[test]
    fn overflowing_percent_saturates() {
        let huge = bucket("huge", BucketKind::Percent, f64::MAX);
        assert_eq!(bucket_value(f64::MAX, &huge), f64::MAX);

        let mut negative = huge.clone();
        negative.amount = -f64::MAX;
        assert_eq!(bucket_value(f64::MAX, &negative), -f64::MAX);
    }

    #[test]
    fn overflowing_deductions_still_clamp_personal() {
        let buckets = vec![
            bucket("a", BucketKind::Fixed, 1e308),
            bucket("b", BucketKind::Fixed, 1e308),
        ];
        let allocation = calculate(1000.0, &buckets);
        assert_eq!(allocation.total_deductions, f64::MAX);
        assert_eq!(allocation.personal, 0.0);
    }

    #[test]
    fn coerced_huge_amounts_count_as_deductions() {
        let mut fixed = bucket("a", BucketKind::Fixed, 0.0);
        fixed.amount = crate::engine::numeric::coerce_number("1e308");
        let buckets = vec![fixed.clone(), fixed];
        assert_eq!(calculate_raw("5,000", &buckets).personal, 0.0);
    }

    #[test]
    fn raw_salary_is_coerced() {
        let buckets = vec![bucket("a", BucketKind::Percent, 10.0)];
        let allocation = calculate_raw("2,000", &buckets);
        assert_eq!(allocation.salary, 2000.0);
        assert_eq!(allocation.entries[0].value, 200.0);

        let garbage = calculate_raw("n/a", &buckets);
        assert_eq!(garbage.salary, 0.0);
        assert_eq!(garbage.personal, 0.0);
    }

    #[test]
    fn empty_collection_leaves_whole_salary_personal() {
        let allocation = calculate(1234.0, &[]);
        assert!(allocation.entries.is_empty());
        assert_eq!(allocation.total_deductions, 0.0);
        assert_eq!(allocation.personal, 1234.0);
    }
}
