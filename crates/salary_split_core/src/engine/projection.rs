//! Savings projection for one selected bucket.
//!
//! # Invariants
//! - `yearly == monthly * 12` for every frequency.
//! - Negative base values are not clamped; they project negatively.

use crate::engine::allocation::Allocation;
use crate::engine::numeric::{finite_or_zero, saturate};
use crate::model::bucket::BucketId;

const DAYS_PER_MONTH: f64 = 30.0;
const WEEKS_PER_MONTH: f64 = 4.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// How often the selected bucket's value is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    /// Nothing chosen yet; projects to zero.
    #[default]
    Unset,
}

impl Frequency {
    /// Parses an optional frequency label; unknown labels are `Unset`.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Unset;
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Unset,
        }
    }

    /// Factor turning one payment into a monthly total.
    pub fn monthly_multiplier(self) -> f64 {
        match self {
            Self::Daily => DAYS_PER_MONTH,
            Self::Weekly => WEEKS_PER_MONTH,
            Self::Monthly => 1.0,
            Self::Unset => 0.0,
        }
    }

    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Daily => Some("daily"),
            Self::Weekly => Some("weekly"),
            Self::Monthly => Some("monthly"),
            Self::Unset => None,
        }
    }
}

/// Projected totals over one month and one year.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    pub monthly: f64,
    pub yearly: f64,
}

/// Projects `base_value` paid at `frequency`.
pub fn project(base_value: f64, frequency: Frequency) -> Projection {
    let monthly = saturate(finite_or_zero(base_value) * frequency.monthly_multiplier());
    Projection {
        monthly,
        yearly: saturate(monthly * MONTHS_PER_YEAR),
    }
}

/// Projects the selected bucket of `allocation`.
///
/// No selection, or a selection that no longer exists, uses a base of zero.
pub fn project_selection(
    allocation: &Allocation<'_>,
    selected: Option<&BucketId>,
    frequency: Frequency,
) -> Projection {
    let base_value = selected
        .and_then(|id| allocation.value_of(id))
        .unwrap_or(0.0);
    project(base_value, frequency)
}
