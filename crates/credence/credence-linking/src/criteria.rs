//! Tolerances and closeness measures for amount and time proximity.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Allowed absolute amount difference: `max(floor, ratio × max(a, b))`.
pub fn amount_tolerance(a: Decimal, b: Decimal, ratio: f64, floor: f64) -> f64 {
    let larger = a.max(b).to_f64().unwrap_or(0.0);
    floor.max(ratio * larger)
}

/// Absolute amount difference, computed in fixed point.
pub fn amount_distance(a: Decimal, b: Decimal) -> f64 {
    (a - b).abs().to_f64().unwrap_or(f64::INFINITY)
}

/// Absolute time difference in hours.
pub fn hours_apart(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_seconds().unsigned_abs() as f64 / 3600.0
}

/// Linear closeness: 1.0 at zero distance, 0.0 at or beyond the tolerance.
pub fn closeness(distance: f64, tolerance: f64) -> f64 {
    if !distance.is_finite() {
        return 0.0;
    }
    if tolerance <= 0.0 {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / tolerance).clamp(0.0, 1.0)
}
