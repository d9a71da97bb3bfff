use rust_decimal::Decimal;

/// Credence engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical ledger currency.
pub const DEFAULT_CURRENCY: &str = "MYR";

/// Largest amount a single entry may carry (10^12 currency units).
/// Keeps ledger totals far below `Decimal::MAX`.
pub const MAX_ENTRY_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

// --- Score component ceilings ---
pub const ACTIVITY_MAX: f64 = 30.0;
pub const CONSISTENCY_MAX: f64 = 20.0;
pub const LONGEVITY_MAX: f64 = 20.0;
pub const EVIDENCE_STRENGTH_MAX: f64 = 25.0;
pub const CROSS_SOURCE_MAX: f64 = 15.0;

/// Most negative value the penalty component can take.
pub const PENALTY_FLOOR: f64 = -20.0;

/// Upper bound of the final credibility score.
pub const SCORE_MAX: u8 = 100;

/// Decimal places kept on breakdown components.
pub const BREAKDOWN_PRECISION: i32 = 2;
