//! One builder per card type, in presentation order.

pub mod coverage;
pub mod peak_day;
pub mod recommendation;
pub mod trend;

use rust_decimal::Decimal;

/// Ringgit amount with two decimals, e.g. `RM 1234.50`.
pub(crate) fn ringgit(amount: Decimal) -> String {
    format!("RM {:.2}", amount.round_dp(2))
}
