use chrono::Duration;
use credence_core::calendar;
use credence_core::config::InsightsConfig;
use credence_core::models::{InsightCard, InsightType, LedgerEntry};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::json;

use super::ringgit;

/// Revenue in the most recent window against the window before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendWindows {
    pub recent: Decimal,
    pub prior: Decimal,
    /// Rounded percentage change relative to `prior`.
    pub change_pct: i64,
}

/// Compare `(as_of − w, as_of]` with `(as_of − 2w, as_of − w]`, where `as_of`
/// is the latest event time. `None` when the ledger spans less than one
/// window or the prior window earned nothing.
pub fn windows(entries: &[LedgerEntry], window_days: i64) -> Option<TrendWindows> {
    if entries.is_empty() || calendar::span_days(entries) < window_days {
        return None;
    }
    let as_of = calendar::as_of(entries);
    let recent_start = as_of - Duration::days(window_days);
    let prior_start = recent_start - Duration::days(window_days);

    let mut recent = Decimal::ZERO;
    let mut prior = Decimal::ZERO;
    for entry in entries {
        let t = entry.event_time;
        if t > recent_start && t <= as_of {
            recent = recent.saturating_add(entry.amount);
        } else if t > prior_start && t <= recent_start {
            prior = prior.saturating_add(entry.amount);
        }
    }
    if prior <= Decimal::ZERO {
        return None;
    }
    let ratio = recent.checked_sub(prior)?.checked_div(prior)?.to_f64()?;
    Some(TrendWindows {
        recent,
        prior,
        change_pct: (ratio * 100.0).round() as i64,
    })
}

pub fn build(entries: &[LedgerEntry], config: &InsightsConfig) -> Option<InsightCard> {
    let days = config.trend_window_days;
    let w = windows(entries, days)?;

    let (direction, title) = match w.change_pct {
        p if p > 0 => ("increase", format!("Revenue up {p}% over the last {days} days")),
        p if p < 0 => ("decrease", format!("Revenue down {}% over the last {days} days", -p)),
        _ => ("no change", format!("Revenue steady over the last {days} days")),
    };
    let description = format!(
        "You earned {} in the last {days} days compared with {} in the {days} days before, a {}% {direction}.",
        ringgit(w.recent),
        ringgit(w.prior),
        w.change_pct.abs(),
    );

    Some(
        InsightCard::new(InsightType::Trend, title, description).with_data(json!({
            "window_days": days,
            "recent_total": w.recent.round_dp(2).to_f64().unwrap_or(0.0),
            "prior_total": w.prior.round_dp(2).to_f64().unwrap_or(0.0),
            "change_pct": w.change_pct,
            "direction": direction,
        })),
    )
}
