use chrono::{Datelike, Weekday};
use credence_core::config::InsightsConfig;
use credence_core::models::{InsightCard, InsightType, LedgerEntry};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::json;

use super::ringgit;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Revenue and entry count per weekday, Monday first.
pub fn weekday_totals(entries: &[LedgerEntry]) -> [(Decimal, usize); 7] {
    let mut totals = [(Decimal::ZERO, 0usize); 7];
    for entry in entries {
        let slot = &mut totals[entry.event_time.weekday().num_days_from_monday() as usize];
        slot.0 = slot.0.saturating_add(entry.amount);
        slot.1 += 1;
    }
    totals
}

/// Busiest weekday by revenue, plus the runner-up when it comes close.
/// Ties go to the earlier weekday. No card when nothing was earned.
pub fn build(entries: &[LedgerEntry], config: &InsightsConfig) -> Option<InsightCard> {
    let totals = weekday_totals(entries);

    let mut ranked: Vec<usize> = (0..7).collect();
    ranked.sort_by(|&a, &b| totals[b].0.cmp(&totals[a].0).then(a.cmp(&b)));
    let top = ranked[0];
    if totals[top].0 <= Decimal::ZERO {
        return None;
    }

    let top_value = totals[top].0.to_f64().unwrap_or(0.0);
    let second = ranked[1];
    let second_value = totals[second].0.to_f64().unwrap_or(0.0);
    let runner_up = (second_value > 0.0 && second_value >= config.peak_runner_up_ratio * top_value)
        .then_some(second);

    let top_name = weekday_name(WEEK[top]);
    let (title, description) = match runner_up {
        Some(r) => (
            format!("Peak activity on {top_name}s and {}s", weekday_name(WEEK[r])),
            format!(
                "{top_name} brings in the most revenue ({} across {} entries), closely followed by {} ({}). Consider preparing extra stock for these days.",
                ringgit(totals[top].0),
                totals[top].1,
                weekday_name(WEEK[r]),
                ringgit(totals[r].0),
            ),
        ),
        None => (
            format!("Peak activity on {top_name}s"),
            format!(
                "{top_name} brings in the most revenue ({} across {} entries). Consider preparing extra stock for that day.",
                ringgit(totals[top].0),
                totals[top].1,
            ),
        ),
    };

    let by_day: Vec<_> = WEEK
        .iter()
        .zip(totals.iter())
        .map(|(day, (total, count))| {
            json!({
                "weekday": weekday_name(*day).to_lowercase(),
                "total": total.round_dp(2).to_f64().unwrap_or(0.0),
                "entries": count,
            })
        })
        .collect();

    Some(
        InsightCard::new(InsightType::PeakDay, title, description).with_data(json!({
            "peak": top_name.to_lowercase(),
            "runner_up": runner_up.map(|r| weekday_name(WEEK[r]).to_lowercase()),
            "weekdays": by_day,
        })),
    )
}
