use std::collections::BTreeMap;

use credence_core::config::InsightsConfig;
use credence_core::models::{Channel, InsightCard, InsightType, LedgerEntry};
use serde_json::json;

pub fn build(entries: &[LedgerEntry], config: &InsightsConfig) -> Option<InsightCard> {
    if entries.is_empty() {
        return None;
    }
    let mut counts: BTreeMap<Channel, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.channel).or_insert(0) += 1;
    }

    let n = counts.len();
    let labels: Vec<&str> = counts.keys().map(Channel::label).collect();
    let mut description = format!("You have evidence from: {}.", labels.join(", "));
    if n < config.min_channels {
        description.push_str(
            " Adding another channel, such as a bank or e-wallet statement, lets your transactions be cross-checked and raises your score.",
        );
    } else {
        description.push_str(" Transactions can be cross-checked between these sources.");
    }

    let channels: Vec<_> = counts
        .iter()
        .map(|(channel, count)| json!({"channel": channel.name(), "entries": count}))
        .collect();
    let has_statement = counts.keys().any(Channel::is_statement);

    Some(
        InsightCard::new(
            InsightType::Coverage,
            format!("Evidence from {n} channel{}", if n == 1 { "" } else { "s" }),
            description,
        )
        .with_data(json!({
            "channels": channels,
            "has_statement_source": has_statement,
            "diversify": n < config.min_channels,
        })),
    )
}
