//! Per-entry attributes: a typed part keyed by event type plus an open bag.
//!
//! The typed part carries the known structured facts of each event type.
//! Everything else (sender names, order references, item descriptions,
//! source-specific columns) stays in the open bag untouched.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ledger::EventType;

/// Known structured facts, one variant per event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypedAttributes {
    Order {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_count: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        order_count: Option<u32>,
    },
    Payment {
        #[serde(default)]
        manual_entry: bool,
    },
    Payout {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform_fee: Option<Decimal>,
    },
    Refund {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        refunded_amount: Option<Decimal>,
    },
}

impl TypedAttributes {
    /// Empty typed attributes for an event type.
    pub fn empty(event_type: EventType) -> Self {
        match event_type {
            EventType::Order => Self::Order {
                item_count: None,
                order_count: None,
            },
            EventType::Payment => Self::Payment {
                manual_entry: false,
            },
            EventType::Payout => Self::Payout { platform_fee: None },
            EventType::Refund => Self::Refund {
                refunded_amount: None,
            },
        }
    }
}

/// Attributes attached to a ledger entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typed: Option<TypedAttributes>,
    /// Residual open bag. `BTreeMap` keeps iteration order stable.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl EntryAttributes {
    /// Split a free-form attribute object into typed facts and the open bag.
    ///
    /// A known key is only lifted into the typed part when its value parses;
    /// otherwise it stays in the bag as-is.
    pub fn from_map(event_type: EventType, map: serde_json::Map<String, Value>) -> Self {
        let mut extra: BTreeMap<String, Value> = map.into_iter().collect();
        let typed = match event_type {
            EventType::Order => TypedAttributes::Order {
                item_count: take_parsed(&mut extra, &["item_count", "items_count"], as_u32),
                order_count: take_parsed(&mut extra, &["order_count"], as_u32),
            },
            EventType::Payment => TypedAttributes::Payment {
                manual_entry: take_parsed(&mut extra, &["manual_entry"], Value::as_bool)
                    .unwrap_or(false),
            },
            EventType::Payout => TypedAttributes::Payout {
                platform_fee: take_parsed(&mut extra, &["platform_fee", "fees", "fee"], as_decimal),
            },
            EventType::Refund => TypedAttributes::Refund {
                refunded_amount: take_parsed(&mut extra, &["refunded_amount"], as_decimal),
            },
        };
        Self {
            typed: Some(typed),
            extra,
        }
    }

    /// String-valued fields of the open bag, including strings inside arrays.
    /// Keys are visited in sorted order.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for value in self.extra.values() {
            collect_strings(value, &mut out);
        }
        out
    }
}

fn collect_strings<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) => out.push(s.as_str()),
        Value::Array(items) => {
            for item in items {
                if let Value::String(s) = item {
                    out.push(s.as_str());
                }
            }
        }
        _ => {}
    }
}

fn take_parsed<T>(
    bag: &mut BTreeMap<String, Value>,
    keys: &[&str],
    parse: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    for key in keys {
        if let Some(parsed) = bag.get(*key).and_then(&parse) {
            bag.remove(*key);
            return Some(parsed);
        }
    }
    None
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn known_keys_are_lifted_and_text_stays_in_bag() {
        let attrs = EntryAttributes::from_map(
            EventType::Order,
            map(json!({"item_count": 3, "customer": "Aminah", "items": ["nasi lemak", "teh tarik"]})),
        );
        assert_eq!(
            attrs.typed,
            Some(TypedAttributes::Order {
                item_count: Some(3),
                order_count: None
            })
        );
        assert!(!attrs.extra.contains_key("item_count"));
        assert_eq!(attrs.text_fields(), vec!["Aminah", "nasi lemak", "teh tarik"]);
    }

    #[test]
    fn unparseable_known_key_stays_in_bag() {
        let attrs = EntryAttributes::from_map(EventType::Payout, map(json!({"fees": "n/a"})));
        assert_eq!(
            attrs.typed,
            Some(TypedAttributes::Payout { platform_fee: None })
        );
        assert_eq!(attrs.extra.get("fees"), Some(&json!("n/a")));
    }

    #[test]
    fn manual_entry_marker_is_typed() {
        let attrs =
            EntryAttributes::from_map(EventType::Payment, map(json!({"manual_entry": true})));
        assert_eq!(
            attrs.typed,
            Some(TypedAttributes::Payment { manual_entry: true })
        );
        assert!(attrs.extra.is_empty());
    }
}
