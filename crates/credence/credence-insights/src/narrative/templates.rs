//! Sentence templates for the verifier narrative.

use credence_core::models::{ConfidenceLevel, FlagKind};

/// Plain-language label for a breakdown component.
pub fn component_label(component: &str) -> &'static str {
    match component {
        "activity" => "transaction activity",
        "consistency" => "revenue consistency",
        "longevity" => "business longevity",
        "evidence_strength" => "evidence quality",
        "cross_source" => "cross-source verification",
        _ => "other factors",
    }
}

/// Description for a fired flag name. Unknown names are de-snaked.
pub fn flag_description(name: &str) -> String {
    FlagKind::from_name(name)
        .map(|k| k.describe().to_string())
        .unwrap_or_else(|| name.replace('_', " "))
}

/// Closing sentence keyed by confidence level.
pub fn assessment(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => {
            "Overall, the records give a well-corroborated picture of regular trading."
        }
        ConfidenceLevel::Medium => {
            "Overall, the records support the reported activity, though additional corroborating evidence would strengthen the case."
        }
        ConfidenceLevel::Low => {
            "Overall, the evidence is too limited to support firm conclusions at this stage."
        }
    }
}

/// Join items as `a`, `a and b`, or `a, b and c`.
pub fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
