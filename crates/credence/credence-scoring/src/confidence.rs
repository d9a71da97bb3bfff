use credence_core::config::ScoringConfig;
use credence_core::models::ConfidenceLevel;

/// Map a final score and entry count onto a confidence level.
///
/// HIGH needs both a high score and enough entries; MEDIUM needs either a
/// middling score or a handful of entries.
pub fn level(score: u8, entry_count: usize, config: &ScoringConfig) -> ConfidenceLevel {
    if score >= config.high_min_score && entry_count >= config.high_min_entries {
        ConfidenceLevel::High
    } else if score >= config.medium_min_score || entry_count >= config.medium_min_entries {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
