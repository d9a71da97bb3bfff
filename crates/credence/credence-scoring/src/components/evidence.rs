use credence_core::constants::EVIDENCE_STRENGTH_MAX;
use credence_core::models::LedgerEntry;

/// Evidence-strength component: `25 × mean(confidence)`.
///
/// Confidences are summed in sorted order so the result does not depend on
/// entry order.
pub fn calculate(entries: &[LedgerEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let mut confidences: Vec<f64> = entries.iter().map(|e| e.confidence).collect();
    confidences.sort_by(f64::total_cmp);
    let mean = confidences.iter().sum::<f64>() / confidences.len() as f64;
    EVIDENCE_STRENGTH_MAX * mean.clamp(0.0, 1.0)
}
