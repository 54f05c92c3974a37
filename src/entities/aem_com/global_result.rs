use serde::{Deserialize, Serialize};

use super::alternative_result::AlternativeLevelAemComResult;
use super::criteria_result::CriteriaLevelAemComResult;

/// Overall AEM-COM result across the whole hierarchy: the optional
/// criteria-level run, one alternative-level run per criterion, and
/// accumulated totals.
///
/// `alternatives_results` is an ordered list rather than a map so that the
/// orchestrator's deterministic visit order (declared criteria order, per
/// spec section 5) survives serialization; each entry carries its own
/// `criterion_id`, so lookup-by-id is a linear scan via `for_criterion`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AemComGlobalResult {
    pub criteria_result: Option<CriteriaLevelAemComResult>,
    pub alternatives_results: Vec<AlternativeLevelAemComResult>,

    pub total_iterations: usize,
    pub levels_count: usize,
}

impl AemComGlobalResult {
    pub fn for_criterion(&self, criterion_id: &str) -> Option<&AlternativeLevelAemComResult> {
        self.alternatives_results
            .iter()
            .find(|r| r.criterion_id == criterion_id)
    }
}
