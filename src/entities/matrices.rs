use serde::Serialize;

use super::matrix::PairwiseMatrix;

/// The three groupings of pairwise matrices: criteria-level (per expert),
/// alternative-level (per expert x criterion), and an optional pre-supplied
/// collective level used by `InitialMode::Provided`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PairwiseMatrices {
    pub criteria_level: Vec<PairwiseMatrix>,
    pub alternative_level: Vec<PairwiseMatrix>,
    pub collective_level: Vec<PairwiseMatrix>,
}

impl PairwiseMatrices {
    pub fn alternative_matrices_for(&self, criterion_id: &str) -> Vec<&PairwiseMatrix> {
        self.alternative_level
            .iter()
            .filter(|m| m.criterion_id.as_deref() == Some(criterion_id))
            .collect()
    }

    /// Looks up a provided collective matrix for the given level
    /// (`criterion_id = None` means the criteria level), matching on item
    /// order exactly as the spec requires.
    pub fn provided_collective_matrix(
        &self,
        criterion_id: Option<&str>,
        items: &[String],
    ) -> Option<&PairwiseMatrix> {
        self.collective_level.iter().find(|pm| {
            pm.criterion_id.as_deref() == criterion_id
                && pm.items.len() == items.len()
                && pm.items.iter().zip(items).all(|(a, b)| a == b)
        })
    }
}
