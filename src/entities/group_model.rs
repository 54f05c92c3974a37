use serde::Serialize;

use super::expert::Expert;
use super::matrices::PairwiseMatrices;
use super::model::Model;
use super::problem::Problem;
use super::settings::Settings;

/// The fully validated, immutable input to the AHP/AEM-COM pipeline.
/// Assembled exclusively by `ingest::build` — no `Deserialize` impl.
#[derive(Debug, Clone, Serialize)]
pub struct GroupAhpModel {
    pub problem: Problem,
    pub experts: Vec<Expert>,
    pub model: Model,
    pub settings: Settings,
    pub pairwise_matrices: PairwiseMatrices,
}

impl GroupAhpModel {
    pub fn expert_weight(&self, expert_id: &str) -> f64 {
        self.experts
            .iter()
            .find(|e| e.id == expert_id)
            .map(|e| e.weight)
            .unwrap_or(0.0)
    }
}
