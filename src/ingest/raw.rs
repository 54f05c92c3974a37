//! Wire-format shapes for the input JSON document (spec section 6). These
//! are intentionally permissive (`Deserialize`-only, no invariants) — all
//! structural validation happens when `build::build_group_model` converts
//! them into `entities::GroupAhpModel`.

use serde::Deserialize;

use crate::entities::{AemComSettings, Alternative, Criterion, Expert, Problem};

#[derive(Debug, Deserialize)]
pub struct RawDocument {
    pub problem: Problem,
    #[serde(default)]
    pub experts: Vec<Expert>,
    pub model: RawModel,
    pub settings: RawSettings,
    pub pairwise_matrices: RawPairwiseMatrices,
}

#[derive(Debug, Deserialize)]
pub struct RawModel {
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
pub struct RawSettings {
    #[serde(default = "default_ahp_scale")]
    pub ahp_scale: String,
    pub aem_com: AemComSettings,
}

fn default_ahp_scale() -> String {
    "saaty_1_9".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RawMatrixEntry {
    pub expert_id: Option<String>,
    pub criterion_id: Option<String>,
    pub items: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPairwiseMatrices {
    #[serde(default)]
    pub criteria_level: Vec<RawMatrixEntry>,
    #[serde(default)]
    pub alternative_level: Vec<RawMatrixEntry>,
    /// Singular convenience form for a single provided criteria-level
    /// collective matrix.
    #[serde(default)]
    pub collective_matrix: Option<RawMatrixEntry>,
    #[serde(default)]
    pub collective_level: Vec<RawMatrixEntry>,
}
