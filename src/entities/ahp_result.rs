use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of the classical AHP solve: criteria weights and consistency,
/// per-criterion alternative weights and consistency, and global
/// alternative weights normalized to sum 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AhpResult {
    pub criteria_weights: HashMap<String, f64>,
    pub criteria_consistency_ratio: f64,
    pub criteria_consistency_percent: f64,

    pub alt_weights_by_criterion: HashMap<String, HashMap<String, f64>>,
    pub alt_consistency_ratio_by_criterion: HashMap<String, f64>,
    pub alt_consistency_percent_by_criterion: HashMap<String, f64>,

    pub global_alt_weights: HashMap<String, f64>,
}
