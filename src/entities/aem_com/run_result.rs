use serde::{Deserialize, Serialize};

use super::iteration_record::AemComIterationRecord;

/// Result of one AEM-COM run for a single level (criteria, or alternatives
/// under one criterion).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AemComRunResult {
    pub items: Vec<String>,

    pub initial_matrix: Vec<Vec<f64>>,
    pub final_matrix: Vec<Vec<f64>>,

    pub initial_priorities: Vec<f64>,
    pub final_priorities: Vec<f64>,
    pub group_priorities: Vec<f64>,

    pub gcompi_initial: f64,
    pub gcompi_final: f64,
    pub gcompi_min: f64,

    pub iterations: usize,
    pub history: Vec<AemComIterationRecord>,
}
