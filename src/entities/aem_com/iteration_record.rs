use serde::{Deserialize, Serialize};

/// One accepted AEM-COM move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AemComIterationRecord {
    pub iteration: usize,
    pub pair_indices: (usize, usize),
    pub pair_items: (String, String),
    pub t_rs: f64,
    pub old_value: f64,
    pub new_value: f64,
    pub gcompi_value: f64,
}
