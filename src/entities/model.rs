use serde::{Deserialize, Serialize};

use super::alternative::Alternative;
use super::criterion::Criterion;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}
