use serde::{Deserialize, Serialize};

/// An expert contributing pairwise judgments. Weights need not sum to 1;
/// the engine normalizes by the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expert {
    pub id: String,
    pub name: String,
    pub role: String,
    pub weight: f64,
}
