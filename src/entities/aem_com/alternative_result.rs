use serde::{Deserialize, Serialize};

use super::run_result::AemComRunResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeLevelAemComResult {
    pub level: String,
    pub criterion_id: String,
    pub run: AemComRunResult,
}

impl AlternativeLevelAemComResult {
    pub fn new(criterion_id: String, run: AemComRunResult) -> Self {
        Self {
            level: "alternatives".to_string(),
            criterion_id,
            run,
        }
    }
}
