use serde::{Deserialize, Serialize};

use super::run_result::AemComRunResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaLevelAemComResult {
    pub level: String,
    pub run: AemComRunResult,
}

impl CriteriaLevelAemComResult {
    pub fn new(run: AemComRunResult) -> Self {
        Self {
            level: "criteria".to_string(),
            run,
        }
    }
}
