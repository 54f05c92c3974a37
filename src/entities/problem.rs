use serde::{Deserialize, Serialize};

/// Free-text problem description, used only for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub goal: String,
}
