//! Two-layer ingestion: untyped/wire `raw` shapes deserialized by `serde`,
//! converted by `build` into validated `entities::GroupAhpModel` values.

pub mod build;
pub mod raw;

use std::path::Path;

use crate::entities::GroupAhpModel;
use crate::error::AhpError;

pub fn load_from_str(contents: &str) -> Result<GroupAhpModel, AhpError> {
    let raw: raw::RawDocument = serde_json::from_str(contents)
        .map_err(|e| AhpError::InputMalformed(e.to_string()))?;
    build::build_group_model(raw)
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<GroupAhpModel, AhpError> {
    let contents = std::fs::read_to_string(path.as_ref())
        .map_err(|e| AhpError::InputMalformed(format!("{}: {e}", path.as_ref().display())))?;
    load_from_str(&contents)
}
