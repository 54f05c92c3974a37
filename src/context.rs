//! Glues the validated model to a run's results and builds/saves the
//! output JSON document (spec section 6). Grounded in
//! `original_source/modules/context.py`.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::entities::{AemComGlobalResult, AhpResult, GroupAhpModel};
use crate::error::AhpError;

pub struct Context {
    group_model: GroupAhpModel,
    ahp_result: Option<AhpResult>,
    aem_com_result: Option<AemComGlobalResult>,
}

impl Context {
    pub fn new(group_model: GroupAhpModel) -> Self {
        Self {
            group_model,
            ahp_result: None,
            aem_com_result: None,
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AhpError> {
        let group_model = crate::ingest::load_from_file(path)?;
        Ok(Self::new(group_model))
    }

    pub fn group_model(&self) -> &GroupAhpModel {
        &self.group_model
    }

    pub fn set_ahp_result(&mut self, result: AhpResult) {
        self.ahp_result = Some(result);
    }

    pub fn ahp_result(&self) -> Option<&AhpResult> {
        self.ahp_result.as_ref()
    }

    pub fn set_aem_com_result(&mut self, result: AemComGlobalResult) {
        self.aem_com_result = Some(result);
    }

    pub fn aem_com_result(&self) -> Option<&AemComGlobalResult> {
        self.aem_com_result.as_ref()
    }

    /// Builds the output document: the input mirrored back out, plus
    /// `result.aem_com = { summary, details }`.
    pub fn build_result_payload(&self) -> Result<Value, AhpError> {
        let global = self.aem_com_result.as_ref().ok_or_else(|| {
            AhpError::StructuralInvariantViolated(
                "no AEM-COM result in context; run the orchestrator first".into(),
            )
        })?;

        let rho = self.group_model.settings.aem_com.permissibility;

        let mut initial_sum = 0.0;
        let mut final_sum = 0.0;
        let mut min_sum = 0.0;

        if let Some(criteria_result) = &global.criteria_result {
            initial_sum += criteria_result.run.gcompi_initial;
            final_sum += criteria_result.run.gcompi_final;
            min_sum += criteria_result.run.gcompi_min;
        }
        for alt_result in &global.alternatives_results {
            initial_sum += alt_result.run.gcompi_initial;
            final_sum += alt_result.run.gcompi_final;
            min_sum += alt_result.run.gcompi_min;
        }

        let mut payload = to_value(&self.group_model)?;
        if let Some(ahp_result) = &self.ahp_result {
            payload["ahp_result"] = to_value(ahp_result)?;
        }

        payload["result"] = json!({
            "aem_com": {
                "summary": {
                    "permissibility": rho,
                    "gcompi_initial_total": initial_sum,
                    "gcompi_final_total": final_sum,
                    "gcompi_min_total": min_sum,
                    "delta_total": final_sum - initial_sum,
                    "improvement_total": initial_sum - final_sum,
                    "generated_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                },
                "details": to_value(global)?,
            }
        });

        Ok(payload)
    }

    /// Writes the result payload to `output_path`. If the path ends in
    /// `.json` it is used as-is; otherwise it is treated as a directory
    /// (created if needed) and the file is named `YYYYMMDD_HHMMSS.json`.
    pub fn save_result_json(&self, output_path: impl AsRef<Path>) -> Result<PathBuf, AhpError> {
        let payload = self.build_result_payload()?;
        let output_path = output_path.as_ref();

        let is_json_file = output_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let out_file = if is_json_file {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(io_err)?;
                }
            }
            output_path.to_path_buf()
        } else {
            std::fs::create_dir_all(output_path).map_err(io_err)?;
            let file_name = format!("{}.json", Utc::now().format("%Y%m%d_%H%M%S"));
            output_path.join(file_name)
        };

        let body = serde_json::to_string_pretty(&payload)
            .map_err(|e| AhpError::InputMalformed(e.to_string()))?;
        std::fs::write(&out_file, body + "\n").map_err(io_err)?;

        Ok(out_file)
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, AhpError> {
    serde_json::to_value(value).map_err(|e| AhpError::InputMalformed(e.to_string()))
}

fn io_err(e: std::io::Error) -> AhpError {
    AhpError::InputMalformed(e.to_string())
}
