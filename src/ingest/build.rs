use crate::entities::{GroupAhpModel, Model, PairwiseMatrices, PairwiseMatrix, Settings};
use crate::error::AhpError;

use super::raw::{RawDocument, RawMatrixEntry, RawPairwiseMatrices};

pub fn build_group_model(raw: RawDocument) -> Result<GroupAhpModel, AhpError> {
    let model = Model {
        criteria: raw.model.criteria,
        alternatives: raw.model.alternatives,
    };

    let settings = Settings {
        ahp_scale: raw.settings.ahp_scale,
        aem_com: raw.settings.aem_com,
    };

    let pairwise_matrices = build_pairwise_matrices(raw.pairwise_matrices)?;

    Ok(GroupAhpModel {
        problem: raw.problem,
        experts: raw.experts,
        model,
        settings,
        pairwise_matrices,
    })
}

fn build_pairwise_matrices(raw: RawPairwiseMatrices) -> Result<PairwiseMatrices, AhpError> {
    let criteria_level = raw
        .criteria_level
        .into_iter()
        .map(build_matrix)
        .collect::<Result<Vec<_>, _>>()?;

    let alternative_level = raw
        .alternative_level
        .into_iter()
        .map(build_matrix)
        .collect::<Result<Vec<_>, _>>()?;

    let mut collective_level = raw
        .collective_level
        .into_iter()
        .map(build_matrix)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(entry) = raw.collective_matrix {
        collective_level.push(build_matrix(entry)?);
    }

    Ok(PairwiseMatrices {
        criteria_level,
        alternative_level,
        collective_level,
    })
}

fn build_matrix(entry: RawMatrixEntry) -> Result<PairwiseMatrix, AhpError> {
    PairwiseMatrix::new(entry.items, entry.matrix, entry.expert_id, entry.criterion_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"
        {
          "problem": {"id": "p1", "name": "Pick a vendor", "description": "", "goal": "choose best"},
          "experts": [{"id": "e1", "name": "Alice", "role": "lead", "weight": 1.0}],
          "model": {
            "criteria": [{"id": "cost", "name": "Cost", "description": ""}],
            "alternatives": [
              {"id": "a1", "name": "A1", "description": ""},
              {"id": "a2", "name": "A2", "description": ""}
            ]
          },
          "settings": {
            "ahp_scale": "saaty_1_9",
            "aem_com": {
              "permissibility": 0.2,
              "apply_to": ["criteria", "alternatives_by_criterion"],
              "max_iterations": 50,
              "initial_mode": "aij",
              "strict_decrease": false
            }
          },
          "pairwise_matrices": {
            "criteria_level": [
              {"expert_id": "e1", "items": ["cost"], "matrix": [[1.0]]}
            ],
            "alternative_level": [
              {
                "expert_id": "e1",
                "criterion_id": "cost",
                "items": ["a1", "a2"],
                "matrix": [[1.0, 3.0], [0.3333333333333333, 1.0]]
              }
            ]
          }
        }
        "#
    }

    #[test]
    fn parses_and_validates_sample_document() {
        let raw: RawDocument = serde_json::from_str(sample_json()).unwrap();
        let model = build_group_model(raw).unwrap();

        assert_eq!(model.problem.id, "p1");
        assert_eq!(model.pairwise_matrices.criteria_level.len(), 1);
        assert_eq!(model.pairwise_matrices.alternative_level.len(), 1);
    }

    #[test]
    fn rejects_bad_matrix_shape() {
        let bad = sample_json().replace(r#"[[1.0]]"#, r#"[[1.0, 2.0]]"#);
        let raw: RawDocument = serde_json::from_str(&bad).unwrap();
        assert!(build_group_model(raw).is_err());
    }
}
