//! Component F — drives AEM-COM across the criteria level and once per
//! criterion at the alternative level, in the declared, deterministic
//! order: criteria level first, then alternative levels in the order the
//! criteria are declared in the model.

use tracing::{info, instrument};

use crate::aem_com::AemComEngine;
use crate::entities::{
    AemComGlobalResult, ApplyToLevel, CriteriaLevelAemComResult, GroupAhpModel, InitialMode,
    PairwiseMatrix,
};
use crate::error::AhpError;
use crate::{aij, entities::AlternativeLevelAemComResult};

pub struct Orchestrator;

impl Orchestrator {
    #[instrument(skip(model))]
    pub fn run_full(model: &GroupAhpModel) -> Result<AemComGlobalResult, AhpError> {
        let apply_to = &model.settings.aem_com.apply_to;

        let mut criteria_result = None;
        let mut alternatives_results = Vec::new();
        let mut total_iterations = 0usize;
        let mut levels_count = 0usize;

        if apply_to.contains(&ApplyToLevel::Criteria) {
            let result = Self::run_on_criteria_level(model)?;
            total_iterations += result.run.iterations;
            levels_count += 1;
            info!(iterations = result.run.iterations, "criteria-level AEM-COM complete");
            criteria_result = Some(result);
        }

        if apply_to.contains(&ApplyToLevel::AlternativesByCriterion) {
            for criterion in &model.model.criteria {
                let matrices = model
                    .pairwise_matrices
                    .alternative_matrices_for(&criterion.id);
                if matrices.is_empty() {
                    continue;
                }

                let result = Self::run_on_alternative_level_for_criterion(model, &criterion.id)?;
                total_iterations += result.run.iterations;
                levels_count += 1;
                info!(
                    criterion = criterion.id.as_str(),
                    iterations = result.run.iterations,
                    "alternative-level AEM-COM complete"
                );
                alternatives_results.push(result);
            }
        }

        Ok(AemComGlobalResult {
            criteria_result,
            alternatives_results,
            total_iterations,
            levels_count,
        })
    }

    pub fn run_on_criteria_level(
        model: &GroupAhpModel,
    ) -> Result<CriteriaLevelAemComResult, AhpError> {
        let matrices = &model.pairwise_matrices.criteria_level;
        if matrices.is_empty() {
            return Err(AhpError::EmptyLevel(
                "no criteria-level matrices (criteria_level)".into(),
            ));
        }

        let run = run_level(model, matrices, None)?;
        Ok(CriteriaLevelAemComResult::new(run))
    }

    pub fn run_on_alternative_level_for_criterion(
        model: &GroupAhpModel,
        criterion_id: &str,
    ) -> Result<AlternativeLevelAemComResult, AhpError> {
        let matrices: Vec<PairwiseMatrix> = model
            .pairwise_matrices
            .alternative_matrices_for(criterion_id)
            .into_iter()
            .cloned()
            .collect();

        if matrices.is_empty() {
            return Err(AhpError::EmptyLevel(format!(
                "no alternative-level matrices for criterion '{criterion_id}'"
            )));
        }

        let run = run_level(model, &matrices, Some(criterion_id))?;
        Ok(AlternativeLevelAemComResult::new(
            criterion_id.to_string(),
            run,
        ))
    }
}

fn run_level(
    model: &GroupAhpModel,
    matrices: &[PairwiseMatrix],
    criterion_id: Option<&str>,
) -> Result<crate::entities::AemComRunResult, AhpError> {
    let items = matrices[0].items.clone();

    let family: Vec<Vec<Vec<f64>>> = matrices.iter().map(|m| m.matrix.clone()).collect();
    let alpha: Vec<f64> = matrices
        .iter()
        .map(|m| {
            m.expert_id
                .as_deref()
                .map(|id| model.expert_weight(id))
                .unwrap_or(0.0)
                .max(0.0)
        })
        .collect();

    let settings = &model.settings.aem_com;
    let initial_matrix = build_initial_matrix(model, &family, &alpha, &items, criterion_id)?;

    let engine = AemComEngine::new(settings);
    engine.run(&items, &family, &alpha, initial_matrix)
}

fn build_initial_matrix(
    model: &GroupAhpModel,
    family: &[Vec<Vec<f64>>],
    alpha: &[f64],
    items: &[String],
    criterion_id: Option<&str>,
) -> Result<Vec<Vec<f64>>, AhpError> {
    match model.settings.aem_com.initial_mode {
        InitialMode::Provided => model
            .pairwise_matrices
            .provided_collective_matrix(criterion_id, items)
            .map(|pm| pm.matrix.clone())
            .ok_or_else(|| {
                AhpError::ProvidedMatrixMissing(
                    criterion_id.unwrap_or("criteria").to_string(),
                )
            }),
        InitialMode::Aij => aij::aggregate(family, alpha),
        InitialMode::FirstExpert => family
            .first()
            .cloned()
            .ok_or_else(|| AhpError::EmptyLevel("empty family for first_expert mode".into())),
        InitialMode::Identity => {
            let n = items.len();
            Ok((0..n)
                .map(|_| vec![1.0_f64; n])
                .collect())
        }
    }
}
