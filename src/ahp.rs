//! Component D — classical group AHP solver: aggregate expert matrices per
//! level, extract weights, compute global alternative scores.

use std::collections::HashMap;

use tracing::info;

use crate::aij;
use crate::entities::{AhpResult, GroupAhpModel, PairwiseMatrix};
use crate::error::AhpError;
use crate::numerics::{consistency_ratio, consistency_to_percent, priority_vector};

pub struct AhpSolver;

impl AhpSolver {
    pub fn solve(model: &GroupAhpModel) -> Result<AhpResult, AhpError> {
        let expert_weights: HashMap<&str, f64> = model
            .experts
            .iter()
            .map(|e| (e.id.as_str(), e.weight))
            .collect();

        let criteria_matrices = &model.pairwise_matrices.criteria_level;
        if criteria_matrices.is_empty() {
            return Err(AhpError::EmptyLevel(
                "no criteria-level pairwise matrices supplied".into(),
            ));
        }

        let (criteria_matrix, criteria_items) =
            aggregate_level(criteria_matrices, &expert_weights)?;

        let criteria_weights_vec = priority_vector(&criteria_matrix);
        let criteria_weights: HashMap<String, f64> = criteria_items
            .iter()
            .cloned()
            .zip(criteria_weights_vec)
            .collect();

        let criteria_cr = consistency_ratio(&criteria_matrix);
        let criteria_cr_percent = consistency_to_percent(criteria_cr);

        info!(
            n_criteria = criteria_items.len(),
            cr = criteria_cr,
            "aggregated criteria-level matrices"
        );

        let mut alt_weights_by_criterion: HashMap<String, HashMap<String, f64>> = HashMap::new();
        let mut alt_cr_by_criterion: HashMap<String, f64> = HashMap::new();
        let mut alt_cr_percent_by_criterion: HashMap<String, f64> = HashMap::new();

        for criterion in &model.model.criteria {
            let matrices: Vec<&PairwiseMatrix> = model
                .pairwise_matrices
                .alternative_matrices_for(&criterion.id);

            if matrices.is_empty() {
                continue;
            }

            let owned: Vec<PairwiseMatrix> = matrices.into_iter().cloned().collect();
            let (agg_matrix, alt_items) = aggregate_level(&owned, &expert_weights)?;

            let local_weights_vec = priority_vector(&agg_matrix);
            let local_weights: HashMap<String, f64> =
                alt_items.iter().cloned().zip(local_weights_vec).collect();

            let cr = consistency_ratio(&agg_matrix);
            alt_weights_by_criterion.insert(criterion.id.clone(), local_weights);
            alt_cr_by_criterion.insert(criterion.id.clone(), cr);
            alt_cr_percent_by_criterion.insert(criterion.id.clone(), consistency_to_percent(cr));
        }

        let global_alt_weights =
            compute_global_alternative_weights(&criteria_weights, &alt_weights_by_criterion);

        Ok(AhpResult {
            criteria_weights,
            criteria_consistency_ratio: criteria_cr,
            criteria_consistency_percent: criteria_cr_percent,
            alt_weights_by_criterion,
            alt_consistency_ratio_by_criterion: alt_cr_by_criterion,
            alt_consistency_percent_by_criterion: alt_cr_percent_by_criterion,
            global_alt_weights,
        })
    }
}

/// Aggregates a family of expert matrices into one collective matrix via
/// AIJ, with item order taken from the first matrix. Other experts'
/// matrices are permuted to match by item id; a missing item is fatal.
fn aggregate_level(
    matrices: &[PairwiseMatrix],
    expert_weights: &HashMap<&str, f64>,
) -> Result<(Vec<Vec<f64>>, Vec<String>), AhpError> {
    let base_items = matrices[0].items.clone();
    let n = base_items.len();

    let mut permuted_family = Vec::with_capacity(matrices.len());
    let mut alpha = Vec::with_capacity(matrices.len());

    for m in matrices {
        let index_map = build_index_map(&base_items, &m.items)?;
        let mut permuted = vec![vec![0.0_f64; n]; n];
        for i in 0..n {
            for j in 0..n {
                permuted[i][j] = m.matrix[index_map[i]][index_map[j]];
            }
        }
        permuted_family.push(permuted);

        let w = m
            .expert_id
            .as_deref()
            .and_then(|id| expert_weights.get(id))
            .copied()
            .unwrap_or(0.0);
        alpha.push(w.max(0.0));
    }

    let aggregated = aij::aggregate(&permuted_family, &alpha)?;
    Ok((aggregated, base_items))
}

fn build_index_map(base_items: &[String], other_items: &[String]) -> Result<Vec<usize>, AhpError> {
    base_items
        .iter()
        .map(|item| {
            other_items
                .iter()
                .position(|o| o == item)
                .ok_or_else(|| {
                    AhpError::StructuralInvariantViolated(format!(
                        "item '{item}' is missing from an expert's matrix"
                    ))
                })
        })
        .collect()
}

fn compute_global_alternative_weights(
    criteria_weights: &HashMap<String, f64>,
    alt_weights_by_criterion: &HashMap<String, HashMap<String, f64>>,
) -> HashMap<String, f64> {
    let mut global: HashMap<String, f64> = HashMap::new();

    for (c_id, w_c) in criteria_weights {
        if let Some(alt_weights) = alt_weights_by_criterion.get(c_id) {
            for (alt_id, w_local) in alt_weights {
                *global.entry(alt_id.clone()).or_insert(0.0) += w_c * w_local;
            }
        }
    }

    let total: f64 = global.values().sum();
    if total > 0.0 {
        for w in global.values_mut() {
            *w /= total;
        }
    }

    global
}
