//! Non-fatal structural/completeness validation report (spec section 6).
//! Grounded in `original_source/utils/validator.py`: each check contributes
//! to a percentage score; failures are collected as human-readable issues
//! but never abort the run.

use crate::entities::GroupAhpModel;
use crate::numerics::{consistency_ratio, consistency_to_percent};

pub struct ValidationReport {
    pub percent: u32,
    pub issues: Vec<String>,
}

pub struct Validator<'a> {
    model: &'a GroupAhpModel,
}

impl<'a> Validator<'a> {
    pub fn new(model: &'a GroupAhpModel) -> Self {
        Self { model }
    }

    /// Runs every check and returns a percentage (rounded) plus the list of
    /// failed checks. In `strict` mode, any failing check caps the score at
    /// 99 even if the rounded ratio would otherwise read 100.
    pub fn validate(&self, strict: bool) -> ValidationReport {
        let mut checks: Vec<(bool, String)> = Vec::new();

        checks.extend(self.check_problem());
        checks.extend(self.check_experts());
        checks.extend(self.check_model());
        checks.extend(self.check_pairwise_matrices(strict));

        let total = checks.len();
        let passed = checks.iter().filter(|(ok, _)| *ok).count();
        let issues: Vec<String> = checks
            .into_iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, msg)| msg)
            .collect();

        if total == 0 {
            return ValidationReport {
                percent: 0,
                issues,
            };
        }

        let mut percent = ((100.0 * passed as f64 / total as f64).round()) as u32;
        if strict && !issues.is_empty() && percent == 100 {
            percent = 99;
        }

        ValidationReport { percent, issues }
    }

    /// Per-matrix consistency percentages, for reporting alongside the
    /// structural validation report.
    pub fn consistency_by_matrix(&self) -> Vec<(Option<String>, Option<String>, f64)> {
        self.model
            .pairwise_matrices
            .criteria_level
            .iter()
            .chain(self.model.pairwise_matrices.alternative_level.iter())
            .map(|m| {
                let cr = consistency_ratio(&m.matrix);
                (
                    m.expert_id.clone(),
                    m.criterion_id.clone(),
                    consistency_to_percent(cr),
                )
            })
            .collect()
    }

    fn check_problem(&self) -> Vec<(bool, String)> {
        let p = &self.model.problem;
        vec![
            (!p.id.trim().is_empty(), "problem.id is not set".into()),
            (!p.name.trim().is_empty(), "problem.name is not set".into()),
            (!p.goal.trim().is_empty(), "problem.goal is not set".into()),
            (
                !p.description.trim().is_empty(),
                "problem.description is recommended but empty".into(),
            ),
        ]
    }

    fn check_experts(&self) -> Vec<(bool, String)> {
        let experts = &self.model.experts;
        let mut checks = vec![(!experts.is_empty(), "no experts declared".to_string())];

        for e in experts {
            checks.push((
                e.weight >= 0.0,
                format!("expert '{}' has a negative weight", e.id),
            ));
        }

        let total_weight: f64 = experts.iter().map(|e| e.weight.max(0.0)).sum();
        checks.push((
            experts.is_empty() || total_weight > 0.0,
            "all expert weights are zero".to_string(),
        ));

        checks
    }

    fn check_model(&self) -> Vec<(bool, String)> {
        let m = &self.model.model;
        vec![
            (!m.criteria.is_empty(), "no criteria declared".to_string()),
            (
                !m.alternatives.is_empty(),
                "no alternatives declared".to_string(),
            ),
        ]
    }

    /// Structural/completeness checks over the pairwise-matrix set. Under
    /// `strict`, also re-checks every entry against the Saaty 1/9..9 range
    /// (spec section 6; `original_source/utils/validator.py`'s
    /// `_check_single_matrix` does the same under strict validation).
    fn check_pairwise_matrices(&self, strict: bool) -> Vec<(bool, String)> {
        let pm = &self.model.pairwise_matrices;
        let mut checks = vec![(
            !pm.criteria_level.is_empty(),
            "no criteria-level pairwise matrices supplied".to_string(),
        )];

        for criterion in &self.model.model.criteria {
            checks.push((
                !pm.alternative_matrices_for(&criterion.id).is_empty(),
                format!(
                    "no alternative-level pairwise matrices for criterion '{}'",
                    criterion.id
                ),
            ));
        }

        let known_expert_ids: Vec<&str> =
            self.model.experts.iter().map(|e| e.id.as_str()).collect();
        for m in pm.criteria_level.iter().chain(pm.alternative_level.iter()) {
            if let Some(expert_id) = &m.expert_id {
                checks.push((
                    known_expert_ids.contains(&expert_id.as_str()),
                    format!("pairwise matrix references unknown expert '{expert_id}'"),
                ));
            }
        }

        if strict {
            for m in pm
                .criteria_level
                .iter()
                .chain(pm.alternative_level.iter())
                .chain(pm.collective_level.iter())
            {
                let label = matrix_label(m);
                let in_range = m
                    .matrix
                    .iter()
                    .flatten()
                    .all(|&v| v >= SAATY_LOWER - 1e-9 && v <= SAATY_UPPER + 1e-9);
                checks.push((
                    in_range,
                    format!("matrix '{label}' has an entry outside the Saaty 1/9..9 range"),
                ));
            }
        }

        checks
    }
}

const SAATY_LOWER: f64 = 1.0 / 9.0;
const SAATY_UPPER: f64 = 9.0;

fn matrix_label(m: &crate::entities::PairwiseMatrix) -> String {
    match (&m.expert_id, &m.criterion_id) {
        (Some(e), Some(c)) => format!("{e}/{c}"),
        (Some(e), None) => e.clone(),
        (None, Some(c)) => c.clone(),
        (None, None) => "unlabeled".to_string(),
    }
}
