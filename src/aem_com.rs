//! Component E — the AEM-COM consensus-reduction engine, the core of the
//! core. A constrained coordinate-descent over an n x n reciprocal matrix
//! that nudges its collective priority ratios toward the group-geometric
//! target, one pair per outer iteration, bounded by permissibility `rho`.

use tracing::debug;

use crate::aij;
use crate::entities::{AemComIterationRecord, AemComRunResult, AemComSettings};
use crate::error::AhpError;
use crate::gcompi::gcompi_family;
use crate::numerics::priority_vector;

const SAATY_LOWER: f64 = 1.0 / 9.0;
const SAATY_UPPER: f64 = 9.0;

pub struct AemComEngine {
    rho: f64,
    max_iterations: usize,
    strict_decrease: bool,
}

impl AemComEngine {
    pub fn new(settings: &AemComSettings) -> Self {
        Self {
            rho: settings.permissibility,
            max_iterations: settings.max_iterations,
            strict_decrease: settings.strict_decrease,
        }
    }

    /// Runs AEM-COM to completion (J exhausted, max_iterations reached, or
    /// no pair with |L| > 0 remains) starting from `initial_matrix`.
    pub fn run(
        &self,
        items: &[String],
        family: &[Vec<Vec<f64>>],
        alpha: &[f64],
        initial_matrix: Vec<Vec<f64>>,
    ) -> Result<AemComRunResult, AhpError> {
        let n = items.len();
        let v0 = priority_vector(&initial_matrix);

        if n <= 2 {
            let w_g = v0.clone();
            let gcompi_value = gcompi_family(family, alpha, &v0);
            return Ok(AemComRunResult {
                items: items.to_vec(),
                initial_matrix: initial_matrix.clone(),
                final_matrix: initial_matrix,
                initial_priorities: v0.clone(),
                final_priorities: v0,
                group_priorities: w_g,
                gcompi_initial: gcompi_value,
                gcompi_final: gcompi_value,
                gcompi_min: gcompi_value,
                iterations: 0,
                history: Vec::new(),
            });
        }

        let aij_matrix = aij::aggregate(family, alpha)?;
        let w_g = priority_vector(&aij_matrix);

        let gcompi_initial = gcompi_family(family, alpha, &v0);
        let gcompi_min = gcompi_family(family, alpha, &w_g);

        let mut matrix = initial_matrix.clone();
        let mut v = v0.clone();
        let mut gcompi_current = gcompi_initial;

        let mut candidates: Vec<(usize, usize)> =
            (0..n).flat_map(|r| (r + 1..n).map(move |s| (r, s))).collect();

        let mut iterations = 0usize;
        let mut history = Vec::new();

        while !candidates.is_empty() && iterations < self.max_iterations {
            let mut chosen: Option<(usize, usize, f64, f64)> = None; // (r, s, q, log_q)

            for &(r, s) in &candidates {
                let den = if w_g[s] != 0.0 {
                    w_g[r] / w_g[s]
                } else {
                    1.0
                };
                let num = v[r] / v[s];
                let q = if den == 0.0 { 1.0 } else { num / den };
                let log_q = if q <= 0.0 { 0.0 } else { q.ln() };

                let better = match &chosen {
                    None => true,
                    Some((_, _, _, best_log)) => log_q.abs() > best_log.abs(),
                };
                if better {
                    chosen = Some((r, s, q, log_q));
                }
            }

            let Some((r_star, s_star, q_rs, log_q_rs)) = chosen else {
                break;
            };
            if log_q_rs.abs() <= 0.0 {
                break;
            }

            let (r, s) = if matrix[r_star][s_star] > 1.0 {
                (r_star, s_star)
            } else {
                (s_star, r_star)
            };

            let t_star = if q_rs <= 0.0 {
                1.0
            } else {
                q_rs.powf(-(n as f64) / 2.0)
            };

            let t_rs = if log_q_rs < 0.0 {
                (1.0 + self.rho).min(t_star)
            } else if log_q_rs > 0.0 {
                let bound = if (1.0 + self.rho) != 0.0 {
                    1.0 / (1.0 + self.rho)
                } else {
                    1.0
                };
                bound.max(t_star)
            } else {
                1.0
            };

            let old_value = matrix[r][s];
            let mut new_value = old_value * t_rs;
            new_value = new_value.clamp(SAATY_LOWER, SAATY_UPPER);

            matrix[r][s] = new_value;
            matrix[s][r] = 1.0 / new_value;

            candidates.retain(|&(i, j)| !(i == r_star && j == s_star));

            let v_new = priority_vector(&matrix);
            let gcompi_new = gcompi_family(family, alpha, &v_new);

            if self.strict_decrease && gcompi_new >= gcompi_current {
                matrix[r][s] = old_value;
                matrix[s][r] = 1.0 / old_value;
                continue;
            }

            iterations += 1;
            v = v_new;
            gcompi_current = gcompi_new;

            debug!(iteration = iterations, pair = ?(r, s), t_rs, gcompi = gcompi_current, "aem-com accepted step");

            history.push(AemComIterationRecord {
                iteration: iterations,
                pair_indices: (r, s),
                pair_items: (items[r].clone(), items[s].clone()),
                t_rs,
                old_value,
                new_value,
                gcompi_value: gcompi_current,
            });
        }

        Ok(AemComRunResult {
            items: items.to_vec(),
            initial_matrix,
            final_matrix: matrix,
            initial_priorities: v0,
            final_priorities: v,
            group_priorities: w_g,
            gcompi_initial,
            gcompi_final: gcompi_current,
            gcompi_min,
            iterations,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ApplyToLevel, InitialMode};

    fn settings(rho: f64, max_iterations: usize, strict_decrease: bool) -> AemComSettings {
        AemComSettings {
            permissibility: rho,
            apply_to: vec![ApplyToLevel::Criteria],
            max_iterations,
            initial_mode: InitialMode::Aij,
            strict_decrease,
        }
    }

    #[test]
    fn degenerate_2x2_returns_unchanged_in_zero_iterations() {
        let items = vec!["a".to_string(), "b".to_string()];
        let matrix = vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]];
        let family = vec![matrix.clone()];
        let engine = AemComEngine::new(&settings(0.2, 50, false));

        let result = engine
            .run(&items, &family, &[1.0], matrix.clone())
            .unwrap();

        assert_eq!(result.iterations, 0);
        assert!(result.history.is_empty());
        assert_eq!(result.final_matrix, matrix);
        assert!((result.gcompi_initial - result.gcompi_final).abs() < 1e-12);
    }

    #[test]
    fn identical_experts_terminate_with_zero_accepted_iterations() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let matrix = vec![
            vec![1.0, 2.0, 4.0],
            vec![0.5, 1.0, 3.0],
            vec![0.25, 1.0 / 3.0, 1.0],
        ];
        let family = vec![matrix.clone(), matrix.clone()];
        let alpha = vec![0.5, 0.5];
        let engine = AemComEngine::new(&settings(0.2, 50, false));

        let initial = aij::aggregate(&family, &alpha).unwrap();
        let result = engine.run(&items, &family, &alpha, initial).unwrap();

        assert_eq!(result.iterations, 0);
        assert!((result.gcompi_initial - result.gcompi_min).abs() < 1e-9);
    }

    #[test]
    fn reciprocity_and_range_preserved_after_steps() {
        let items: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let m1 = vec![
            vec![1.0, 5.0, 3.0, 7.0],
            vec![0.2, 1.0, 0.5, 3.0],
            vec![1.0 / 3.0, 2.0, 1.0, 4.0],
            vec![1.0 / 7.0, 1.0 / 3.0, 0.25, 1.0],
        ];
        let m2 = vec![
            vec![1.0, 2.0, 4.0, 6.0],
            vec![0.5, 1.0, 2.0, 4.0],
            vec![0.25, 0.5, 1.0, 2.0],
            vec![1.0 / 6.0, 0.25, 0.5, 1.0],
        ];
        let family = vec![m1.clone(), m2.clone()];
        let alpha = vec![0.4, 0.6];
        let engine = AemComEngine::new(&settings(0.3, 20, false));
        let initial = aij::aggregate(&family, &alpha).unwrap();

        let result = engine.run(&items, &family, &alpha, initial).unwrap();

        let n = items.len();
        for i in 0..n {
            assert!((result.final_matrix[i][i] - 1.0).abs() < 1e-9);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let entry = result.final_matrix[i][j];
                assert!(entry >= SAATY_LOWER - 1e-9 && entry <= SAATY_UPPER + 1e-9);
                assert!((result.final_matrix[i][j] * result.final_matrix[j][i] - 1.0).abs() < 1e-9);
            }
        }

        assert!(result.iterations <= n * (n - 1) / 2);
        assert_eq!(result.iterations, result.history.len());
        assert!(result.gcompi_min <= result.gcompi_final + 1e-9);
    }

    #[test]
    fn strict_decrease_monotone_non_increasing() {
        let items: Vec<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let base = vec![
            vec![1.0, 4.0, 6.0, 8.0, 9.0],
            vec![0.25, 1.0, 3.0, 5.0, 7.0],
            vec![1.0 / 6.0, 1.0 / 3.0, 1.0, 2.0, 4.0],
            vec![0.125, 0.2, 0.5, 1.0, 2.0],
            vec![1.0 / 9.0, 1.0 / 7.0, 0.25, 0.5, 1.0],
        ];
        let other = vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![0.5, 1.0, 2.0, 3.0, 4.0],
            vec![1.0 / 3.0, 0.5, 1.0, 2.0, 3.0],
            vec![0.25, 1.0 / 3.0, 0.5, 1.0, 2.0],
            vec![0.2, 0.25, 1.0 / 3.0, 0.5, 1.0],
        ];
        let family = vec![base.clone(), other.clone()];
        let alpha = vec![0.7, 0.3];
        let engine = AemComEngine::new(&settings(0.4, 30, true));
        let initial = aij::aggregate(&family, &alpha).unwrap();

        let result = engine.run(&items, &family, &alpha, initial).unwrap();

        let mut prev = result.gcompi_initial;
        for record in &result.history {
            assert!(record.gcompi_value <= prev + 1e-9);
            prev = record.gcompi_value;
        }
        assert!(result.gcompi_final <= result.gcompi_initial + 1e-9);
    }
}
