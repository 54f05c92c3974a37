//! Component B — Geometric Compatibility Index.
//!
//! Log base is fixed to base 2 and shared between the single-matrix and
//! family formulas (spec Open Questions: pick one base, keep it everywhere).

#[inline]
fn log2_sq(x: f64) -> f64 {
    let l = x.log2();
    l * l
}

/// GCOMPI of a single reciprocal matrix against a reference vector `u`.
/// 0 for n <= 2. Terms where `A[i][j] * u[j]/u[i]` is <= 0 are skipped.
pub fn gcompi(matrix: &[Vec<f64>], u: &[f64]) -> f64 {
    let n = matrix.len();
    if n <= 2 {
        return 0.0;
    }

    let denom = ((n - 1) * (n - 2)) as f64;
    if denom <= 0.0 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..n {
        let ui = u[i];
        if ui <= 0.0 {
            continue;
        }
        for j in 0..n {
            let value = matrix[i][j] * (u[j] / ui);
            if value <= 0.0 {
                continue;
            }
            total += log2_sq(value);
        }
    }

    total / denom
}

/// Normalizes non-negative weights to sum 1; falls back to uniform when the
/// total is 0.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 {
        let k = weights.len().max(1);
        return vec![1.0 / k as f64; weights.len()];
    }
    weights.iter().map(|w| w.max(0.0) / total).collect()
}

/// Weighted-family GCOMPI: sum_k alpha_hat_k * GCOMPI(A_k, u), same n <= 2
/// guard and the same denominator used exactly once across the family.
pub fn gcompi_family(matrices: &[Vec<Vec<f64>>], weights: &[f64], u: &[f64]) -> f64 {
    if matrices.is_empty() {
        return 0.0;
    }

    let n = matrices[0].len();
    if n <= 2 {
        return 0.0;
    }

    let denom = ((n - 1) * (n - 2)) as f64;
    if denom <= 0.0 {
        return 0.0;
    }

    let alpha_hat = normalize_weights(weights);

    let mut total = 0.0;
    for (matrix, &alpha_k) in matrices.iter().zip(&alpha_hat) {
        if alpha_k <= 0.0 {
            continue;
        }

        let mut inner = 0.0;
        for i in 0..n {
            let ui = u[i];
            if ui <= 0.0 {
                continue;
            }
            for j in 0..n {
                let value = matrix[i][j] * (u[j] / ui);
                if value <= 0.0 {
                    continue;
                }
                inner += log2_sq(value);
            }
        }

        total += alpha_k * inner;
    }

    total / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::priority_vector;

    #[test]
    fn gcompi_zero_below_order_three() {
        let matrix = vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]];
        assert_eq!(gcompi(&matrix, &[0.75, 0.25]), 0.0);
    }

    #[test]
    fn gcompi_zero_for_matrix_matching_its_own_priority() {
        let w = vec![0.5, 0.3, 0.2];
        let matrix: Vec<Vec<f64>> = w
            .iter()
            .map(|wi| w.iter().map(|wj| wi / wj).collect())
            .collect();
        let v = priority_vector(&matrix);
        assert!(gcompi(&matrix, &v) < 1e-9);
    }

    #[test]
    fn family_with_one_matrix_matches_single() {
        let matrix = vec![
            vec![1.0, 2.0, 4.0],
            vec![0.5, 1.0, 2.0],
            vec![0.25, 0.5, 1.0],
        ];
        let u = vec![0.6, 0.3, 0.1];
        let single = gcompi(&matrix, &u);
        let family = gcompi_family(std::slice::from_ref(&matrix), &[1.0], &u);
        assert!((single - family).abs() < 1e-12);
    }

    #[test]
    fn normalize_weights_falls_back_to_uniform() {
        let w = normalize_weights(&[0.0, 0.0, 0.0]);
        assert_eq!(w, vec![1.0 / 3.0; 3]);
    }
}
