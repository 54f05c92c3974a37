//! Component A — priority vectors, lambda_max, consistency ratio.
//!
//! The canonical priority extractor is the row-geometric-mean
//! (`priority_vector`). Eigenvector power iteration is kept as a secondary
//! utility for generator-style callers and is never used by the solver or
//! the AEM-COM engine.

/// Saaty's random index, indexed by matrix order `n`. Unknown orders report
/// 0.0, which downstream folds into "consistency reported as zero-valid".
const RANDOM_INDEX: [f64; 11] = [
    0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49,
];

pub fn random_index(n: usize) -> f64 {
    RANDOM_INDEX.get(n).copied().unwrap_or(0.0)
}

/// Row-geometric-mean priority vector of a reciprocal matrix.
///
/// Empty or all-zero row products yield the uniform vector `1/n`.
pub fn priority_vector(matrix: &[Vec<f64>]) -> Vec<f64> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let geom_means: Vec<f64> = matrix
        .iter()
        .map(|row| {
            let product: f64 = row.iter().product();
            product.powf(1.0 / n as f64)
        })
        .collect();

    let total: f64 = geom_means.iter().sum();
    if total <= 0.0 {
        return vec![1.0 / n as f64; n];
    }

    geom_means.into_iter().map(|g| g / total).collect()
}

/// lambda_max = mean over i of (A*w)_i / w_i, skipping w_i <= 0.
pub fn lambda_max(matrix: &[Vec<f64>], weights: &[f64]) -> f64 {
    let n = matrix.len();
    if n == 0 {
        return 0.0;
    }

    let aw: Vec<f64> = matrix
        .iter()
        .map(|row| row.iter().zip(weights).map(|(a, w)| a * w).sum::<f64>())
        .collect();

    let ratios: Vec<f64> = aw
        .iter()
        .zip(weights)
        .filter(|(_, &w)| w > 0.0)
        .map(|(s, w)| s / w)
        .collect();

    if ratios.is_empty() {
        return n as f64;
    }

    ratios.iter().sum::<f64>() / ratios.len() as f64
}

/// Consistency ratio CR = CI / RI(n), clamped to >= 0. CR = 0 for n <= 2.
pub fn consistency_ratio(matrix: &[Vec<f64>]) -> f64 {
    let n = matrix.len();
    if n <= 2 {
        return 0.0;
    }

    let weights = priority_vector(matrix);
    let lmax = lambda_max(matrix, &weights);
    let ci = (lmax - n as f64) / (n as f64 - 1.0);

    let ri = random_index(n);
    if ri <= 0.0 {
        return 0.0;
    }

    (ci / ri).max(0.0)
}

/// Converts a consistency ratio to a percentage in [0, 100].
pub fn consistency_to_percent(cr: f64) -> f64 {
    ((1.0 - cr) * 100.0).clamp(0.0, 100.0)
}

/// Secondary eigenvector estimator (power iteration), never used for the
/// canonical priority extraction. Exposed for generator/diagnostic callers.
pub fn eigenvector_power_iteration(matrix: &[Vec<f64>]) -> Vec<f64> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    const MAX_SWEEPS: usize = 200;
    const TOLERANCE: f64 = 1e-12;

    let mut v = vec![1.0 / n as f64; n];

    for _ in 0..MAX_SWEEPS {
        let next: Vec<f64> = matrix
            .iter()
            .map(|row| row.iter().zip(&v).map(|(a, x)| a * x).sum::<f64>())
            .collect();

        let norm: f64 = next.iter().sum();
        let next = if norm <= 0.0 {
            vec![1.0 / n as f64; n]
        } else {
            next.into_iter().map(|x| x / norm).collect::<Vec<f64>>()
        };

        let l1_delta: f64 = next.iter().zip(&v).map(|(a, b)| (a - b).abs()).sum();
        v = next;

        if l1_delta < TOLERANCE {
            break;
        }
    }

    v
}
