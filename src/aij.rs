//! Component C — Aggregation of Individual Judgments.

use crate::error::AhpError;
use crate::gcompi::normalize_weights;

/// Weighted geometric aggregation of a family of reciprocal matrices:
/// `AIJ[i][j] = prod_k A_k[i][j] ^ alpha_hat_k`. Entries <= 0 are skipped
/// (treated as alpha_hat = 0 for that entry).
pub fn aggregate(matrices: &[Vec<Vec<f64>>], weights: &[f64]) -> Result<Vec<Vec<f64>>, AhpError> {
    if matrices.is_empty() {
        return Err(AhpError::EmptyLevel(
            "cannot compute AIJ over an empty family of matrices".into(),
        ));
    }

    let n = matrices[0].len();
    if matrices.iter().any(|m| m.len() != n) {
        return Err(AhpError::StructuralInvariantViolated(
            "all matrices in an AIJ family must share the same order".into(),
        ));
    }

    let alpha_hat = normalize_weights(weights);

    let mut aij = vec![vec![1.0_f64; n]; n];
    for (matrix, &alpha_k) in matrices.iter().zip(&alpha_hat) {
        if alpha_k <= 0.0 {
            continue;
        }
        for i in 0..n {
            for j in 0..n {
                let value = matrix[i][j];
                if value <= 0.0 {
                    continue;
                }
                aij[i][j] *= value.powf(alpha_k);
            }
        }
    }

    Ok(aij)
}
