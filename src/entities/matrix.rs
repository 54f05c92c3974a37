use serde::Serialize;

use crate::error::AhpError;

/// A validated square reciprocal pairwise-comparison matrix on the Saaty
/// 1/9..9 scale, tagged with an optional expert/criterion id.
///
/// Only constructible through `new`, which enforces the square/reciprocal
/// invariants — there is no `Deserialize` impl on purpose; untrusted input
/// goes through `ingest::raw` first.
#[derive(Debug, Clone, Serialize)]
pub struct PairwiseMatrix {
    pub items: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub expert_id: Option<String>,
    pub criterion_id: Option<String>,
}

impl PairwiseMatrix {
    pub fn new(
        items: Vec<String>,
        matrix: Vec<Vec<f64>>,
        expert_id: Option<String>,
        criterion_id: Option<String>,
    ) -> Result<Self, AhpError> {
        let n = items.len();
        if matrix.len() != n {
            return Err(AhpError::StructuralInvariantViolated(format!(
                "matrix must have {} rows, got {}",
                n,
                matrix.len()
            )));
        }
        for row in &matrix {
            if row.len() != n {
                return Err(AhpError::StructuralInvariantViolated(
                    "matrix must be square and match the length of the items list".into(),
                ));
            }
        }

        for i in 0..n {
            if (matrix[i][i] - 1.0).abs() > 1e-9 {
                return Err(AhpError::StructuralInvariantViolated(format!(
                    "diagonal entry [{i}][{i}] must be 1, got {}",
                    matrix[i][i]
                )));
            }
        }

        for i in 0..n {
            for j in 0..n {
                if matrix[i][j] <= 0.0 {
                    return Err(AhpError::StructuralInvariantViolated(format!(
                        "entry [{i}][{j}] must be positive, got {}",
                        matrix[i][j]
                    )));
                }
                let reciprocal = 1.0 / matrix[i][j];
                if (matrix[j][i] - reciprocal).abs() > 1e-6 {
                    return Err(AhpError::StructuralInvariantViolated(format!(
                        "entries [{i}][{j}]={} and [{j}][{i}]={} are not reciprocal",
                        matrix[i][j], matrix[j][i]
                    )));
                }
            }
        }

        Ok(Self {
            items,
            matrix,
            expert_id,
            criterion_id,
        })
    }

    pub fn n(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_reciprocal_matrix() {
        let res = PairwiseMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 3.0], vec![0.5, 1.0]],
            None,
            None,
        );
        assert!(res.is_err());
    }

    #[test]
    fn rejects_non_square_matrix() {
        let res = PairwiseMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 3.0, 1.0], vec![1.0 / 3.0, 1.0, 1.0]],
            None,
            None,
        );
        assert!(res.is_err());
    }

    #[test]
    fn accepts_valid_matrix() {
        let res = PairwiseMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]],
            Some("e1".into()),
            None,
        );
        assert!(res.is_ok());
    }
}
