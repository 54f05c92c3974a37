use thiserror::Error;

/// Closed error taxonomy for the ingestion and solver pipeline.
///
/// `NumericDegenerate` deliberately has no variant here: per the spec it is
/// handled locally (skip the term, substitute the neutral element) and is
/// never surfaced as a fatal error.
#[derive(Debug, Error)]
pub enum AhpError {
    #[error("malformed input: {0}")]
    InputMalformed(String),

    #[error("structural invariant violated: {0}")]
    StructuralInvariantViolated(String),

    #[error("empty level: {0}")]
    EmptyLevel(String),

    #[error("initial_mode requires a provided collective matrix, but none was supplied for {0}")]
    ProvidedMatrixMissing(String),

    #[error("usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, AhpError>;
