pub mod aem_com;
pub mod ahp_result;
pub mod alternative;
pub mod criterion;
pub mod expert;
pub mod group_model;
pub mod matrices;
pub mod matrix;
pub mod model;
pub mod problem;
pub mod settings;

pub use aem_com::{
    AemComGlobalResult, AemComIterationRecord, AemComRunResult, AlternativeLevelAemComResult,
    CriteriaLevelAemComResult,
};
pub use ahp_result::AhpResult;
pub use alternative::Alternative;
pub use criterion::Criterion;
pub use expert::Expert;
pub use group_model::GroupAhpModel;
pub use matrices::PairwiseMatrices;
pub use matrix::PairwiseMatrix;
pub use model::Model;
pub use problem::Problem;
pub use settings::{AemComSettings, ApplyToLevel, InitialMode, Settings};
