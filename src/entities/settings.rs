use serde::{Deserialize, Serialize};

/// Which hierarchy levels AEM-COM should run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyToLevel {
    Criteria,
    AlternativesByCriterion,
}

/// Initial collective-matrix strategy for an AEM-COM run.
///
/// The source vocabulary is inconsistent ("aij" vs "pccm"); both are
/// accepted as synonyms for the AIJ-aggregate initialization, per the
/// spec's Open Questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialMode {
    Aij,
    Provided,
    FirstExpert,
    Identity,
}

impl InitialMode {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "aij" | "pccm" => InitialMode::Aij,
            "provided" | "provided_collective_matrix" | "collective" => InitialMode::Provided,
            "first_expert" => InitialMode::FirstExpert,
            "identity" => InitialMode::Identity,
            _ => InitialMode::Aij,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InitialMode::Aij => "aij",
            InitialMode::Provided => "provided",
            InitialMode::FirstExpert => "first_expert",
            InitialMode::Identity => "identity",
        }
    }
}

impl Serialize for InitialMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InitialMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(InitialMode::parse(&raw))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AemComSettings {
    pub permissibility: f64,
    pub apply_to: Vec<ApplyToLevel>,
    pub max_iterations: usize,
    pub initial_mode: InitialMode,
    pub strict_decrease: bool,
}

impl AemComSettings {
    pub fn applies_to(&self, level: ApplyToLevel) -> bool {
        self.apply_to.contains(&level)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Informational only; the engine always uses the Saaty 1/9..9 range.
    pub ahp_scale: String,
    pub aem_com: AemComSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_synonyms() {
        assert_eq!(InitialMode::parse("aij"), InitialMode::Aij);
        assert_eq!(InitialMode::parse("pccm"), InitialMode::Aij);
        assert_eq!(InitialMode::parse("PCCM"), InitialMode::Aij);
        assert_eq!(InitialMode::parse("provided"), InitialMode::Provided);
        assert_eq!(
            InitialMode::parse("provided_collective_matrix"),
            InitialMode::Provided
        );
    }
}
