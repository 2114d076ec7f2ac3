/// Score level representing different constraint priorities.
///
/// Classifies which level of a [`HardSoftScore`](super::HardSoftScore) a
/// constraint contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreLevel {
    /// Hard constraints - staffing and workload rules, weighted by the penalty factor.
    Hard,
    /// Soft constraints - shift preferences, counted at unit weight.
    Soft,
}

impl ScoreLevel {
    /// Returns the lowercase label used in score strings ("hard" / "soft").
    pub const fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Hard => "hard",
            ScoreLevel::Soft => "soft",
        }
    }
}
