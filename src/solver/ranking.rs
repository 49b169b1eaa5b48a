//! Ranking modes for choosing the next guess

use std::fmt;

/// Which score ranks candidates in `best_guess`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingMode {
    /// Sum of per-position letter counts
    Inplace,
    /// Sum of across-position letter counts, each distinct letter once
    #[default]
    Across,
    /// `inplace + across`, equal weight
    Combined,
}

impl RankingMode {
    /// All modes, in display order
    pub const ALL: [Self; 3] = [Self::Inplace, Self::Across, Self::Combined];

    /// Lowercase name as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inplace => "inplace",
            Self::Across => "across",
            Self::Combined => "combined",
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RankingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inplace" | "in-place" | "positional" => Ok(Self::Inplace),
            "across" => Ok(Self::Across),
            "combined" | "both" => Ok(Self::Combined),
            other => Err(format!(
                "unknown ranking mode '{other}' (expected inplace, across or combined)"
            )),
        }
    }
}
