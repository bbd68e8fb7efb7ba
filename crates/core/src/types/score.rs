//! EcoScore sustainability rating tiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A coarse sustainability rating tier assigned to a product.
///
/// Drawn from a small fixed set, ordered best to worst: variants declare in
/// that order so the derived `Ord` sorts `A+` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EcoScore {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
}

impl EcoScore {
    /// All tiers, best to worst.
    pub const ALL: [Self; 4] = [Self::APlus, Self::A, Self::BPlus, Self::B];

    /// The display/wire string for this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
        }
    }
}

impl std::fmt::Display for EcoScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an [`EcoScore`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown eco score tier: {0}")]
pub struct EcoScoreParseError(pub String);

impl FromStr for EcoScore {
    type Err = EcoScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            other => Err(EcoScoreParseError(other.to_string())),
        }
    }
}
