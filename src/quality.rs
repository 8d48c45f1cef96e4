use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Quality tier, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// No selection made
    #[default]
    None,
    Best,
    High,
    Medium,
    Low,
}

impl Quality {
    /// The four selectable tiers, in slot order
    pub const TIERS: [Quality; 4] = [Quality::Best, Quality::High, Quality::Medium, Quality::Low];

    /// Position of this tier in a four-slot table
    pub fn slot(&self) -> Option<usize> {
        match self {
            Quality::None => None,
            Quality::Best => Some(0),
            Quality::High => Some(1),
            Quality::Medium => Some(2),
            Quality::Low => Some(3),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::None => "none",
            Quality::Best => "best",
            Quality::High => "high",
            Quality::Medium => "medium",
            Quality::Low => "low",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Quality::None),
            "best" => Ok(Quality::Best),
            "high" => Ok(Quality::High),
            "medium" => Ok(Quality::Medium),
            "low" => Ok(Quality::Low),
            other => Err(format!("unknown quality tier: {}", other)),
        }
    }
}
