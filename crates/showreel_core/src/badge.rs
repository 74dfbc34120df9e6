//! Badges: candidate facts about the subject vehicle.

use serde::{Deserialize, Serialize};

/// Badge category, with a fixed priority used when ordering resolved badges.
///
/// Lower priority number sorts first; `Other` covers categories the pipeline
/// does not recognize and always sorts last.
///
/// # Examples
///
/// ```
/// use showreel_core::BadgeCategory;
///
/// assert!(BadgeCategory::Safety.priority() < BadgeCategory::Award.priority());
/// assert_eq!(BadgeCategory::Other.priority(), u8::MAX);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    /// Crash-test and driver-assistance credentials
    Safety,
    /// Emissions and efficiency credentials
    Eco,
    /// Power and dynamics credentials
    Performance,
    /// Infotainment and driver-tech credentials
    Technology,
    /// Durability and ownership-cost credentials
    Reliability,
    /// Industry awards
    Award,
    /// Regulatory classifications
    Regulatory,
    /// Unrecognized category
    Other,
}

impl BadgeCategory {
    /// Fixed ordering priority; lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            Self::Safety => 0,
            Self::Eco => 1,
            Self::Performance => 2,
            Self::Technology => 3,
            Self::Reliability => 4,
            Self::Award => 5,
            Self::Regulatory => 6,
            Self::Other => u8::MAX,
        }
    }

    /// Map a collector-provided label onto a category, defaulting to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "safety" => Self::Safety,
            "eco" => Self::Eco,
            "performance" => Self::Performance,
            "technology" => Self::Technology,
            "reliability" => Self::Reliability,
            "award" => Self::Award,
            "regulatory" => Self::Regulatory,
            _ => Self::Other,
        }
    }
}

/// A candidate fact emitted by a badge collector.
///
/// Badges compete only within the same `group` (the conflict namespace);
/// within a group the highest `rank` survives resolution.
///
/// # Examples
///
/// ```
/// use showreel_core::{Badge, BadgeCategory};
///
/// let badge = Badge::new("ncap-5", BadgeCategory::Safety, "safety-rating", 50)
///     .with_evidence("Euro NCAP 5 stars (2024)");
/// assert_eq!(badge.group, "safety-rating");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge identifier
    pub id: String,
    /// Category used for final ordering
    pub category: BadgeCategory,
    /// Conflict namespace; at most one badge per group survives resolution
    pub group: String,
    /// Ordinal strength within the group
    pub rank: u32,
    /// Supporting evidence text, when the collector has any
    pub evidence: Option<String>,
}

impl Badge {
    /// Create a badge without evidence.
    pub fn new(
        id: impl Into<String>,
        category: BadgeCategory,
        group: impl Into<String>,
        rank: u32,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            group: group.into(),
            rank,
            evidence: None,
        }
    }

    /// Attach evidence text.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}
