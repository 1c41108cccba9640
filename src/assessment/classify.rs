use serde::{Deserialize, Serialize};

/// Risk band derived from the total score. Bands are contiguous and
/// non-overlapping; `Critical` is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    pub const fn classify(total_score: u32) -> RiskBand {
        match total_score {
            0..=7 => RiskBand::Low,
            8..=13 => RiskBand::Medium,
            14..=19 => RiskBand::High,
            _ => RiskBand::Critical,
        }
    }

    pub const fn commitment(self) -> ResponseCommitment {
        match self {
            RiskBand::Low => ResponseCommitment::Standard,
            RiskBand::Medium => ResponseCommitment::ThreeWorkingDays,
            RiskBand::High => ResponseCommitment::TwentyFourHours,
            RiskBand::Critical => ResponseCommitment::SameDay,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Medium => "Medium",
            RiskBand::High => "High",
            RiskBand::Critical => "Critical",
        }
    }
}

/// Response-time commitment attached to each risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCommitment {
    Standard,
    ThreeWorkingDays,
    TwentyFourHours,
    SameDay,
}

impl ResponseCommitment {
    pub const fn label(self) -> &'static str {
        match self {
            ResponseCommitment::Standard => "standard processing",
            ResponseCommitment::ThreeWorkingDays => "3 working days",
            ResponseCommitment::TwentyFourHours => "24 hours",
            ResponseCommitment::SameDay => "same day",
        }
    }
}
