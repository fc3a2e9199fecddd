//! Risk Label - the two possible outcomes shown to the user

use serde::{Deserialize, Serialize};

use crate::constants::HIGH_RISK_LABEL;

/// Outcome of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    High,
    Low,
}

impl RiskLabel {
    /// Map a raw classifier label: `1` is high risk, everything else is low
    pub fn from_raw(raw: i64) -> Self {
        if raw == HIGH_RISK_LABEL {
            RiskLabel::High
        } else {
            RiskLabel::Low
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskLabel::High)
    }

    pub fn headline(&self) -> &'static str {
        match self {
            RiskLabel::High => "High Risk Detected",
            RiskLabel::Low => "Low Risk",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskLabel::High => {
                "Based on the provided clinical parameters, the model indicates a higher likelihood of heart disease."
            }
            RiskLabel::Low => {
                "Based on the provided clinical parameters, the model indicates a low likelihood of heart disease."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::High => "high",
            RiskLabel::Low => "low",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_is_high_risk() {
        assert_eq!(RiskLabel::from_raw(1), RiskLabel::High);
        assert!(RiskLabel::from_raw(1).is_high());
    }

    #[test]
    fn test_everything_else_is_low_risk() {
        for raw in [0, -1, 2, 7, i64::MAX, i64::MIN] {
            assert_eq!(RiskLabel::from_raw(raw), RiskLabel::Low, "raw {}", raw);
        }
    }

    #[test]
    fn test_messages_are_distinct() {
        assert_ne!(RiskLabel::High.message(), RiskLabel::Low.message());
        assert!(RiskLabel::High.message().contains("higher likelihood"));
        assert!(RiskLabel::Low.message().contains("low likelihood"));
    }
}
