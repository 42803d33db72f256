// ============================================================
// Layer 3 — Advice Text
// ============================================================
// Static guidance attached to every prediction, keyed only by
// the predicted risk level. The text never depends on the
// probabilities or on the record itself.

use crate::domain::risk::RiskLevel;

/// Suggested next steps and a consultation recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub suggested_steps: &'static [&'static str],
    pub doctor_consult:  &'static str,
}

const HIGH: Advice = Advice {
    suggested_steps: &[
        "Consult a specialist immediately",
        "Monitor vital signs hourly",
        "Avoid strenuous physical activity",
    ],
    doctor_consult: "Urgent: Visit an Emergency Room or General Physician today.",
};

const MEDIUM: Advice = Advice {
    suggested_steps: &[
        "Schedule a check-up this week",
        "Improve sleep hygiene",
        "Reduce sodium intake",
    ],
    doctor_consult: "Recommended: Consult a General Practitioner within 2-3 days.",
};

const LOW: Advice = Advice {
    suggested_steps: &[
        "Maintain a healthy diet",
        "Continue regular exercise",
        "Annual health screening recommended",
    ],
    doctor_consult: "Routine: Standard annual check-up is sufficient.",
};

/// Look up the advice for a risk level
pub fn advice_for(level: RiskLevel) -> Advice {
    match level {
        RiskLevel::High   => HIGH,
        RiskLevel::Medium => MEDIUM,
        RiskLevel::Low    => LOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_three_steps() {
        for level in RiskLevel::ALL {
            assert_eq!(advice_for(level).suggested_steps.len(), 3);
        }
    }

    #[test]
    fn test_high_risk_is_urgent() {
        let advice = advice_for(RiskLevel::High);
        assert!(advice.doctor_consult.starts_with("Urgent"));
        assert_eq!(advice.suggested_steps[0], "Consult a specialist immediately");
    }

    #[test]
    fn test_low_risk_is_routine() {
        assert!(advice_for(RiskLevel::Low).doctor_consult.starts_with("Routine"));
    }
}
