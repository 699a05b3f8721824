//! Questionnaire answer enums and the committed answers record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Preferred frame style (wizard step 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStyle {
    Classic,
    Modern,
    Retro,
    Sporty,
    Bold,
}

/// Activity the glasses will be used for (wizard step 3, multi-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageActivity {
    Work,
    Reading,
    Computer,
    Driving,
    Sports,
    Social,
}

/// Kind of glasses wanted (wizard step 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassesType {
    Prescription,
    Sun,
    Transitions,
    Reading,
}

/// Self-reported skin tone (wizard step 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    Light,
    Medium,
    Olive,
    Dark,
}

/// Budget bracket in BRL (wizard step 6). Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    UpTo300,
    From300To600,
    From600To1000,
    From1000To2000,
    Above2000,
}

impl BudgetRange {
    /// Display label as shown in the wizard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo300 => "Up to R$ 300",
            Self::From300To600 => "R$ 300 - R$ 600",
            Self::From600To1000 => "R$ 600 - R$ 1,000",
            Self::From1000To2000 => "R$ 1,000 - R$ 2,000",
            Self::Above2000 => "Above R$ 2,000",
        }
    }
}

/// One completed questionnaire pass.
///
/// Built incrementally by the wizard and persisted atomically on final-step
/// commit. A later completed pass overwrites this wholesale. All fields are
/// required; `usage_activities` must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    /// Free-text "City, State" the user typed.
    pub location: String,
    pub frame_style: FrameStyle,
    pub usage_activities: BTreeSet<UsageActivity>,
    pub glasses_type: GlassesType,
    pub skin_tone: SkinTone,
    pub budget_range: BudgetRange,
}

impl QuestionnaireAnswers {
    /// Whether the record satisfies the completeness invariant.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.location.trim().is_empty() && !self.usage_activities.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            location: "Recife, PE".to_owned(),
            frame_style: FrameStyle::Modern,
            usage_activities: BTreeSet::from([UsageActivity::Reading]),
            glasses_type: GlassesType::Prescription,
            skin_tone: SkinTone::Medium,
            budget_range: BudgetRange::From300To600,
        }
    }

    #[test]
    fn test_complete_answers() {
        assert!(answers().is_complete());
    }

    #[test]
    fn test_blank_location_is_incomplete() {
        let mut a = answers();
        a.location = "   ".to_owned();
        assert!(!a.is_complete());
    }

    #[test]
    fn test_empty_activities_is_incomplete() {
        let mut a = answers();
        a.usage_activities.clear();
        assert!(!a.is_complete());
    }

    #[test]
    fn test_serde_roundtrip() {
        let a = answers();
        let json = serde_json::to_string(&a).unwrap();
        let back: QuestionnaireAnswers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_budget_ordering() {
        assert!(BudgetRange::UpTo300 < BudgetRange::Above2000);
        assert_eq!(BudgetRange::From300To600.label(), "R$ 300 - R$ 600");
    }
}
