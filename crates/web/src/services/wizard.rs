//! The six-step questionnaire wizard.
//!
//! A fixed linear state machine: `Next` from step *n* requires step *n*'s
//! completeness predicate, `Back` is always allowed and loses nothing.
//! Answers accumulate in a transient draft and are committed atomically as
//! one [`QuestionnaireAnswers`] record only when `Next` fires on the final
//! step with every field populated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use framefit_core::{
    BudgetRange, FrameStyle, GlassesType, QuestionnaireAnswers, SkinTone, UsageActivity,
};

/// Number of wizard steps.
pub const TOTAL_STEPS: u8 = 6;

/// Answers accumulated so far. Unset fields keep their step incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub location: Option<String>,
    pub frame_style: Option<FrameStyle>,
    pub usage_activities: BTreeSet<UsageActivity>,
    pub glasses_type: Option<GlassesType>,
    pub skin_tone: Option<SkinTone>,
    pub budget_range: Option<BudgetRange>,
}

/// A partial update to the draft; only provided fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerPatch {
    pub location: Option<String>,
    pub frame_style: Option<FrameStyle>,
    pub glasses_type: Option<GlassesType>,
    pub skin_tone: Option<SkinTone>,
    pub budget_range: Option<BudgetRange>,
}

/// Outcome of a `Next` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The current step is incomplete; nothing changed and no error is
    /// raised - forward progress is simply unavailable.
    Stayed,
    /// Moved to the given step.
    Moved(u8),
    /// Final-step commit: the completed record, ready to persist.
    Committed(QuestionnaireAnswers),
}

/// Outcome of a `Back` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved to the given step, draft intact.
    Moved(u8),
    /// `Back` from step 1: the wizard exits; nothing committed is lost.
    Exited,
}

/// The wizard state carried between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    step: u8,
    draft: Draft,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            step: 1,
            draft: Draft::default(),
        }
    }
}

impl Wizard {
    /// Start a fresh pass at step 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step, 1-based.
    #[must_use]
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// The accumulated draft.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the current step's completeness predicate holds.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        match self.step {
            1 => self
                .draft
                .location
                .as_deref()
                .is_some_and(|l| !l.trim().is_empty()),
            2 => self.draft.frame_style.is_some(),
            3 => !self.draft.usage_activities.is_empty(),
            4 => self.draft.glasses_type.is_some(),
            5 => self.draft.skin_tone.is_some(),
            6 => self.draft.budget_range.is_some(),
            _ => false,
        }
    }

    /// Apply a partial answer update to the draft.
    pub fn apply(&mut self, patch: AnswerPatch) {
        if let Some(location) = patch.location {
            self.draft.location = Some(location);
        }
        if let Some(style) = patch.frame_style {
            self.draft.frame_style = Some(style);
        }
        if let Some(glasses) = patch.glasses_type {
            self.draft.glasses_type = Some(glasses);
        }
        if let Some(tone) = patch.skin_tone {
            self.draft.skin_tone = Some(tone);
        }
        if let Some(budget) = patch.budget_range {
            self.draft.budget_range = Some(budget);
        }
    }

    /// Toggle a multi-select activity. Idempotent per tag: toggling twice
    /// restores the original set.
    pub fn toggle_activity(&mut self, activity: UsageActivity) {
        if !self.draft.usage_activities.remove(&activity) {
            self.draft.usage_activities.insert(activity);
        }
    }

    /// Attempt the `Next` transition.
    pub fn next(&mut self) -> Advance {
        if !self.can_proceed() {
            return Advance::Stayed;
        }

        if self.step < TOTAL_STEPS {
            self.step += 1;
            return Advance::Moved(self.step);
        }

        match self.commit() {
            Some(answers) => Advance::Committed(answers),
            None => Advance::Stayed,
        }
    }

    /// Attempt the `Back` transition. Never loses draft data.
    pub fn back(&mut self) -> Retreat {
        if self.step > 1 {
            self.step -= 1;
            Retreat::Moved(self.step)
        } else {
            Retreat::Exited
        }
    }

    /// Build the committed record if every field is populated.
    fn commit(&self) -> Option<QuestionnaireAnswers> {
        let answers = QuestionnaireAnswers {
            location: self.draft.location.clone()?,
            frame_style: self.draft.frame_style?,
            usage_activities: self.draft.usage_activities.clone(),
            glasses_type: self.draft.glasses_type?,
            skin_tone: self.draft.skin_tone?,
            budget_range: self.draft.budget_range?,
        };

        answers.is_complete().then_some(answers)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_wizard() -> Wizard {
        let mut w = Wizard::new();
        w.apply(AnswerPatch {
            location: Some("Recife, PE".to_owned()),
            frame_style: Some(FrameStyle::Modern),
            glasses_type: Some(GlassesType::Prescription),
            skin_tone: Some(SkinTone::Medium),
            budget_range: Some(BudgetRange::From300To600),
        });
        w.toggle_activity(UsageActivity::Reading);
        w
    }

    #[test]
    fn test_next_is_gated_per_step() {
        let mut w = Wizard::new();
        assert_eq!(w.next(), Advance::Stayed);
        assert_eq!(w.step(), 1);

        // Filling the blocking field immediately enables Next.
        w.apply(AnswerPatch {
            location: Some("Recife, PE".to_owned()),
            ..AnswerPatch::default()
        });
        assert!(w.can_proceed());
        assert_eq!(w.next(), Advance::Moved(2));
    }

    #[test]
    fn test_blank_location_does_not_satisfy_step_one() {
        let mut w = Wizard::new();
        w.apply(AnswerPatch {
            location: Some("   ".to_owned()),
            ..AnswerPatch::default()
        });
        assert!(!w.can_proceed());
    }

    #[test]
    fn test_every_step_gates_on_its_field() {
        let mut w = filled_wizard();
        for expected in 2..=TOTAL_STEPS {
            assert_eq!(w.next(), Advance::Moved(expected));
        }
        assert!(matches!(w.next(), Advance::Committed(_)));
    }

    #[test]
    fn test_back_and_forward_round_trip_keeps_answers() {
        let mut w = filled_wizard();
        w.next();
        w.next();
        assert_eq!(w.step(), 3);
        let draft_before = w.draft().clone();

        assert_eq!(w.back(), Retreat::Moved(2));
        assert_eq!(w.back(), Retreat::Moved(1));
        w.next();
        w.next();
        assert_eq!(w.step(), 3);
        assert_eq!(w.draft(), &draft_before);
    }

    #[test]
    fn test_back_from_step_one_exits() {
        let mut w = Wizard::new();
        assert_eq!(w.back(), Retreat::Exited);
        assert_eq!(w.step(), 1);
    }

    #[test]
    fn test_activity_toggle_is_idempotent() {
        let mut w = Wizard::new();
        w.toggle_activity(UsageActivity::Reading);
        let selected = w.draft().usage_activities.clone();

        w.toggle_activity(UsageActivity::Driving);
        w.toggle_activity(UsageActivity::Driving);
        assert_eq!(w.draft().usage_activities, selected);
    }

    #[test]
    fn test_commit_produces_the_full_record() {
        let mut w = filled_wizard();
        for _ in 2..=TOTAL_STEPS {
            w.next();
        }
        let Advance::Committed(answers) = w.next() else {
            panic!("expected commit");
        };
        assert_eq!(answers.location, "Recife, PE");
        assert!(answers.usage_activities.contains(&UsageActivity::Reading));
        assert!(answers.is_complete());
    }

    #[test]
    fn test_incomplete_final_step_stays_silently() {
        let mut w = filled_wizard();
        for _ in 2..=TOTAL_STEPS {
            w.next();
        }
        // Un-answering the final step blocks commit without error.
        w.draft.budget_range = None;
        assert_eq!(w.next(), Advance::Stayed);
        assert_eq!(w.step(), TOTAL_STEPS);
    }
}
