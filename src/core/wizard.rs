//! Step sequencer for the onboarding wizard

use serde::Serialize;

use super::onboarding::{FieldError, OnboardingApplication, OnboardingForm};

/// Wizard steps in order. `Review` is the terminal confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Basic,
    FeeSkill,
    Location,
    Review,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Basic,
        OnboardingStep::FeeSkill,
        OnboardingStep::Location,
        OnboardingStep::Review,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Basic => 0,
            OnboardingStep::FeeSkill => 1,
            OnboardingStep::Location => 2,
            OnboardingStep::Review => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStep::Basic => "Basic Info",
            OnboardingStep::FeeSkill => "Skills & Pricing",
            OnboardingStep::Location => "Location",
            OnboardingStep::Review => "Review",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Basic => "Tell Us About Yourself",
            OnboardingStep::FeeSkill => "Your Skills & Pricing",
            OnboardingStep::Location => "Final Details",
            OnboardingStep::Review => "Application Summary",
        }
    }

    /// Errors for the section this step owns. Review owns none.
    pub fn validate(&self, form: &OnboardingForm) -> Vec<FieldError> {
        match self {
            OnboardingStep::Basic => form.basic.errors(),
            OnboardingStep::FeeSkill => form.fee_skill.errors(),
            OnboardingStep::Location => form.location.errors(),
            OnboardingStep::Review => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

/// One entry of the progress indicator. `number` is 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEntry {
    pub number: usize,
    pub step: OnboardingStep,
    pub label: &'static str,
    pub state: StepState,
}

/// Result of `advance`
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Moved forward to this step
    Moved(OnboardingStep),
    /// At the last step and the form is valid; hand this to the submitter
    Submit(OnboardingApplication),
    /// At the last step and the form is invalid
    Blocked(Vec<FieldError>),
}

/// Current position in the wizard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSequencer {
    index: usize,
}

impl StepSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> OnboardingStep {
        OnboardingStep::ALL[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == OnboardingStep::COUNT - 1
    }

    /// Move forward one step, or at the last step validate the whole form.
    /// The index never moves on submission or on a blocked submission.
    pub fn advance(&mut self, form: &OnboardingForm) -> StepOutcome {
        if !self.is_last() {
            self.index += 1;
            return StepOutcome::Moved(self.current());
        }

        match form.validate() {
            Ok(application) => StepOutcome::Submit(application),
            Err(errors) => StepOutcome::Blocked(errors),
        }
    }

    /// Move back one step; no-op on the first step
    pub fn retreat(&mut self) -> OnboardingStep {
        if self.index > 0 {
            self.index -= 1;
        }
        self.current()
    }

    pub fn progress(&self) -> Vec<ProgressEntry> {
        OnboardingStep::ALL
            .iter()
            .map(|step| ProgressEntry {
                number: step.index() + 1,
                step: *step,
                label: step.label(),
                state: match step.index().cmp(&self.index) {
                    std::cmp::Ordering::Less => StepState::Done,
                    std::cmp::Ordering::Equal => StepState::Current,
                    std::cmp::Ordering::Greater => StepState::Upcoming,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::onboarding::tests::valid_form;

    #[test]
    fn test_indices_match_order() {
        for (idx, step) in OnboardingStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), idx);
        }
    }

    #[test]
    fn test_advance_to_terminal() {
        let form = OnboardingForm::default();
        let mut seq = StepSequencer::new();
        assert_eq!(seq.current(), OnboardingStep::Basic);

        for _ in 0..OnboardingStep::COUNT - 1 {
            assert!(matches!(seq.advance(&form), StepOutcome::Moved(_)));
        }
        assert_eq!(seq.current(), OnboardingStep::Review);
        assert!(seq.is_last());
    }

    #[test]
    fn test_retreat_at_start_is_noop() {
        let mut seq = StepSequencer::new();
        assert_eq!(seq.retreat(), OnboardingStep::Basic);
        assert_eq!(seq.index(), 0);

        seq.advance(&OnboardingForm::default());
        assert_eq!(seq.retreat(), OnboardingStep::Basic);
    }

    #[test]
    fn test_blocked_submit_keeps_index() {
        let form = OnboardingForm::default();
        let mut seq = StepSequencer { index: 3 };

        match seq.advance(&form) {
            StepOutcome::Blocked(errors) => assert!(!errors.is_empty()),
            other => panic!("expected blocked, got {:?}", other),
        }
        assert_eq!(seq.index(), 3);
    }

    #[test]
    fn test_valid_submit_keeps_index() {
        let mut seq = StepSequencer { index: 3 };
        match seq.advance(&valid_form()) {
            StepOutcome::Submit(app) => assert_eq!(app.full_name, "Nina Simone"),
            other => panic!("expected submit, got {:?}", other),
        }
        assert_eq!(seq.current(), OnboardingStep::Review);
    }

    #[test]
    fn test_progress_numbers_are_one_based() {
        let seq = StepSequencer { index: 1 };
        let progress = seq.progress();
        let numbers: Vec<usize> = progress.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(progress[0].state, StepState::Done);
        assert_eq!(progress[1].state, StepState::Current);
        assert_eq!(progress[1].label, "Skills & Pricing");
        assert_eq!(progress[3].state, StepState::Upcoming);
    }

    #[test]
    fn test_step_validators() {
        let form = OnboardingForm::default();
        assert_eq!(OnboardingStep::Basic.validate(&form).len(), 2);
        assert!(OnboardingStep::Review.validate(&form).is_empty());
    }
}
