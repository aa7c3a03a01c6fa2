//! Four-step study quiz.
//!
//! Steps only move through [`Step::transition`]. Results are produced from a
//! completed [`StudyPreferences`], so reaching [`Step::Results`] with an
//! unanswered field cannot happen.

use std::fmt::Display;

use crate::{
    error::AppError,
    models::{
        AiRecommendation, AiRecommendationRequest, BreakFrequency, Distraction, Environment,
        LearningStyle, MissingField, MotivationFactor, PreferenceDraft, Recommendation,
        StudyPreferences, StudyTime,
    },
    services::{generate_recommendations, AiAdapter},
};

/// Interests sent with every AI request started from the quiz
pub const QUIZ_INTERESTS: [&str; 3] = ["education", "learning", "productivity"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    LearningStyle = 1,
    FocusAndTime = 2,
    EnvironmentAndConsent = 3,
    Results = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Continue,
    Back,
    Restart,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Transition table; `None` means the event is not allowed from this step
    pub fn transition(self, event: WizardEvent) -> Option<Step> {
        match (self, event) {
            (_, WizardEvent::Restart) => Some(Step::LearningStyle),
            (Step::LearningStyle, WizardEvent::Continue) => Some(Step::FocusAndTime),
            (Step::FocusAndTime, WizardEvent::Continue) => Some(Step::EnvironmentAndConsent),
            (Step::EnvironmentAndConsent, WizardEvent::Continue) => Some(Step::Results),
            (Step::Results, WizardEvent::Continue) => None,
            (Step::LearningStyle, WizardEvent::Back) => None,
            (Step::FocusAndTime, WizardEvent::Back) => Some(Step::LearningStyle),
            (Step::EnvironmentAndConsent, WizardEvent::Back) => Some(Step::FocusAndTime),
            (Step::Results, WizardEvent::Back) => Some(Step::EnvironmentAndConsent),
        }
    }

    /// Field that must be answered before continuing past this step
    pub fn required_field(self) -> Option<MissingField> {
        match self {
            Step::LearningStyle => Some(MissingField::LearningStyle),
            Step::FocusAndTime => Some(MissingField::StudyTime),
            Step::EnvironmentAndConsent => Some(MissingField::Environment),
            Step::Results => None,
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::LearningStyle => "learning-style",
            Step::FocusAndTime => "focus-and-time",
            Step::EnvironmentAndConsent => "environment-and-consent",
            Step::Results => "results",
        };
        write!(f, "{}", name)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WizardError {
    #[error("Please choose a {0} before continuing")]
    MissingField(MissingField),

    #[error("Cannot {event:?} from step {step}")]
    InvalidTransition { step: Step, event: WizardEvent },

    #[error("Attention span must be 15-120 minutes in 15-minute steps, got {0}")]
    InvalidAttentionSpan(u32),

    #[error("Failed to generate recommendations: {0}")]
    Recommendation(#[from] AppError),
}

impl From<MissingField> for WizardError {
    fn from(field: MissingField) -> Self {
        WizardError::MissingField(field)
    }
}

/// What the results step shows
#[derive(Debug, Clone, PartialEq)]
pub enum WizardResults {
    RuleBased(Recommendation),
    Ai(AiRecommendation),
}

/// One user's pass through the quiz
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    draft: PreferenceDraft,
    use_ai: bool,
    results: Option<WizardResults>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::LearningStyle,
            draft: PreferenceDraft::new(),
            use_ai: true,
            results: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &PreferenceDraft {
        &self.draft
    }

    pub fn results(&self) -> Option<&WizardResults> {
        self.results.as_ref()
    }

    pub fn uses_ai(&self) -> bool {
        self.use_ai
    }

    pub fn set_use_ai(&mut self, use_ai: bool) {
        self.use_ai = use_ai;
    }

    pub fn select_learning_style(&mut self, style: LearningStyle) {
        self.draft.learning_style = Some(style);
    }

    pub fn set_attention_span(&mut self, minutes: u32) -> Result<(), WizardError> {
        if !PreferenceDraft::is_valid_attention_span(minutes) {
            return Err(WizardError::InvalidAttentionSpan(minutes));
        }
        self.draft.attention_span = minutes;
        Ok(())
    }

    pub fn select_study_time(&mut self, time: StudyTime) {
        self.draft.study_time = Some(time);
    }

    pub fn set_break_frequency(&mut self, frequency: BreakFrequency) {
        self.draft.break_frequency = frequency;
    }

    pub fn select_environment(&mut self, environment: Environment) {
        self.draft.environment = Some(environment);
    }

    pub fn set_motivation(&mut self, factor: MotivationFactor, enabled: bool) {
        self.draft.motivation_factors.set(factor, enabled);
    }

    pub fn set_distraction(&mut self, distraction: Distraction) {
        self.draft.distraction = distraction;
    }

    /// Whether the continue control for the current step is enabled
    pub fn can_continue(&self) -> bool {
        match self.step.required_field() {
            Some(MissingField::LearningStyle) => self.draft.learning_style.is_some(),
            Some(MissingField::StudyTime) => self.draft.study_time.is_some(),
            Some(MissingField::Environment) => self.draft.environment.is_some(),
            None => false,
        }
    }

    fn apply(&mut self, event: WizardEvent) -> Result<Step, WizardError> {
        let next = self
            .step
            .transition(event)
            .ok_or(WizardError::InvalidTransition {
                step: self.step,
                event,
            })?;

        tracing::debug!(from = %self.step, to = %next, event = ?event, "Wizard transition");
        self.step = next;
        Ok(next)
    }

    /// Moves from step 1 to 2 or 2 to 3
    ///
    /// Leaving step 3 produces results and goes through [`Wizard::finish`].
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        if self.step == Step::EnvironmentAndConsent {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                event: WizardEvent::Continue,
            });
        }
        if let Some(field) = self.step.required_field() {
            if !self.can_continue() {
                return Err(WizardError::MissingField(field));
            }
        }
        self.apply(WizardEvent::Continue)
    }

    pub fn back(&mut self) -> Result<Step, WizardError> {
        let step = self.apply(WizardEvent::Back)?;
        self.results = None;
        Ok(step)
    }

    /// Returns to step 1 with a fresh draft
    pub fn restart(&mut self) {
        self.step = self
            .step
            .transition(WizardEvent::Restart)
            .unwrap_or(Step::LearningStyle);
        self.draft = PreferenceDraft::new();
        self.results = None;
    }

    /// Completes step 3 and produces results from the chosen source
    ///
    /// A failed model call leaves the wizard on step 3 so the user can retry.
    pub async fn finish(&mut self, adapter: &AiAdapter) -> Result<&WizardResults, WizardError> {
        if self.step != Step::EnvironmentAndConsent {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                event: WizardEvent::Continue,
            });
        }

        let prefs = self.draft.complete()?;
        let results = if self.use_ai {
            WizardResults::Ai(adapter.recommend(&ai_request(&prefs)).await?)
        } else {
            WizardResults::RuleBased(generate_recommendations(&prefs))
        };

        self.apply(WizardEvent::Continue)?;
        Ok(&*self.results.insert(results))
    }
}

fn ai_request(prefs: &StudyPreferences) -> AiRecommendationRequest {
    AiRecommendationRequest {
        interests: QUIZ_INTERESTS.iter().map(|s| s.to_string()).collect(),
        ..AiRecommendationRequest::from(prefs)
    }
}
