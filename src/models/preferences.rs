use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Shortest selectable attention span, in minutes
pub const MIN_ATTENTION_SPAN: u32 = 15;
/// Longest selectable attention span, in minutes
pub const MAX_ATTENTION_SPAN: u32 = 120;
/// Attention span slider step, in minutes
pub const ATTENTION_SPAN_STEP: u32 = 15;

const DEFAULT_ATTENTION_SPAN: u32 = 45;

/// Preferred information-intake modality
///
/// Unrecognised values land in `Other`, which contributes no style-specific
/// techniques or tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
    #[serde(other)]
    Other,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Reading => "reading",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Other => "other",
        }
    }
}

/// Time of day the user studies best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyTime {
    EarlyMorning,
    LateMorning,
    Afternoon,
    Evening,
    #[serde(other)]
    Other,
}

impl StudyTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyTime::EarlyMorning => "early-morning",
            StudyTime::LateMorning => "late-morning",
            StudyTime::Afternoon => "afternoon",
            StudyTime::Evening => "evening",
            StudyTime::Other => "other",
        }
    }
}

/// Rest cadence; unrecognised values are paced like `Infrequent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakFrequency {
    Frequent,
    #[default]
    Moderate,
    Infrequent,
    #[serde(other)]
    Other,
}

impl BreakFrequency {
    /// Upper bound for a single focused session, in minutes
    pub fn session_cap(&self) -> u32 {
        match self {
            BreakFrequency::Frequent => 25,
            BreakFrequency::Moderate => 45,
            BreakFrequency::Infrequent | BreakFrequency::Other => 90,
        }
    }

    /// Short break paired with each session, in minutes
    pub fn break_length(&self) -> u32 {
        match self {
            BreakFrequency::Frequent => 5,
            BreakFrequency::Moderate => 10,
            BreakFrequency::Infrequent | BreakFrequency::Other => 15,
        }
    }
}

/// Preferred study surroundings; anything but `Quiet` gets the ambient advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Quiet,
    Ambient,
    #[serde(other)]
    Other,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Quiet => "quiet",
            Environment::Ambient => "ambient",
            Environment::Other => "other",
        }
    }
}

/// The user's biggest source of distraction
///
/// Values the client sends that are not listed here land in `Other`, which
/// takes the default branch wherever recommendations are keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distraction {
    #[default]
    Phone,
    SocialMedia,
    MultiTasking,
    Procrastination,
    Environment,
    #[serde(other)]
    Other,
}

impl Distraction {
    /// Whether the distraction lives on a screen
    pub fn is_digital(&self) -> bool {
        matches!(self, Distraction::Phone | Distraction::SocialMedia)
    }
}

/// Independent motivation toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationFactors {
    #[serde(default)]
    pub rewards: bool,
    #[serde(default)]
    pub goals: bool,
    #[serde(default)]
    pub progress: bool,
    #[serde(default)]
    pub social: bool,
}

impl Default for MotivationFactors {
    fn default() -> Self {
        Self {
            rewards: true,
            goals: true,
            progress: false,
            social: false,
        }
    }
}

/// A motivation toggle, addressed individually by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotivationFactor {
    Rewards,
    Goals,
    Progress,
    Social,
}

impl MotivationFactors {
    pub fn set(&mut self, factor: MotivationFactor, enabled: bool) {
        match factor {
            MotivationFactor::Rewards => self.rewards = enabled,
            MotivationFactor::Goals => self.goals = enabled,
            MotivationFactor::Progress => self.progress = enabled,
            MotivationFactor::Social => self.social = enabled,
        }
    }
}

/// A fully answered quiz, ready for recommendation generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPreferences {
    pub learning_style: LearningStyle,
    pub attention_span: u32,
    pub study_time: StudyTime,
    #[serde(default)]
    pub break_frequency: BreakFrequency,
    pub environment: Environment,
    #[serde(default)]
    pub motivation_factors: MotivationFactors,
    #[serde(default)]
    pub distraction: Distraction,
}

/// Quiz answers while the wizard is still collecting them
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceDraft {
    pub learning_style: Option<LearningStyle>,
    pub attention_span: u32,
    pub study_time: Option<StudyTime>,
    pub break_frequency: BreakFrequency,
    pub environment: Option<Environment>,
    pub motivation_factors: MotivationFactors,
    pub distraction: Distraction,
}

impl Default for PreferenceDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// The first unanswered field that blocks completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    LearningStyle,
    StudyTime,
    Environment,
}

impl Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingField::LearningStyle => write!(f, "learning style"),
            MissingField::StudyTime => write!(f, "study time"),
            MissingField::Environment => write!(f, "environment"),
        }
    }
}

impl PreferenceDraft {
    /// Creates a draft with the quiz defaults
    pub fn new() -> Self {
        Self {
            learning_style: None,
            attention_span: DEFAULT_ATTENTION_SPAN,
            study_time: None,
            break_frequency: BreakFrequency::default(),
            environment: None,
            motivation_factors: MotivationFactors::default(),
            distraction: Distraction::default(),
        }
    }

    /// Whether `minutes` is a value the attention span slider can produce
    pub fn is_valid_attention_span(minutes: u32) -> bool {
        (MIN_ATTENTION_SPAN..=MAX_ATTENTION_SPAN).contains(&minutes)
            && minutes % ATTENTION_SPAN_STEP == 0
    }

    /// Freezes the draft into submitted preferences
    pub fn complete(&self) -> Result<StudyPreferences, MissingField> {
        let learning_style = self.learning_style.ok_or(MissingField::LearningStyle)?;
        let study_time = self.study_time.ok_or(MissingField::StudyTime)?;
        let environment = self.environment.ok_or(MissingField::Environment)?;

        Ok(StudyPreferences {
            learning_style,
            attention_span: self.attention_span,
            study_time,
            break_frequency: self.break_frequency,
            environment,
            motivation_factors: self.motivation_factors,
            distraction: self.distraction,
        })
    }
}
