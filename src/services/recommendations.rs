use crate::models::{
    BreakFrequency, Distraction, Environment, LearningStyle, MotivationFactors, Recommendation,
    StudyPreferences, StudyTime,
};

const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "Focus on progress, not perfection. Each study session is building your knowledge foundation, one block at a time. What matters most is consistency and intentional learning.",
    "Don't compare your chapter 1 to someone else's chapter 20. Your learning journey is unique, and every focused study session brings you closer to your goals.",
    "The difference between a successful student and others is not a lack of strength or knowledge, but rather a lack of will and structured routine.",
    "Your future is created by what you do today, not tomorrow. Make each study session count.",
    "Small daily improvements lead to stunning results over time. Trust your process and study routine.",
];

/// Generates a rule-based study plan from completed quiz answers
///
/// Pure lookup over the preferences: the same answers always produce the same
/// plan, quote included.
pub fn generate_recommendations(prefs: &StudyPreferences) -> Recommendation {
    Recommendation {
        session_structure: session_structure(prefs),
        techniques: techniques(prefs),
        environment: environment_tips(prefs),
        motivational_quote: motivational_quote(prefs.distraction).to_string(),
    }
}

fn session_structure(prefs: &StudyPreferences) -> Vec<String> {
    let frequency = prefs.break_frequency;
    let session_length = frequency.session_cap().min(prefs.attention_span);
    let long_break_after = match frequency {
        BreakFrequency::Infrequent => 2,
        BreakFrequency::Frequent | BreakFrequency::Moderate | BreakFrequency::Other => 3,
    };

    let mut structure = vec![
        format!("{}-minute focused study sessions", session_length),
        format!("{}-minute breaks between sessions", frequency.break_length()),
    ];

    if let Some(sentence) = optimal_time(prefs.study_time) {
        structure.push(sentence.to_string());
    }

    structure.push(format!(
        "30-minute longer break after {} sessions",
        long_break_after
    ));

    structure
}

fn optimal_time(study_time: StudyTime) -> Option<&'static str> {
    match study_time {
        StudyTime::EarlyMorning => Some("Early morning is your optimal study time"),
        StudyTime::LateMorning => Some("Late morning is your optimal study time"),
        StudyTime::Afternoon => Some("Afternoon is your optimal study time"),
        StudyTime::Evening => Some("Evening is your optimal study time"),
        StudyTime::Other => None,
    }
}

fn style_techniques(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &[
            "<strong>Visual mapping</strong>: Use diagrams, mind maps, and color-coding",
            "<strong>Visualization</strong>: Create mental images of concepts and processes",
        ],
        LearningStyle::Auditory => &[
            "<strong>Audio recordings</strong>: Record and listen to study materials",
            "<strong>Group discussions</strong>: Verbalize concepts and explain them aloud",
        ],
        LearningStyle::Reading => &[
            "<strong>Cornell note-taking</strong>: Structured note format with summary section",
            "<strong>SQ3R method</strong>: Survey, Question, Read, Recite, Review",
        ],
        LearningStyle::Kinesthetic => &[
            "<strong>Practice exercises</strong>: Hands-on application of concepts",
            "<strong>Teaching others</strong>: Explain concepts physically to reinforce learning",
        ],
        LearningStyle::Other => &[],
    }
}

fn techniques(prefs: &StudyPreferences) -> Vec<String> {
    let mut techniques: Vec<String> = style_techniques(prefs.learning_style)
        .iter()
        .map(|t| t.to_string())
        .collect();

    techniques
        .push("<strong>The Pomodoro Technique</strong>: Timed work/break intervals".to_string());

    if prefs.motivation_factors.rewards {
        techniques.push(
            "<strong>Reward system</strong>: Small rewards after completing sessions".to_string(),
        );
    }

    if let Some(countermeasure) = distraction_countermeasure(prefs.distraction) {
        techniques.push(countermeasure.to_string());
    }

    techniques
}

fn distraction_countermeasure(distraction: Distraction) -> Option<&'static str> {
    match distraction {
        Distraction::Phone | Distraction::SocialMedia => {
            Some("<strong>Digital minimalism</strong>: Reduce phone distractions during study")
        }
        Distraction::MultiTasking => Some(
            "<strong>Single-tasking focus</strong>: Dedicate full attention to one subject at a time",
        ),
        Distraction::Procrastination => {
            Some("<strong>Time blocking</strong>: Schedule specific times for study sessions")
        }
        Distraction::Environment | Distraction::Other => None,
    }
}

fn environment_tips(prefs: &StudyPreferences) -> Vec<String> {
    let study_space = match prefs.environment {
        Environment::Quiet => {
            "<strong>Study space</strong>: Quiet environment with minimal distractions"
        }
        Environment::Ambient | Environment::Other => {
            "<strong>Study space</strong>: Ambient environment with background activity or music"
        }
    };

    let mut tips = vec![study_space.to_string()];

    if let Some(tools) = style_tools(prefs.learning_style) {
        tips.push(tools.to_string());
    }

    if prefs.distraction.is_digital() {
        tips.push("<strong>Digital setup</strong>: App blockers during study sessions".to_string());
    }

    tips.push(physical_items(&prefs.motivation_factors).to_string());

    tips
}

fn style_tools(style: LearningStyle) -> Option<&'static str> {
    match style {
        LearningStyle::Visual => {
            Some("<strong>Tools</strong>: Mind mapping software and colorful note-taking tools")
        }
        LearningStyle::Auditory => Some(
            "<strong>Tools</strong>: Voice recorder, text-to-speech software, noise-cancelling headphones",
        ),
        LearningStyle::Reading => {
            Some("<strong>Tools</strong>: Highlighters, sticky notes, digital note-taking apps")
        }
        LearningStyle::Kinesthetic => {
            Some("<strong>Tools</strong>: Fidget tools, standing desk, flashcards for movement")
        }
        LearningStyle::Other => None,
    }
}

fn physical_items(motivation: &MotivationFactors) -> &'static str {
    if motivation.progress {
        "<strong>Physical items</strong>: Task cards and visual progress trackers"
    } else if motivation.goals {
        "<strong>Physical items</strong>: Goal tracker and calendar for deadlines"
    } else {
        "<strong>Physical items</strong>: Timer and session checklist"
    }
}

fn quote_index(distraction: Distraction) -> usize {
    match distraction {
        Distraction::Phone | Distraction::SocialMedia => 0,
        Distraction::MultiTasking => 1,
        Distraction::Procrastination => 2,
        Distraction::Environment => 3,
        Distraction::Other => 4,
    }
}

fn motivational_quote(distraction: Distraction) -> &'static str {
    MOTIVATIONAL_QUOTES[quote_index(distraction)]
}
