//! Quiz flow: question sets, modes and session state.
//!
//! Each category has an ordered list of questions. A question belongs to a
//! [`QuestionCategory`]; the [`QuizMode`] decides which categories are asked,
//! and an optional `show_when` predicate hides questions that make no sense
//! for earlier answers. Skipped questions fall back to their defaults so
//! even a quick quiz yields complete answers for scoring.
//!
//! # Usage
//!
//! ```
//! use gearmatch::models::Category;
//! use gearmatch::quiz::{QuizEngine, QuizMode};
//!
//! let mut quiz = QuizEngine::new(Category::Mouse, QuizMode::Quick);
//! quiz.set_answer("hand-size", "medium");
//! quiz.set_answer("grip-style", vec!["claw"]);
//! quiz.set_answer("wireless", "wireless");
//! let answers = quiz.final_answer_set().unwrap();
//! assert_eq!(answers.category(), Category::Mouse);
//! ```

mod engine;
mod questions;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::answers::OneOrMany;
use crate::models::wire_enum;

pub use engine::{CategoryProgress, PartialQuizState, QuizEngine, QuizProgress, QuizState};
pub use questions::questions;

/// Answers collected so far, keyed by question id.
pub type QuizAnswers = BTreeMap<String, OneOrMany<String>>;

wire_enum! {
    /// Depth tier of a question.
    pub enum QuestionCategory {
        Core => "core",
        Standard => "standard",
        Advanced => "advanced",
    }
}

impl QuestionCategory {
    /// Progress label.
    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::Core => "Basics",
            QuestionCategory::Standard => "Details",
            QuestionCategory::Advanced => "Advanced",
        }
    }
}

wire_enum! {
    /// How many questions the quiz asks.
    #[derive(Default)]
    pub enum QuizMode {
        Quick => "quick",
        #[default]
        Personalized => "personalized",
        Expert => "expert",
    }
}

impl QuizMode {
    /// Question categories asked in this mode.
    pub fn categories(self) -> &'static [QuestionCategory] {
        match self {
            QuizMode::Quick => &[QuestionCategory::Core],
            QuizMode::Personalized => &[QuestionCategory::Core, QuestionCategory::Standard],
            QuizMode::Expert => &[
                QuestionCategory::Core,
                QuestionCategory::Standard,
                QuestionCategory::Advanced,
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuizMode::Quick => "Quick Match",
            QuizMode::Personalized => "Personalized",
            QuizMode::Expert => "Expert",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuizMode::Quick => "Essential questions for solid recommendations",
            QuizMode::Personalized => "More questions for tailored results",
            QuizMode::Expert => "All questions for maximum precision",
        }
    }

    /// Rough time to finish, in minutes.
    pub fn estimated_minutes(self) -> u32 {
        match self {
            QuizMode::Quick => 1,
            QuizMode::Personalized => 2,
            QuizMode::Expert => 4,
        }
    }
}

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    pub title: &'static str,
}

/// Value applied when a question is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultAnswer {
    One(&'static str),
    Many(&'static [&'static str]),
}

impl DefaultAnswer {
    pub fn to_answer(self) -> OneOrMany<String> {
        match self {
            DefaultAnswer::One(v) => OneOrMany::One(v.to_string()),
            DefaultAnswer::Many(vs) => OneOrMany::Many(vs.iter().map(|v| v.to_string()).collect()),
        }
    }
}

/// Decides whether a question is shown given the answers so far.
pub type ShowWhen = fn(&QuizAnswers) -> bool;

/// A quiz question.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Answer key, e.g. `grip-style`.
    pub id: &'static str,
    pub title: &'static str,
    pub category: QuestionCategory,
    /// Relative importance, 1-10.
    pub importance: u8,
    pub multi_select: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultAnswer>,
    pub options: &'static [QuizOption],
    #[serde(skip)]
    pub show_when: Option<ShowWhen>,
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("multi_select", &self.multi_select)
            .field("conditional", &self.show_when.is_some())
            .finish()
    }
}

impl Question {
    /// Whether the question is shown for `answers`.
    pub fn is_shown(&self, answers: &QuizAnswers) -> bool {
        self.show_when.map_or(true, |show| show(answers))
    }

    /// Whether `id` is one of this question's options.
    pub fn has_option(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }
}
