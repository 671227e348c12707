//! Quiz session state and navigation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{questions, Question, QuestionCategory, QuizAnswers, QuizMode};
use crate::answers::{AnswerSet, OneOrMany};
use crate::error::Result;
use crate::models::Category;

/// Serializable state of a quiz session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub mode: QuizMode,
    /// Index into the visible questions.
    pub current_question_index: usize,
    pub answers: QuizAnswers,
    pub skipped_questions: Vec<String>,
}

/// State fields to restore; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialQuizState {
    pub mode: Option<QuizMode>,
    pub current_question_index: Option<usize>,
    pub answers: Option<QuizAnswers>,
    pub skipped_questions: Option<Vec<String>>,
}

impl From<QuizState> for PartialQuizState {
    fn from(state: QuizState) -> Self {
        Self {
            mode: Some(state.mode),
            current_question_index: Some(state.current_question_index),
            answers: Some(state.answers),
            skipped_questions: Some(state.skipped_questions),
        }
    }
}

/// Progress within one question category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub name: QuestionCategory,
    pub label: &'static str,
    /// Visible questions answered or skipped.
    pub completed: usize,
    pub total: usize,
}

/// Position in the quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizProgress {
    /// 1-based question number.
    pub current: usize,
    /// Visible question count.
    pub total: usize,
    pub percentage: f64,
    pub categories: Vec<CategoryProgress>,
}

/// Drives one quiz session over a category's questions.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    category: Category,
    questions: &'static [Question],
    state: QuizState,
}

impl QuizEngine {
    /// Starts an empty session.
    pub fn new(category: Category, mode: QuizMode) -> Self {
        Self {
            category,
            questions: questions(category),
            state: QuizState {
                mode,
                ..QuizState::default()
            },
        }
    }

    /// Starts a session with answers already filled in.
    pub fn with_answers(mut self, answers: QuizAnswers) -> Self {
        self.state.answers = answers;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    // Visibility

    /// Questions asked in the current mode whose conditions hold.
    pub fn visible_questions(&self) -> Vec<&'static Question> {
        let allowed = self.state.mode.categories();
        self.questions
            .iter()
            .filter(|q| allowed.contains(&q.category) && q.is_shown(&self.state.answers))
            .collect()
    }

    /// The current question, `None` past the end.
    pub fn current_question(&self) -> Option<&'static Question> {
        self.visible_questions()
            .get(self.state.current_question_index)
            .copied()
    }

    pub fn is_question_visible(&self, id: &str) -> bool {
        self.visible_questions().iter().any(|q| q.id == id)
    }

    // Progress

    fn is_settled(&self, id: &str) -> bool {
        self.state.answers.contains_key(id) || self.was_skipped(id)
    }

    pub fn progress(&self) -> QuizProgress {
        let visible = self.visible_questions();
        let current = self.state.current_question_index + 1;
        let total = visible.len();

        let categories = self
            .state
            .mode
            .categories()
            .iter()
            .map(|&cat| {
                let in_category: Vec<_> = visible.iter().filter(|q| q.category == cat).collect();
                CategoryProgress {
                    name: cat,
                    label: cat.label(),
                    completed: in_category.iter().filter(|q| self.is_settled(q.id)).count(),
                    total: in_category.len(),
                }
            })
            .collect();

        let percentage = if total > 0 {
            current as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        QuizProgress {
            current,
            total,
            percentage,
            categories,
        }
    }

    /// Whether every core question is answered, skipped or hidden.
    pub fn core_questions_complete(&self) -> bool {
        self.questions
            .iter()
            .filter(|q| q.category == QuestionCategory::Core)
            .all(|q| self.is_settled(q.id) || !q.is_shown(&self.state.answers))
    }

    // Answers

    /// Records an answer and clears any earlier skip of the question.
    pub fn set_answer(&mut self, id: &str, value: impl Into<OneOrMany<String>>) {
        self.state.answers.insert(id.to_string(), value.into());
        self.state.skipped_questions.retain(|s| s != id);
    }

    pub fn answer(&self, id: &str) -> Option<&OneOrMany<String>> {
        self.state.answers.get(id)
    }

    /// Whether the question has a non-empty answer.
    pub fn has_answer(&self, id: &str) -> bool {
        match self.answer(id) {
            Some(OneOrMany::Many(values)) => !values.is_empty(),
            Some(OneOrMany::One(value)) => !value.is_empty(),
            None => false,
        }
    }

    /// Skips a question, applying its default when it has one.
    pub fn skip_question(&mut self, id: &str) {
        if let Some(default) = self.question(id).and_then(|q| q.default) {
            self.state.answers.insert(id.to_string(), default.to_answer());
        }
        if !self.was_skipped(id) {
            self.state.skipped_questions.push(id.to_string());
        }
    }

    pub fn was_skipped(&self, id: &str) -> bool {
        self.state.skipped_questions.iter().any(|s| s == id)
    }

    fn question(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    // Navigation

    /// Advances one question; `false` at the last visible question.
    pub fn next(&mut self) -> bool {
        if self.state.current_question_index + 1 < self.visible_questions().len() {
            self.state.current_question_index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one question; `false` at the first.
    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.state.current_question_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to a visible question.
    pub fn go_to_question(&mut self, id: &str) -> bool {
        match self.visible_questions().iter().position(|q| q.id == id) {
            Some(index) => {
                self.state.current_question_index = index;
                true
            }
            None => false,
        }
    }

    /// At or past the last visible question.
    pub fn is_complete(&self) -> bool {
        self.state.current_question_index + 1 >= self.visible_questions().len()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.current_question_index > 0
    }

    // Mode

    pub fn mode(&self) -> QuizMode {
        self.state.mode
    }

    /// Switches mode, staying on the current question if it remains
    /// visible and restarting otherwise.
    pub fn set_mode(&mut self, mode: QuizMode) {
        let current = self.current_question();
        self.state.mode = mode;

        let index = current.and_then(|cq| self.visible_questions().iter().position(|q| q.id == cq.id));
        self.state.current_question_index = index.unwrap_or(0);
    }

    // Results

    /// Answers with defaults filled in for every unanswered question,
    /// visible or not.
    pub fn final_answers(&self) -> QuizAnswers {
        let mut answers = self.state.answers.clone();
        for q in self.questions {
            if let Some(default) = q.default {
                answers
                    .entry(q.id.to_string())
                    .or_insert_with(|| default.to_answer());
            }
        }
        answers
    }

    /// Final answers parsed and validated for scoring.
    pub fn final_answer_set(&self) -> Result<AnswerSet> {
        let value = serde_json::to_value(self.final_answers())?;
        AnswerSet::parse(self.category, value)
    }

    /// Answers exactly as given, without defaults.
    pub fn raw_answers(&self) -> &QuizAnswers {
        &self.state.answers
    }

    // State

    pub fn export_state(&self) -> QuizState {
        self.state.clone()
    }

    /// Restores the fields present in `state`.
    pub fn import_state(&mut self, state: impl Into<PartialQuizState>) {
        let state = state.into();
        if let Some(mode) = state.mode {
            self.state.mode = mode;
        }
        if let Some(index) = state.current_question_index {
            self.state.current_question_index = index;
        }
        if let Some(answers) = state.answers {
            self.state.answers = answers;
        }
        if let Some(skipped) = state.skipped_questions {
            self.state.skipped_questions = skipped;
        }
    }

    /// Restores state from its JSON form.
    pub fn import_json(&mut self, value: Value) -> Result<()> {
        let state: PartialQuizState = serde_json::from_value(value)?;
        self.import_state(state);
        Ok(())
    }

    /// Clears answers and skips and returns to the first question.
    pub fn reset(&mut self, mode: Option<QuizMode>) {
        self.state = QuizState {
            mode: mode.unwrap_or(self.state.mode),
            ..QuizState::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AudioUse, GripStyle, WeightPreference};
    use serde_json::json;

    fn ids(questions: &[&Question]) -> Vec<&'static str> {
        questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_visible_questions_by_mode() {
        let quick = QuizEngine::new(Category::Mouse, QuizMode::Quick);
        assert_eq!(
            ids(&quick.visible_questions()),
            vec!["hand-size", "grip-style", "wireless"]
        );

        let personalized = QuizEngine::new(Category::Mouse, QuizMode::Personalized);
        assert_eq!(personalized.visible_questions().len(), 6);

        // shape-profile and gaming-genre wait on earlier answers
        let mut expert = QuizEngine::new(Category::Mouse, QuizMode::Expert);
        assert_eq!(expert.visible_questions().len(), 7);
        expert.set_answer("grip-style", vec!["claw"]);
        expert.set_answer("primary-use", vec!["precision"]);
        assert_eq!(expert.visible_questions().len(), 9);
        assert!(expert.is_question_visible("gaming-genre"));
    }

    #[test]
    fn test_progress() {
        let mut quiz = QuizEngine::new(Category::Mouse, QuizMode::Personalized);
        quiz.set_answer("hand-size", "large");
        quiz.skip_question("weight-preference");
        assert!(quiz.next());

        let progress = quiz.progress();
        assert_eq!(progress.current, 2);
        assert_eq!(progress.total, 6);
        assert!((progress.percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(progress.categories.len(), 2);
        assert_eq!(progress.categories[0].label, "Basics");
        assert_eq!(progress.categories[0].completed, 1);
        assert_eq!(progress.categories[0].total, 3);
        assert_eq!(progress.categories[1].completed, 1);
    }

    #[test]
    fn test_skip_applies_default_and_answer_unskips() {
        let mut quiz = QuizEngine::new(Category::Mouse, QuizMode::Personalized);
        quiz.skip_question("weight-preference");
        assert!(quiz.was_skipped("weight-preference"));
        assert_eq!(
            quiz.answer("weight-preference"),
            Some(&OneOrMany::from(vec!["light", "medium"]))
        );

        quiz.skip_question("weight-preference");
        assert_eq!(quiz.export_state().skipped_questions.len(), 1);

        quiz.set_answer("weight-preference", vec!["heavy"]);
        assert!(!quiz.was_skipped("weight-preference"));

        // core questions have no default
        quiz.skip_question("hand-size");
        assert!(!quiz.has_answer("hand-size"));
        assert!(quiz.was_skipped("hand-size"));
    }

    #[test]
    fn test_has_answer_ignores_empty() {
        let mut quiz = QuizEngine::new(Category::Audio, QuizMode::Quick);
        quiz.set_answer("primary-use", Vec::<&str>::new());
        quiz.set_answer("mic-needs", "");
        assert!(!quiz.has_answer("primary-use"));
        assert!(!quiz.has_answer("mic-needs"));
        quiz.set_answer("mic-needs", "essential");
        assert!(quiz.has_answer("mic-needs"));
    }

    #[test]
    fn test_navigation() {
        let mut quiz = QuizEngine::new(Category::Keyboard, QuizMode::Quick);
        assert!(!quiz.can_go_back());
        assert!(!quiz.back());
        assert!(quiz.next());
        assert!(quiz.next());
        assert!(quiz.is_complete());
        assert!(!quiz.next());
        assert!(quiz.back());
        assert_eq!(quiz.current_question().map(|q| q.id), Some("form-factor"));

        assert!(quiz.go_to_question("primary-use"));
        assert!(!quiz.go_to_question("budget"));
        assert_eq!(quiz.progress().current, 1);
    }

    #[test]
    fn test_set_mode_keeps_visible_question() {
        let mut quiz = QuizEngine::new(Category::Monitor, QuizMode::Expert);
        quiz.set_answer("primary-use", vec!["gaming"]);
        assert!(quiz.go_to_question("resolution"));
        quiz.set_mode(QuizMode::Quick);
        assert_eq!(quiz.current_question().map(|q| q.id), Some("resolution"));

        quiz.set_mode(QuizMode::Expert);
        assert!(quiz.go_to_question("hdr-needs"));
        quiz.set_mode(QuizMode::Personalized);
        assert_eq!(quiz.progress().current, 1);
        assert_eq!(quiz.mode(), QuizMode::Personalized);
    }

    #[test]
    fn test_core_questions_complete() {
        let mut quiz = QuizEngine::new(Category::Audio, QuizMode::Quick);
        assert!(!quiz.core_questions_complete());
        quiz.set_answer("primary-use", vec!["immersive"]);
        quiz.set_answer("form-factor", vec!["iem"]);
        quiz.skip_question("mic-needs");
        assert!(quiz.core_questions_complete());
    }

    #[test]
    fn test_final_answers_fill_defaults() {
        let mut quiz = QuizEngine::new(Category::Mouse, QuizMode::Quick);
        quiz.set_answer("hand-size", "medium");
        quiz.set_answer("grip-style", vec!["claw", "fingertip"]);
        quiz.set_answer("wireless", "wireless");

        assert_eq!(quiz.raw_answers().len(), 3);
        let answers = quiz.final_answers();
        assert_eq!(answers.len(), 9);
        assert_eq!(answers["handedness"], OneOrMany::from("right"));

        let Ok(AnswerSet::Mouse(mouse)) = quiz.final_answer_set() else {
            panic!("expected mouse answers");
        };
        assert_eq!(mouse.grip_style, vec![GripStyle::Claw, GripStyle::Fingertip]);
        assert_eq!(
            mouse.weight_preference,
            vec![WeightPreference::Light, WeightPreference::Medium]
        );
    }

    #[test]
    fn test_final_answer_set_reports_missing_core() {
        let quiz = QuizEngine::new(Category::Audio, QuizMode::Quick);
        assert!(quiz.final_answer_set().is_err());

        let quiz = QuizEngine::new(Category::Audio, QuizMode::Quick).with_answers(
            [
                ("primary-use".to_string(), OneOrMany::from(vec!["immersive"])),
                ("form-factor".to_string(), OneOrMany::from(vec!["over-ear"])),
                ("mic-needs".to_string(), OneOrMany::from("not-needed")),
            ]
            .into_iter()
            .collect(),
        );
        let Ok(AnswerSet::Audio(audio)) = quiz.final_answer_set() else {
            panic!("expected audio answers");
        };
        assert_eq!(audio.primary_use, vec![AudioUse::Immersive]);
    }

    #[test]
    fn test_export_import_roundtrip() {
        let mut quiz = QuizEngine::new(Category::Keyboard, QuizMode::Expert);
        quiz.set_answer("primary-use", vec!["programming"]);
        quiz.skip_question("budget");
        quiz.next();
        let saved = quiz.export_state();

        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["mode"], "expert");
        assert_eq!(json["currentQuestionIndex"], 1);
        assert_eq!(json["skippedQuestions"], json!(["budget"]));

        let mut restored = QuizEngine::new(Category::Keyboard, QuizMode::Quick);
        restored.import_json(json).unwrap();
        assert_eq!(restored.export_state(), saved);
    }

    #[test]
    fn test_partial_import_keeps_other_fields() {
        let mut quiz = QuizEngine::new(Category::Monitor, QuizMode::Expert);
        quiz.set_answer("resolution", "4k");
        quiz.import_json(json!({ "mode": "quick" })).unwrap();
        assert_eq!(quiz.mode(), QuizMode::Quick);
        assert!(quiz.has_answer("resolution"));
    }

    #[test]
    fn test_reset() {
        let mut quiz = QuizEngine::new(Category::Mouse, QuizMode::Expert);
        quiz.set_answer("hand-size", "small");
        quiz.skip_question("weight-preference");
        quiz.next();

        quiz.reset(None);
        assert_eq!(quiz.mode(), QuizMode::Expert);
        assert!(quiz.raw_answers().is_empty());
        assert!(!quiz.was_skipped("weight-preference"));
        assert!(!quiz.can_go_back());

        quiz.reset(Some(QuizMode::Quick));
        assert_eq!(quiz.mode(), QuizMode::Quick);
    }
}
