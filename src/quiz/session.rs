//! Quiz session state machine
//!
//! Owns everything a running quiz mutates: the shuffled question set, the
//! count of answered questions, the running score, the answered flag, and the
//! current selection. Each user action is a small transition; rendering is a
//! pure function of the resulting state.
//!
//! `answered_count` counts graded questions, not the displayed question:
//! submitting increments it, so while feedback is on screen the graded record
//! sits at `answered_count - 1`. Changing the selection while feedback is
//! shown clears the answered flag and thereby moves the display to the next
//! question with submission re-enabled.

use crate::bank::{AnswerKey, QuestionRecord, QuestionSet};

/// Where the session currently is in the per-question cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A question is displayed and can be submitted
    AwaitingAnswer,
    /// The current question has been graded; feedback is on screen
    Submitted,
    /// Every question has been graded and dismissed
    Finished,
}

/// Feedback retained for the question graded last
#[derive(Debug, Clone)]
pub struct Grading {
    /// Whether the submitted selection was correct
    pub correct: bool,
    /// Label of the correct option, e.g. `"B) Berlin"`
    pub correct_label: String,
    /// The record's explanation text
    pub explanation: String,
}

/// State for one quiz run, created on chapter pick and dropped on menu return
#[derive(Debug)]
pub struct QuizSession {
    questions: QuestionSet,
    /// Number of questions graded so far
    answered_count: usize,
    /// Number of those graded correct; never exceeds `answered_count`
    score: usize,
    /// Whether the displayed question has been graded
    answered: bool,
    /// Explicit selection, if the user moved the cursor
    selected: Option<AnswerKey>,
    /// Feedback for the question graded last, cleared on advance
    grading: Option<Grading>,
}

impl QuizSession {
    pub fn new(questions: QuestionSet) -> Self {
        Self { questions, answered_count: 0, score: 0, answered: false, selected: None, grading: None }
    }

    /// Current phase, derived from the answered flag and progress
    pub fn phase(&self) -> Phase {
        if self.answered {
            Phase::Submitted
        } else if self.answered_count >= self.questions.len() {
            Phase::Finished
        } else {
            Phase::AwaitingAnswer
        }
    }

    /// Index of the question currently on screen
    ///
    /// While feedback is shown this is the already-graded record, one behind
    /// the answered count.
    pub fn display_index(&self) -> usize {
        if self.answered { self.answered_count - 1 } else { self.answered_count }
    }

    /// The question currently on screen, if any
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.display_index())
    }

    /// The selection a submit would grade
    ///
    /// Defaults to the first option when the user never moved the cursor,
    /// matching the selection control's default entry.
    pub fn effective_selection(&self) -> AnswerKey {
        self.selected.unwrap_or(AnswerKey::A)
    }

    /// Change the selected option
    ///
    /// Always clears the answered flag, so a selection change after a submit
    /// re-enables submission (and moves the display on to the next question).
    pub fn select(&mut self, key: AnswerKey) {
        self.selected = Some(key);
        self.answered = false;
        self.grading = None;
    }

    /// Move the selection cursor one option up
    ///
    /// A move that hits the top without changing the selection is not a
    /// selection change and leaves the answered flag alone.
    pub fn select_prev(&mut self) {
        let index = self.effective_selection().index();
        if let Some(key) = AnswerKey::from_index(index.saturating_sub(1)) {
            if key != self.effective_selection() {
                self.select(key);
            }
        }
    }

    /// Move the selection cursor one option down
    pub fn select_next(&mut self) {
        let index = self.effective_selection().index();
        if let Some(key) = AnswerKey::from_index((index + 1).min(AnswerKey::ALL.len() - 1)) {
            if key != self.effective_selection() {
                self.select(key);
            }
        }
    }

    /// Grade the displayed question
    ///
    /// No-op when the question is already graded or the quiz is finished.
    /// Otherwise marks it answered, advances the answered count, scores the
    /// effective selection against the record, and retains feedback.
    pub fn submit(&mut self) -> Option<&Grading> {
        if self.answered || self.answered_count >= self.questions.len() {
            return None;
        }

        let record = self.questions.get(self.answered_count)?;
        let correct = self.effective_selection() == record.correct;
        let grading = Grading {
            correct,
            correct_label: record.correct_label(),
            explanation: record.explanation.clone(),
        };

        self.answered = true;
        self.answered_count += 1;
        if correct {
            self.score += 1;
        }
        self.grading = Some(grading);
        self.grading.as_ref()
    }

    /// Dismiss feedback and move on to the next question
    ///
    /// Only meaningful after a submit; clears the selection so the next
    /// question starts from the default entry.
    pub fn advance(&mut self) {
        if self.answered {
            self.answered = false;
            self.selected = None;
            self.grading = None;
        }
    }

    /// Feedback for the question graded last, while it is on screen
    pub fn grading(&self) -> Option<&Grading> {
        self.grading.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Share of answered questions graded correct, to one decimal place
    ///
    /// `None` until at least one question has been answered.
    pub fn percent_correct(&self) -> Option<f64> {
        if self.answered_count == 0 {
            return None;
        }
        Some(self.score as f64 / self.answered_count as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionRecord;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn record(text: &str, correct: AnswerKey) -> QuestionRecord {
        QuestionRecord {
            text: text.into(),
            option_a: format!("{text} option A"),
            option_b: format!("{text} option B"),
            option_c: format!("{text} option C"),
            option_d: format!("{text} option D"),
            correct,
            explanation: format!("{text} explanation"),
        }
    }

    /// Two questions with answer keys B then A, in fixed order
    fn two_question_session() -> QuizSession {
        let set = QuestionSet::in_order(vec![
            record("Q1", AnswerKey::B),
            record("Q2", AnswerKey::A),
        ]);
        QuizSession::new(set)
    }

    #[test]
    fn new_session_awaits_first_question() {
        let session = two_question_session();
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert_eq!(session.display_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.effective_selection(), AnswerKey::A);
    }

    #[test]
    fn correct_submission_increments_score() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        let grading = session.submit().unwrap();

        assert!(grading.correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.phase(), Phase::Submitted);
    }

    #[test]
    fn wrong_submission_reports_correct_label() {
        let mut session = two_question_session();
        session.select(AnswerKey::A);
        let grading = session.submit().unwrap();

        assert!(!grading.correct);
        assert_eq!(grading.correct_label, "B) Q1 option B");
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn submitted_question_stays_on_screen() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        session.submit().unwrap();

        // answered_count moved on, the display did not
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.display_index(), 0);
        assert_eq!(session.current_question().unwrap().text, "Q1");
    }

    #[test]
    fn double_submit_is_a_no_op() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        assert!(session.submit().is_some());
        assert!(session.submit().is_none());
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn selection_change_after_submit_reenables_submission() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        session.submit().unwrap();
        assert_eq!(session.phase(), Phase::Submitted);

        // Re-selection clears the answered flag and moves the display on
        session.select(AnswerKey::A);
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert_eq!(session.display_index(), 1);
        assert!(session.submit().is_some());
        assert!(session.submit().is_none());
    }

    #[test]
    fn advance_clears_selection_and_feedback() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        session.submit().unwrap();
        session.advance();

        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert_eq!(session.display_index(), 1);
        assert_eq!(session.effective_selection(), AnswerKey::A);
        assert!(session.grading().is_none());
    }

    #[test]
    fn advance_before_submit_is_a_no_op() {
        let mut session = two_question_session();
        session.select(AnswerKey::C);
        session.advance();

        assert_eq!(session.display_index(), 0);
        assert_eq!(session.effective_selection(), AnswerKey::C);
    }

    #[test]
    fn perfect_run_finishes_at_full_score() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        session.submit().unwrap();
        assert_eq!((session.score(), session.answered_count()), (1, 1));

        session.select(AnswerKey::A);
        session.submit().unwrap();
        assert_eq!((session.score(), session.answered_count()), (2, 2));

        session.advance();
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.percent_correct(), Some(100.0));
    }

    #[test]
    fn finish_is_reached_regardless_of_dismissal_path() {
        // Dismiss the last feedback via a selection change instead of advance.
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        session.submit().unwrap();
        session.advance();
        session.select(AnswerKey::A);
        session.submit().unwrap();

        session.select(AnswerKey::D);
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[test]
    fn submit_after_finish_is_rejected() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        session.submit().unwrap();
        session.advance();
        session.submit().unwrap();
        session.advance();

        assert_eq!(session.phase(), Phase::Finished);
        assert!(session.submit().is_none());
        assert_eq!(session.answered_count(), 2);
    }

    #[test]
    fn default_selection_grades_first_option() {
        // Submitting without ever moving the cursor grades option A.
        let set = QuestionSet::in_order(vec![record("Q1", AnswerKey::A)]);
        let mut session = QuizSession::new(set);
        let grading = session.submit().unwrap();
        assert!(grading.correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn cursor_movement_clamps_at_both_ends() {
        let mut session = two_question_session();
        session.select_prev();
        assert_eq!(session.effective_selection(), AnswerKey::A);

        for _ in 0..6 {
            session.select_next();
        }
        assert_eq!(session.effective_selection(), AnswerKey::D);
    }

    #[test]
    fn cursor_move_without_change_keeps_feedback_on_screen() {
        let mut session = two_question_session();
        session.submit().unwrap(); // default selection A
        assert_eq!(session.phase(), Phase::Submitted);

        // Selection is A; pressing up cannot change it, so the graded
        // question stays on screen.
        session.select_prev();
        assert_eq!(session.phase(), Phase::Submitted);
        assert_eq!(session.display_index(), 0);
    }

    #[test]
    fn percent_is_undefined_before_first_answer() {
        let session = two_question_session();
        assert_eq!(session.percent_correct(), None);
    }

    #[test]
    fn one_of_two_is_fifty_percent() {
        let mut session = two_question_session();
        session.select(AnswerKey::B);
        session.submit().unwrap();
        session.advance();
        session.select(AnswerKey::C);
        session.submit().unwrap();

        assert_eq!(session.percent_correct(), Some(50.0));
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Select(usize),
        Submit,
        Advance,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4).prop_map(Op::Select),
            Just(Op::Submit),
            Just(Op::Advance),
        ]
    }

    proptest! {
        #[test]
        fn score_never_exceeds_answered_count(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let set = QuestionSet::in_order(vec![
                record("Q1", AnswerKey::B),
                record("Q2", AnswerKey::A),
                record("Q3", AnswerKey::D),
            ]);
            let mut session = QuizSession::new(set);

            for op in ops {
                match op {
                    Op::Select(i) => session.select(AnswerKey::from_index(i).unwrap()),
                    Op::Submit => { session.submit(); }
                    Op::Advance => session.advance(),
                }
                prop_assert!(session.score() <= session.answered_count());
                prop_assert!(session.answered_count() <= session.len());
                if session.phase() == Phase::Finished {
                    prop_assert_eq!(session.answered_count(), session.len());
                }
            }
        }
    }
}
