use super::*;
use crate::model::{PerformanceTier, score_percentage};
use crate::view_models::{AnswerState, QuestionView};

impl QuizSession {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    /// Settings of the last `start`; "try again" reuses them verbatim.
    pub fn settings(&self) -> Option<&QuizSettings> {
        self.settings.as_ref()
    }

    pub fn error(&self) -> Option<&TriviaError> {
        self.last_error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Playing => self.questions.get(self.current_index),
            _ => None,
        }
    }

    /// Shuffled answers of the current question; stable until the next one.
    pub fn answer_order(&self) -> &[String] {
        &self.answer_order
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 == self.questions.len()
    }

    pub fn is_answer_correct(&self, answer: &str) -> bool {
        self.current_question()
            .is_some_and(|question| question.correct_answer == answer)
    }

    pub fn score_percentage(&self) -> u8 {
        score_percentage(self.score, self.questions.len())
    }

    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_percentage(self.score_percentage())
    }

    pub fn performance_message(&self) -> &'static str {
        self.tier().message()
    }

    /// Everything the quiz screen needs to draw the current question.
    pub fn current_question_view(&self) -> Option<QuestionView> {
        let question = self.current_question()?;
        let answers = self
            .answer_order
            .iter()
            .map(|answer| {
                let state = AnswerState::for_answer(
                    answer,
                    &question.correct_answer,
                    self.selected_answer.as_deref(),
                );
                (answer.clone(), state)
            })
            .collect();

        Some(QuestionView {
            number: self.current_index + 1,
            total: self.questions.len(),
            text: question.text.clone(),
            category: question.category.clone(),
            difficulty: question.difficulty,
            answers,
            answered: self.answered,
            is_last: self.is_last_question(),
            score: self.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryChoice, DifficultyChoice};
    use crate::session::test_support::raws;

    fn playing(count: usize, seed: u64) -> QuizSession {
        let mut session = QuizSession::with_seed(HistoryStore::in_memory(), seed);
        let settings = QuizSettings::new(count as u32, CategoryChoice::Any, DifficultyChoice::Any)
            .expect("valid");
        let ticket = session.begin_start(settings).expect("start");
        session.complete_start(ticket, Ok(raws(count)));
        session
    }

    #[test]
    fn empty_session_has_zero_percentage_and_no_view() {
        let session = QuizSession::with_seed(HistoryStore::in_memory(), 1);
        assert_eq!(session.score_percentage(), 0);
        assert!(!session.is_last_question());
        assert!(session.current_question_view().is_none());
        assert_eq!(session.tier(), PerformanceTier::NeedsPractice);
    }

    #[test]
    fn answer_order_is_stable_until_the_next_question() {
        let mut session = playing(2, 11);
        let first = session.answer_order().to_vec();
        let mut expected = session.questions()[0].all_answers();
        let mut sorted = first.clone();
        sorted.sort();
        expected.sort();
        assert_eq!(sorted, expected);

        for _ in 0..5 {
            let view = session.current_question_view().expect("playing");
            let shown: Vec<_> = view.answers.iter().map(|(a, _)| a.clone()).collect();
            assert_eq!(shown, first);
        }
        session.select_answer("Wrong 1a").expect("playing");
        assert_eq!(session.answer_order(), first.as_slice());

        session.next_question().expect("answered");
        assert!(session.answer_order().iter().all(|a| a.contains('2')));
        assert!(session.answer_order().contains(&"Right 2".to_string()));
    }

    #[test]
    fn view_reports_position_and_answer_states() {
        let mut session = playing(2, 4);
        let view = session.current_question_view().expect("playing");
        assert_eq!((view.number, view.total), (1, 2));
        assert!(!view.is_last);
        assert!(view.answers.iter().all(|(_, s)| *s == AnswerState::Open));

        session.select_answer("Wrong 1a").expect("playing");
        let view = session.current_question_view().expect("playing");
        for (answer, state) in &view.answers {
            let expected = match answer.as_str() {
                "Right 1" => AnswerState::Correct,
                "Wrong 1a" => AnswerState::WrongPick,
                _ => AnswerState::Dimmed,
            };
            assert_eq!(*state, expected, "{answer}");
        }
    }

    #[test]
    fn is_answer_correct_checks_the_current_question() {
        let session = playing(2, 4);
        assert!(session.is_answer_correct("Right 1"));
        assert!(!session.is_answer_correct("Right 2"));
    }

    #[test]
    fn is_last_question_tracks_the_index() {
        let mut session = playing(2, 4);
        assert!(!session.is_last_question());
        session.select_answer("Right 1").expect("playing");
        session.next_question().expect("answered");
        assert!(session.is_last_question());
    }
}
