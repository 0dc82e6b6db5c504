use super::*;
use crate::error::TriviaResult;
use crate::trivia::{RawQuestion, TriviaSource, decode_entities};

impl QuizSession {
    /// Moves to `Loading` and returns the ticket the fetch result must be
    /// delivered with. Only allowed from `Idle` or `Failed`.
    pub fn begin_start(&mut self, settings: QuizSettings) -> Result<LoadTicket, SessionError> {
        if !matches!(self.phase, Phase::Idle | Phase::Failed) {
            return Err(self.invalid("start"));
        }
        self.generation += 1;
        self.phase = Phase::Loading;
        self.last_error = None;
        self.settings = Some(settings.clone());
        log::info!(
            "loading {} questions (generation {})",
            settings.amount(),
            self.generation
        );
        Ok(LoadTicket {
            generation: self.generation,
            settings,
        })
    }

    /// Delivers the fetch result for `ticket`. Results for an older ticket,
    /// or arriving when the session is no longer loading, are dropped.
    pub fn complete_start(
        &mut self,
        ticket: LoadTicket,
        result: TriviaResult<Vec<RawQuestion>>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation || self.phase != Phase::Loading {
            log::warn!(
                "discarding question load for generation {} (current {}, {:?})",
                ticket.generation,
                self.generation,
                self.phase
            );
            return LoadOutcome::Stale;
        }

        match result.and_then(ingest) {
            Ok(questions) => {
                let count = questions.len();
                self.questions = questions;
                self.current_index = 0;
                self.score = 0;
                self.selected_answer = None;
                self.answered = false;
                self.enter_question();
                self.phase = Phase::Playing;
                log::info!("quiz ready with {count} questions");
                LoadOutcome::Ready(count)
            }
            Err(err) => {
                log::info!("quiz failed to load: {err}");
                self.phase = Phase::Failed;
                self.questions.clear();
                self.answer_order.clear();
                self.last_error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// `begin_start`, a blocking fetch from `source`, then `complete_start`.
    pub fn start(
        &mut self,
        settings: QuizSettings,
        source: &dyn TriviaSource,
    ) -> Result<LoadOutcome, SessionError> {
        let ticket = self.begin_start(settings)?;
        let result = source.fetch_questions(ticket.settings());
        Ok(self.complete_start(ticket, result))
    }

    /// Fixes the answer order of the question at `current_index`.
    pub(super) fn enter_question(&mut self) {
        self.answer_order = match self.questions.get(self.current_index) {
            Some(question) => {
                crate::trivia::shuffle_with(&question.all_answers(), &mut self.rng)
            }
            None => Vec::new(),
        };
    }
}

/// Decodes a fetched batch. An empty batch counts as "no results".
fn ingest(raw: Vec<RawQuestion>) -> TriviaResult<Vec<Question>> {
    if raw.is_empty() {
        return Err(TriviaError::NoResults);
    }
    raw.into_iter().map(decode_question).collect()
}

fn decode_question(raw: RawQuestion) -> TriviaResult<Question> {
    let question = Question {
        text: decode_entities(&raw.question),
        correct_answer: decode_entities(&raw.correct_answer),
        incorrect_answers: raw
            .incorrect_answers
            .iter()
            .map(|answer| decode_entities(answer))
            .collect(),
        category: decode_entities(&raw.category),
        difficulty: raw.difficulty,
    };

    if question.incorrect_answers.is_empty() {
        return Err(TriviaError::Decode(format!(
            "question \"{}\" has no incorrect answers",
            question.text
        )));
    }
    if question
        .incorrect_answers
        .iter()
        .any(|answer| *answer == question.correct_answer)
    {
        return Err(TriviaError::Decode(format!(
            "question \"{}\" lists its correct answer as incorrect",
            question.text
        )));
    }
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryChoice, DifficultyChoice};
    use crate::session::test_support::{raw, raws};

    fn settings(amount: u32) -> QuizSettings {
        QuizSettings::new(amount, CategoryChoice::Any, DifficultyChoice::Any).expect("valid")
    }

    #[test]
    fn successful_load_decodes_once_and_starts_playing() {
        let mut session = QuizSession::with_seed(HistoryStore::in_memory(), 1);
        let ticket = session.begin_start(settings(3)).expect("idle can start");
        assert_eq!(session.phase(), Phase::Loading);

        let outcome = session.complete_start(ticket, Ok(raws(3)));
        assert_eq!(outcome, LoadOutcome::Ready(3));
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.questions()[0].text, "Question #1 & friends?");
    }

    #[test]
    fn double_escaped_text_is_decoded_only_once() {
        let mut question = raw(1);
        question.question = "Say &amp;lt;hi&amp;gt;".into();
        let mut session = QuizSession::with_seed(HistoryStore::in_memory(), 1);
        let ticket = session.begin_start(settings(1)).expect("start");
        session.complete_start(ticket, Ok(vec![question]));
        assert_eq!(session.questions()[0].text, "Say &lt;hi&gt;");
    }

    #[test]
    fn empty_batch_fails_as_no_results() {
        let mut session = QuizSession::with_seed(HistoryStore::in_memory(), 1);
        let ticket = session.begin_start(settings(5)).expect("start");
        let outcome = session.complete_start(ticket, Ok(Vec::new()));
        assert_eq!(outcome, LoadOutcome::Failed(TriviaError::NoResults));
        assert_eq!(session.phase(), Phase::Failed);
        assert!(session.questions().is_empty());
    }

    #[test]
    fn question_repeating_its_correct_answer_is_rejected() {
        let mut bad = raw(1);
        bad.incorrect_answers = vec!["Right 1".into(), "Other".into()];
        assert!(matches!(ingest(vec![bad]), Err(TriviaError::Decode(_))));

        let mut bare = raw(2);
        bare.incorrect_answers.clear();
        assert!(matches!(ingest(vec![bare]), Err(TriviaError::Decode(_))));
    }

    #[test]
    fn cannot_start_while_loading_or_playing() {
        let mut session = QuizSession::with_seed(HistoryStore::in_memory(), 1);
        let ticket = session.begin_start(settings(2)).expect("start");
        assert!(matches!(
            session.begin_start(settings(2)),
            Err(SessionError::InvalidTransition {
                phase: Phase::Loading,
                ..
            })
        ));
        session.complete_start(ticket, Ok(raws(2)));
        assert!(session.begin_start(settings(2)).is_err());
    }

    #[test]
    fn failed_session_can_start_again() {
        let mut session = QuizSession::with_seed(HistoryStore::in_memory(), 1);
        let ticket = session.begin_start(settings(2)).expect("start");
        session.complete_start(ticket, Err(TriviaError::SessionExpired));
        assert_eq!(session.error(), Some(&TriviaError::SessionExpired));

        let ticket = session.begin_start(settings(2)).expect("failed can restart");
        assert_eq!(session.error(), None);
        assert_eq!(
            session.complete_start(ticket, Ok(raws(2))),
            LoadOutcome::Ready(2)
        );
    }

    #[test]
    fn load_arriving_after_reset_is_discarded() {
        let mut session = QuizSession::with_seed(HistoryStore::in_memory(), 1);
        let stale = session.begin_start(settings(2)).expect("start");
        session.reset();

        assert_eq!(session.complete_start(stale.clone(), Ok(raws(2))), LoadOutcome::Stale);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.questions().is_empty());

        // A newer attempt is not disturbed by the old ticket either.
        let fresh = session.begin_start(settings(2)).expect("restart");
        assert_eq!(session.complete_start(stale, Ok(raws(2))), LoadOutcome::Stale);
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.complete_start(fresh, Ok(raws(2))), LoadOutcome::Ready(2));
    }
}
