//! The quiz session state machine.
//!
//! One `QuizSession` drives one quiz attempt at a time:
//! `Idle -> Loading -> Playing -> Finished`, with `Failed` when loading goes
//! wrong and `reset` leading back to `Idle` from anywhere.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{SessionError, TriviaError};
use crate::history::HistoryStore;
use crate::model::{HistoryRecord, Phase, Question, QuizSettings};

// Submodules
pub mod actions;
pub mod completion;
pub mod loading;
pub mod queries;
pub mod resets;

/// Handed out by [`QuizSession::begin_start`]; the fetch result must come back
/// with it so loads that were overtaken by a `reset` can be recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    settings: QuizSettings,
}

impl LoadTicket {
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Questions are in; the session is playing.
    Ready(usize),
    Failed(TriviaError),
    /// The load belonged to an earlier attempt and was dropped.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The question already had an answer; nothing changed.
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    Finished(HistoryRecord),
}

pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    selected_answer: Option<String>,
    answered: bool,
    phase: Phase,
    /// Display order of the current question's answers, fixed when the
    /// question is entered.
    answer_order: Vec<String>,
    settings: Option<QuizSettings>,
    last_error: Option<TriviaError>,
    generation: u64,
    history: HistoryStore,
    rng: StdRng,
}

impl QuizSession {
    pub fn new(history: HistoryStore) -> Self {
        Self::with_rng(history, StdRng::from_entropy())
    }

    /// Deterministic answer shuffling, for tests and replays.
    pub fn with_seed(history: HistoryStore, seed: u64) -> Self {
        Self::with_rng(history, StdRng::seed_from_u64(seed))
    }

    fn with_rng(history: HistoryStore, rng: StdRng) -> Self {
        Self {
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            selected_answer: None,
            answered: false,
            phase: Phase::Idle,
            answer_order: Vec::new(),
            settings: None,
            last_error: None,
            generation: 0,
            history,
            rng,
        }
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        log::error!("invalid transition: {operation} while {:?}", self.phase);
        SessionError::InvalidTransition {
            operation,
            phase: self.phase,
        }
    }
}
