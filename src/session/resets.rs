use super::*;

impl QuizSession {
    /// Back to `Idle` from any phase. Questions, score, answer, error and
    /// settings are dropped; a load still in flight becomes stale. The
    /// history is kept.
    pub fn reset(&mut self) {
        log::debug!("resetting session from {:?}", self.phase);
        self.generation += 1;
        self.questions.clear();
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.answered = false;
        self.answer_order.clear();
        self.settings = None;
        self.last_error = None;
        self.phase = Phase::Idle;
    }
}
