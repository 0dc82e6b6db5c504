use super::*;
use chrono::Utc;

impl QuizSession {
    /// `Playing -> Finished`. Appends the result to the history exactly once
    /// per finished attempt and returns it.
    pub(super) fn finish(&mut self) -> HistoryRecord {
        self.phase = Phase::Finished;
        let record = HistoryRecord::new(self.score, self.questions.len(), Utc::now());
        self.history.append(record.clone());
        log::info!(
            "quiz finished: {}/{} ({}%)",
            record.score,
            record.total_questions,
            record.score_percentage
        );
        record
    }

    /// Text for sharing a finished result.
    pub fn share_text(&self) -> Option<String> {
        if self.phase != Phase::Finished {
            return None;
        }
        Some(format!(
            "I scored {}/{} ({}%) on Trivia Quiz! 🎯",
            self.score,
            self.total_questions(),
            self.score_percentage()
        ))
    }
}
