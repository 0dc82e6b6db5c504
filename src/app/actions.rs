use super::*;
use crate::session::{Advance, AnswerOutcome};

impl TriviaApp {
    pub fn open_settings(&mut self) {
        self.screen = Screen::Settings;
        self.message.clear();
        self.ensure_categories();
    }

    pub fn show_history(&mut self) {
        self.screen = Screen::History;
        self.message.clear();
    }

    pub fn answer(&mut self, answer: &str) {
        match self.session.select_answer(answer) {
            Ok(AnswerOutcome::Locked) => log::debug!("ignoring a second answer"),
            Ok(_) => {}
            Err(err) => self.message = err.to_string(),
        }
    }

    /// "Next question" / "Finish quiz".
    pub fn advance(&mut self) {
        match self.session.next_question() {
            Ok(Advance::Next(_)) => {}
            Ok(Advance::Finished(record)) => {
                log::debug!("showing summary for {}", record.score_label());
                self.screen = Screen::Summary;
            }
            Err(err) => self.message = err.to_string(),
        }
    }

    /// Replays the last quiz's settings with fresh questions.
    pub fn try_again(&mut self) {
        let settings = match self.last_settings.clone() {
            Some(settings) => settings,
            None => match self.form.to_settings() {
                Ok(settings) => settings,
                Err(err) => {
                    self.message = err.to_string();
                    return;
                }
            },
        };
        self.start_quiz_with(settings);
    }

    /// Leaves the quiz (or its summary) for the settings screen.
    pub fn new_quiz_settings(&mut self) {
        self.pending_load = None;
        self.session.reset();
        self.open_settings();
    }

    /// Text for the clipboard once a quiz is finished.
    pub fn result_to_share(&mut self) -> Option<String> {
        let text = self.session.share_text()?;
        self.message = "Result copied to clipboard".into();
        Some(text)
    }
}
