use super::*;
use crate::error::TriviaError;
use crate::model::Phase;
use crate::session::LoadOutcome;
use std::sync::mpsc::{self, TryRecvError};
#[cfg(not(target_arch = "wasm32"))]
use crate::trivia::TriviaSource;

impl TriviaApp {
    /// Starts a quiz with the settings form as it stands.
    pub fn start_quiz(&mut self) {
        match self.form.to_settings() {
            Ok(settings) => self.start_quiz_with(settings),
            Err(err) => {
                log::warn!("refusing to start: {err}");
                self.message = err.to_string();
            }
        }
    }

    /// Moves the session to `Loading` and fetches questions in the background.
    /// A quiz that is finished or still running is discarded first.
    pub fn start_quiz_with(&mut self, settings: QuizSettings) {
        if !matches!(self.session.phase(), Phase::Idle | Phase::Failed) {
            self.session.reset();
        }
        self.pending_load = None;

        let ticket = match self.session.begin_start(settings.clone()) {
            Ok(ticket) => ticket,
            Err(err) => {
                self.message = err.to_string();
                return;
            }
        };
        self.last_settings = Some(settings);
        self.message.clear();
        self.screen = Screen::Quiz;

        let Some(source) = self.source.clone() else {
            self.session.complete_start(
                ticket,
                Err(TriviaError::Network("the HTTP client is not available".into())),
            );
            return;
        };
        let rx = spawn_question_fetch(source, ticket.settings().clone(), self.repaint.clone());
        self.pending_load = Some(PendingLoad { ticket, rx });
    }

    /// Called every frame: hands finished background fetches to their owners.
    pub fn poll_background(&mut self) {
        self.poll_question_load();
        self.poll_categories();
    }

    fn poll_question_load(&mut self) {
        let Some(pending) = self.pending_load.take() else {
            return;
        };
        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => {
                self.pending_load = Some(pending);
                return;
            }
            Err(TryRecvError::Disconnected) => Err(TriviaError::Network(
                "the question fetch stopped before answering".into(),
            )),
        };

        match self.session.complete_start(pending.ticket, result) {
            LoadOutcome::Ready(count) => log::debug!("showing {count} questions"),
            LoadOutcome::Failed(err) => log::warn!("quiz could not start: {err}"),
            LoadOutcome::Stale => {}
        }
    }

    pub fn is_loading_questions(&self) -> bool {
        self.pending_load.is_some()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_question_fetch(
    source: SharedSource,
    settings: QuizSettings,
    repaint: Option<egui::Context>,
) -> Receiver<TriviaResult<Vec<RawQuestion>>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(source.fetch_questions(&settings));
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    });
    rx
}

#[cfg(target_arch = "wasm32")]
fn spawn_question_fetch(
    source: SharedSource,
    settings: QuizSettings,
    repaint: Option<egui::Context>,
) -> Receiver<TriviaResult<Vec<RawQuestion>>> {
    let (tx, rx) = mpsc::channel();
    wasm_bindgen_futures::spawn_local(async move {
        let result = source.fetch_questions_async(&settings).await;
        let _ = tx.send(result);
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{app_with, settle};

    #[test]
    fn start_fetches_in_the_background_then_plays() {
        let mut app = app_with(None);
        app.form.amount = 5;
        app.start_quiz();
        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.session.phase(), Phase::Loading);

        settle(&mut app);
        assert_eq!(app.session.phase(), Phase::Playing);
        assert_eq!(app.session.total_questions(), 5);
        assert_eq!(app.last_settings.as_ref().map(QuizSettings::amount), Some(5));
    }

    #[test]
    fn failed_fetch_leaves_the_error_on_the_session() {
        let mut app = app_with(Some(TriviaError::NoResults));
        app.start_quiz();
        settle(&mut app);
        assert_eq!(app.session.phase(), Phase::Failed);
        assert_eq!(
            app.session.error_message().as_deref(),
            Some("No questions available for the selected criteria. Please try different settings.")
        );
    }

    #[test]
    fn invalid_form_does_not_start() {
        let mut app = app_with(None);
        app.form.amount = 99;
        app.start_quiz();
        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(!app.message.is_empty());
        assert!(!app.is_loading_questions());
    }

    #[test]
    fn missing_client_fails_immediately() {
        let config = crate::data::read_default_config().expect("config");
        let mut app = TriviaApp::with_parts(config, None, HistoryStore::in_memory());
        app.start_quiz();
        assert_eq!(app.session.phase(), Phase::Failed);
        assert!(matches!(app.session.error(), Some(TriviaError::Network(_))));
    }

    #[test]
    fn starting_over_a_running_quiz_discards_it() {
        let mut app = app_with(None);
        app.form.amount = 3;
        app.start_quiz();
        settle(&mut app);
        app.session.select_answer("Right 1").expect("playing");

        app.form.amount = 4;
        app.start_quiz();
        settle(&mut app);
        assert_eq!(app.session.total_questions(), 4);
        assert_eq!(app.session.score(), 0);
        assert!(app.session.history().is_empty());
    }
}
