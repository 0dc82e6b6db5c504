use crate::config::{AppConfig, SettingsDefaults};
use crate::error::{ConfigError, SettingsError, TriviaResult};
use crate::history::{HistoryQuery, HistoryStore};
use crate::model::{Category, CategoryChoice, DifficultyChoice, QuizSettings, Screen};
use crate::session::{LoadTicket, QuizSession};
use crate::trivia::{OpenTdbClient, RawQuestion};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

// Submodules
pub mod actions;
pub mod categories;
pub mod loading;
pub mod queries;
pub mod resets;

/// Where questions and categories come from. Natively the fetch runs on a
/// worker thread, so the source has to be shareable across threads.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedSource = std::sync::Arc<dyn crate::trivia::TriviaSource + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type SharedSource = std::rc::Rc<OpenTdbClient>;

/// What the settings screen is editing. Remembered between runs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub amount: u32,
    pub category: CategoryChoice,
    pub difficulty: DifficultyChoice,
    #[serde(skip)]
    pub category_search: String,
}

impl SettingsForm {
    pub fn from_defaults(defaults: &SettingsDefaults) -> Self {
        Self {
            amount: defaults.amount,
            category: defaults.category,
            difficulty: defaults.difficulty,
            category_search: String::new(),
        }
    }

    pub fn to_settings(&self) -> Result<QuizSettings, SettingsError> {
        QuizSettings::new(self.amount, self.category, self.difficulty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<Category>),
    Failed(String),
}

/// A question fetch in flight, tagged with the ticket it must be delivered with.
pub struct PendingLoad {
    pub ticket: LoadTicket,
    pub rx: Receiver<TriviaResult<Vec<RawQuestion>>>,
}

pub struct TriviaApp {
    pub config: AppConfig,
    pub source: Option<SharedSource>,
    pub session: QuizSession,
    pub screen: Screen,
    pub form: SettingsForm,
    /// Settings of the last started quiz, for "Try again".
    pub last_settings: Option<QuizSettings>,
    pub categories: CategoryState,
    pub category_rx: Option<Receiver<TriviaResult<Vec<Category>>>>,
    pub pending_load: Option<PendingLoad>,
    pub history_query: HistoryQuery,
    pub confirm_clear_history: bool,
    pub message: String,
    /// Woken when a background fetch delivers; unset in tests.
    pub repaint: Option<egui::Context>,
}

impl TriviaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, ConfigError> {
        let config = match AppConfig::load() {
            Ok(config) => config,
            Err(err) => {
                log::error!("bad configuration, falling back to built-in defaults: {err}");
                crate::data::read_default_config()?
            }
        };

        let source = match OpenTdbClient::new(config.api.clone()) {
            Ok(client) => Some(share(client)),
            Err(err) => {
                log::error!("could not build the trivia client: {err}");
                None
            }
        };

        let history = open_history(&config);
        let mut app = Self::with_parts(config, source, history);
        app.repaint = Some(cc.egui_ctx.clone());

        if let Some(form) = cc
            .storage
            .and_then(|storage| eframe::get_value::<SettingsForm>(storage, eframe::APP_KEY))
        {
            log::debug!("restored settings form {form:?}");
            app.form = form;
        }
        Ok(app)
    }

    /// Everything but the eframe wiring; `source` may be missing if the HTTP
    /// client could not be built.
    pub fn with_parts(config: AppConfig, source: Option<SharedSource>, history: HistoryStore) -> Self {
        let form = SettingsForm::from_defaults(&config.defaults);
        Self {
            config,
            source,
            session: QuizSession::new(history),
            screen: Screen::Home,
            form,
            last_settings: None,
            categories: CategoryState::NotLoaded,
            category_rx: None,
            pending_load: None,
            history_query: HistoryQuery::default(),
            confirm_clear_history: false,
            message: String::new(),
            repaint: None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn share(client: OpenTdbClient) -> SharedSource {
    std::sync::Arc::new(client)
}

#[cfg(target_arch = "wasm32")]
fn share(client: OpenTdbClient) -> SharedSource {
    std::rc::Rc::new(client)
}

#[cfg(not(target_arch = "wasm32"))]
fn open_history(config: &AppConfig) -> HistoryStore {
    let backend = crate::history::FileBackend::new(&config.history.directory);
    HistoryStore::open(Box::new(backend), config.history.storage_key.clone())
}

#[cfg(target_arch = "wasm32")]
fn open_history(config: &AppConfig) -> HistoryStore {
    HistoryStore::open(
        Box::new(crate::history::LocalStorageBackend),
        config.history.storage_key.clone(),
    )
}
