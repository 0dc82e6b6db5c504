use thiserror::Error;

use crate::model::Phase;

/// Failures coming out of the trivia service boundary.
///
/// These travel unchanged into the session's `Failed` phase; `Display` is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriviaError {
    #[error("Could not reach the trivia service: {0}")]
    Network(String),

    #[error("The trivia service sent a response that could not be read: {0}")]
    Decode(String),

    #[error("No questions available for the selected criteria. Please try different settings.")]
    NoResults,

    #[error("Invalid parameters. Please check your quiz settings.")]
    InvalidParameter,

    #[error("Session token expired. Please try again.")]
    SessionExpired,

    #[error(
        "All questions for the selected criteria have been used. Please try different settings."
    )]
    ResultsExhausted,

    #[error("The trivia service answered with unknown status code {0}.")]
    UnknownApi(i64),
}

/// Contract violations on the session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("`{operation}` is not valid while the session is {phase:?}")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },

    #[error("`next_question` called before the current question was answered")]
    NotAnswered,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("amount must be between {min} and {max}, got {got}")]
    AmountOutOfRange { got: u32, min: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type TriviaResult<T> = std::result::Result<T, TriviaError>;
