pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod history;
pub mod model;
pub mod session;
pub mod trivia;
pub mod ui;
pub mod view_models;

pub use app::TriviaApp;
