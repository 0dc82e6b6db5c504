pub mod history;
pub mod home;
pub mod quiz;
pub mod settings;
pub mod summary;
