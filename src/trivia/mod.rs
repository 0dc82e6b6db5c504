//! Client side of the Open Trivia DB service.

pub mod client;
pub mod text;
pub mod wire;

pub use client::{OpenTdbClient, TriviaSource};
pub use text::{decode_entities, shuffle, shuffle_with};
pub use wire::{RawQuestion, parse_categories, parse_questions};
