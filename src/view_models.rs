// src/view_models.rs

use crate::model::{Category, Difficulty, HistoryRecord};

/// How an answer button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerState {
    /// Not answered yet; every option is clickable.
    Open,
    /// The right answer, revealed once the question is answered.
    Correct,
    /// What the user picked, and it was wrong.
    WrongPick,
    /// Any other option after answering.
    Dimmed,
}

impl AnswerState {
    pub fn for_answer(answer: &str, correct: &str, selected: Option<&str>) -> Self {
        match selected {
            None => AnswerState::Open,
            Some(_) if answer == correct => AnswerState::Correct,
            Some(picked) if picked == answer => AnswerState::WrongPick,
            Some(_) => AnswerState::Dimmed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub text: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub answers: Vec<(String, AnswerState)>,
    pub answered: bool,
    pub is_last: bool,
    pub score: usize,
}

impl QuestionView {
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.number as f32 / self.total as f32
        }
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last {
            "Finish quiz"
        } else {
            "Next question"
        }
    }
}

/// "A", "B", ... for the answer at `index`.
pub fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Categories whose name contains `term`, ignoring case. An empty term keeps all.
pub fn filter_categories<'a>(categories: &'a [Category], term: &str) -> Vec<&'a Category> {
    let term = term.trim().to_lowercase();
    categories
        .iter()
        .filter(|c| term.is_empty() || c.name.to_lowercase().contains(&term))
        .collect()
}

impl HistoryRecord {
    pub fn score_label(&self) -> String {
        format!(
            "{}/{} ({}%)",
            self.score, self.total_questions, self.score_percentage
        )
    }

    pub fn date_label(&self) -> String {
        self.recorded_at.format("%b %-d, %Y %H:%M").to_string()
    }
}
