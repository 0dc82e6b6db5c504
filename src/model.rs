use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SettingsError;

pub const MIN_AMOUNT: u32 = 1;
pub const MAX_AMOUNT: u32 = 50;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question as held by a running session. Text is already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
}

impl Question {
    /// Correct answer first, then the incorrect ones in wire order.
    pub fn all_answers(&self) -> Vec<String> {
        std::iter::once(self.correct_answer.clone())
            .chain(self.incorrect_answers.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryChoice {
    #[default]
    Any,
    Id(u32),
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DifficultyChoice {
    #[default]
    Any,
    Only(Difficulty),
}

impl DifficultyChoice {
    pub fn label(self) -> &'static str {
        match self {
            DifficultyChoice::Any => "Any difficulty",
            DifficultyChoice::Only(Difficulty::Easy) => "Easy",
            DifficultyChoice::Only(Difficulty::Medium) => "Medium",
            DifficultyChoice::Only(Difficulty::Hard) => "Hard",
        }
    }
}

/// Validated settings for one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    amount: u32,
    category: CategoryChoice,
    difficulty: DifficultyChoice,
}

impl QuizSettings {
    pub fn new(
        amount: u32,
        category: CategoryChoice,
        difficulty: DifficultyChoice,
    ) -> Result<Self, SettingsError> {
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
            return Err(SettingsError::AmountOutOfRange {
                got: amount,
                min: MIN_AMOUNT,
                max: MAX_AMOUNT,
            });
        }
        Ok(Self {
            amount,
            category,
            difficulty,
        })
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn category(&self) -> CategoryChoice {
        self.category
    }

    pub fn difficulty(&self) -> DifficultyChoice {
        self.difficulty
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Playing,
    Finished,
    Failed,
}

/// Screens of the application.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Settings,
    Quiz,
    Summary,
    History,
}

/// `round(100 * score / total)`, half up, 0 for an empty quiz.
pub fn score_percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total);
    ((200 * score + total) / (2 * total)) as u8
}

/// One finished quiz, as stored in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub score: usize,
    pub total_questions: usize,
    pub score_percentage: u8,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(score: usize, total_questions: usize, recorded_at: DateTime<Utc>) -> Self {
        Self {
            score,
            total_questions,
            score_percentage: score_percentage(score, total_questions),
            recorded_at,
        }
    }

    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_percentage(self.score_percentage)
    }
}

/// Performance bracket for a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PerformanceTier {
    NeedsPractice,
    OnTrack,
    NotBad,
    Good,
    Great,
    Excellent,
}

impl PerformanceTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90..=u8::MAX => PerformanceTier::Excellent,
            80..=89 => PerformanceTier::Great,
            70..=79 => PerformanceTier::Good,
            60..=69 => PerformanceTier::NotBad,
            50..=59 => PerformanceTier::OnTrack,
            _ => PerformanceTier::NeedsPractice,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent! You're a trivia master!",
            PerformanceTier::Great => "Great job! You really know your stuff!",
            PerformanceTier::Good => "Good work! You have solid knowledge!",
            PerformanceTier::NotBad => "Not bad! Keep learning and improving!",
            PerformanceTier::OnTrack => "You're on the right track!",
            PerformanceTier::NeedsPractice => "Keep practicing! You'll get better with time!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "🎉",
            PerformanceTier::Great => "🎊",
            PerformanceTier::Good => "👏",
            PerformanceTier::NotBad => "👍",
            PerformanceTier::OnTrack => "😊",
            PerformanceTier::NeedsPractice => "💪",
        }
    }
}
