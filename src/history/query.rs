use serde::{Deserialize, Serialize};

use crate::model::HistoryRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistorySort {
    #[default]
    Date,
    Score,
    Percentage,
}

impl HistorySort {
    pub const ALL: [HistorySort; 3] = [HistorySort::Date, HistorySort::Score, HistorySort::Percentage];

    pub fn label(self) -> &'static str {
        match self {
            HistorySort::Date => "Sort by date",
            HistorySort::Score => "Sort by score",
            HistorySort::Percentage => "Sort by percentage",
        }
    }
}

/// What the history screen shows: a search filter plus a sort order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub search: String,
    pub sort: HistorySort,
}

impl HistoryQuery {
    /// Records matching the search, best/newest first. A record matches when
    /// its score, total, or percentage contains the search text.
    pub fn apply<'a>(&self, records: &'a [HistoryRecord]) -> Vec<&'a HistoryRecord> {
        let term = self.search.trim();
        let mut matching: Vec<&HistoryRecord> = records
            .iter()
            .filter(|r| {
                term.is_empty()
                    || r.score.to_string().contains(term)
                    || r.total_questions.to_string().contains(term)
                    || r.score_percentage.to_string().contains(term)
            })
            .collect();

        match self.sort {
            HistorySort::Date => matching.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at)),
            HistorySort::Score => matching.sort_by(|a, b| b.score.cmp(&a.score)),
            HistorySort::Percentage => {
                matching.sort_by(|a, b| b.score_percentage.cmp(&a.score_percentage))
            }
        }
        matching
    }
}

/// Aggregates shown above the history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_quizzes: usize,
    pub total_score: usize,
    pub total_questions: usize,
    pub average_score: usize,
    pub average_percentage: u8,
    pub best_score: usize,
    pub best_percentage: u8,
    pub perfect_scores: usize,
}

impl HistoryStats {
    pub fn from_records(records: &[HistoryRecord]) -> Option<Self> {
        let count = records.len();
        if count == 0 {
            return None;
        }
        let total_score: usize = records.iter().map(|r| r.score).sum();
        let total_questions = records.iter().map(|r| r.total_questions).sum();
        let percentage_sum: usize = records.iter().map(|r| r.score_percentage as usize).sum();

        Some(Self {
            total_quizzes: count,
            total_score,
            total_questions,
            average_score: rounded_div(total_score, count),
            average_percentage: rounded_div(percentage_sum, count) as u8,
            best_score: records.iter().map(|r| r.score).max().unwrap_or(0),
            best_percentage: records.iter().map(|r| r.score_percentage).max().unwrap_or(0),
            perfect_scores: records.iter().filter(|r| r.score_percentage == 100).count(),
        })
    }
}

fn rounded_div(sum: usize, count: usize) -> usize {
    (2 * sum + count) / (2 * count)
}
