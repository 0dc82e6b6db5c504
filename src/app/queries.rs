use super::*;
use crate::history::HistoryStats;
use crate::model::{HistoryRecord, Phase};

impl TriviaApp {
    /// Whether the settings screen may start a quiz right now.
    pub fn can_start(&self) -> bool {
        if self.is_loading_questions() || self.form.to_settings().is_err() {
            return false;
        }
        // A search that matches nothing leaves nothing to pick.
        let searching = !self.form.category_search.trim().is_empty();
        !(searching
            && matches!(self.categories, CategoryState::Loaded(_))
            && self.visible_categories().is_empty())
    }

    pub fn history_records(&self) -> Vec<&HistoryRecord> {
        self.history_query.apply(self.session.history().list())
    }

    pub fn history_stats(&self) -> Option<HistoryStats> {
        HistoryStats::from_records(self.session.history().list())
    }

    pub fn correct_count(&self) -> usize {
        self.session.score()
    }

    pub fn incorrect_count(&self) -> usize {
        match self.session.phase() {
            Phase::Finished => self.session.total_questions() - self.session.score(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{app_with, settle};
    use crate::history::HistorySort;

    fn finished(app: &mut TriviaApp, amount: u32, right: usize) {
        app.form.amount = amount;
        app.start_quiz();
        settle(app);
        for n in 1..=amount as usize {
            let pick = if n <= right { format!("Right {n}") } else { format!("Wrong {n}b") };
            app.answer(&pick);
            app.advance();
        }
    }

    #[test]
    fn cannot_start_when_the_search_matches_nothing() {
        let mut app = app_with(None);
        app.ensure_categories();
        settle(&mut app);
        assert!(app.can_start());
        app.form.category_search = "zzz".into();
        assert!(!app.can_start());
    }

    #[test]
    fn summary_counts_split_the_total() {
        let mut app = app_with(None);
        finished(&mut app, 4, 3);
        assert_eq!(app.correct_count(), 3);
        assert_eq!(app.incorrect_count(), 1);
    }

    #[test]
    fn history_view_uses_the_query() {
        let mut app = app_with(None);
        finished(&mut app, 4, 1);
        finished(&mut app, 4, 4);
        finished(&mut app, 2, 1);

        app.history_query.sort = HistorySort::Percentage;
        let percentages: Vec<_> = app.history_records().iter().map(|r| r.score_percentage).collect();
        assert_eq!(percentages, vec![100, 50, 25]);

        app.history_query.search = "25".into();
        assert_eq!(app.history_records().len(), 1);

        let stats = app.history_stats().expect("three quizzes");
        assert_eq!(stats.total_quizzes, 3);
        assert_eq!(stats.perfect_scores, 1);
    }
}
