mod helpers;
pub mod layout;
pub mod views;

use crate::app::TriviaApp;
use crate::model::Screen;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TriviaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_background();

        top_panel(self, ctx);
        bottom_panel(ctx);

        match self.screen {
            Screen::Home => views::home::ui_home(self, ctx),
            Screen::Settings => views::settings::ui_settings(self, ctx),
            Screen::Quiz => views::quiz::ui_quiz(self, ctx),
            Screen::Summary => views::summary::ui_summary(self, ctx),
            Screen::History => views::history::ui_history(self, ctx),
        }

        if self.confirm_clear_history {
            self.confirm_clear_history(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.form);
    }
}
