use crate::app::TriviaApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_home(app: &mut TriviaApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 540.0, |ui| {
        let content_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("🧠 Welcome to Trivia Quiz!");
            ui.add_space(12.0);
            ui.label("Test your knowledge with questions from Open Trivia DB.");
            ui.label("Pick a category and a difficulty, then see how many you get right.");
            ui.add_space(18.0);

            let btn_w = (content_width * 0.8).clamp(120.0, 360.0);
            if big_button(ui, "▶ Start quiz", btn_w, 40.0, true) {
                app.open_settings();
            }
            ui.add_space(5.0);
            if big_button(ui, "📜 History", btn_w, 40.0, true) {
                app.show_history();
            }

            let played = app.session.history().len();
            if played > 0 {
                ui.add_space(12.0);
                ui.label(RichText::new(format!("Quizzes played so far: {played}")).weak());
            }

            // Exiting only makes sense for the desktop window.
            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.add_space(5.0);
                if big_button(ui, "Quit", btn_w, 40.0, true) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        });
    });
}
