use crate::app::TriviaApp;
use crate::ui::helpers::tier_color;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Context, RichText};

pub fn ui_summary(app: &mut TriviaApp, ctx: &Context) {
    let tier = app.session.tier();
    let score = app.session.score();
    let total = app.session.total_questions();
    let percentage = app.session.score_percentage();

    centered_panel(ctx, 360.0, 520.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("Quiz complete!");
            ui.add_space(10.0);
            ui.label(RichText::new(tier.emoji()).size(48.0));
            ui.label(
                RichText::new(format!("{score}/{total}"))
                    .size(36.0)
                    .strong()
                    .color(tier_color(tier)),
            );
            ui.label(format!("{percentage}%"));
            ui.add_space(6.0);
            ui.label(tier.message());
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - 220.0) / 2.0).max(0.0));
                ui.label(format!("✔ Correct: {}", app.correct_count()));
                ui.separator();
                ui.label(format!("✖ Incorrect: {}", app.incorrect_count()));
            });
            ui.add_space(16.0);
        });

        let (again, settings) = two_button_row(ui, width, "🔄 Try again", "⚙ New quiz settings");
        if again {
            app.try_again();
        }
        if settings {
            app.new_quiz_settings();
        }

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if ui.add_sized([width / 2.0, 32.0], Button::new("📋 Copy result")).clicked() {
                if let Some(text) = app.result_to_share() {
                    ui.ctx().copy_text(text);
                }
            }
            if !app.message.is_empty() {
                ui.add_space(6.0);
                ui.label(&app.message);
            }
        });
    });
}
