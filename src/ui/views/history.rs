use crate::app::TriviaApp;
use crate::history::{HistorySort, HistoryStats};
use crate::ui::helpers::tier_color;
use egui::{CentralPanel, ComboBox, Context, Grid, RichText, ScrollArea, TextEdit};

pub fn ui_history(app: &mut TriviaApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);
                    ui.heading("📜 Quiz history");
                    ui.add_space(10.0);

                    let Some(stats) = app.history_stats() else {
                        ui.label("No quizzes yet. Finish one and it will show up here.");
                        return;
                    };
                    stats_grid(ui, &stats);
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        ui.add(
                            TextEdit::singleline(&mut app.history_query.search)
                                .hint_text("🔍 Search scores")
                                .desired_width(panel_width / 2.0),
                        );
                        ComboBox::from_id_salt("history_sort")
                            .selected_text(app.history_query.sort.label())
                            .show_ui(ui, |ui| {
                                for sort in HistorySort::ALL {
                                    ui.selectable_value(&mut app.history_query.sort, sort, sort.label());
                                }
                            });
                        if ui.button("🗑 Clear history").clicked() {
                            app.confirm_clear_history = true;
                        }
                    });
                    ui.add_space(8.0);

                    let rows: Vec<_> = app.history_records().into_iter().cloned().collect();
                    if rows.is_empty() {
                        ui.label("Nothing matches that search.");
                    }
                    ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                        for record in &rows {
                            let tier = record.tier();
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(tier.emoji()).size(20.0));
                                ui.label(
                                    RichText::new(record.score_label())
                                        .strong()
                                        .color(tier_color(tier)),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(RichText::new(record.date_label()).weak());
                                    },
                                );
                            });
                            ui.separator();
                        }
                    });

                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
        });
    });
}

fn stats_grid(ui: &mut egui::Ui, stats: &HistoryStats) {
    Grid::new("history_stats")
        .num_columns(4)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label("Quizzes");
            ui.label("Average");
            ui.label("Best");
            ui.label("Perfect");
            ui.end_row();

            ui.strong(stats.total_quizzes.to_string());
            ui.strong(format!("{}%", stats.average_percentage));
            ui.strong(format!("{}%", stats.best_percentage));
            ui.strong(stats.perfect_scores.to_string());
            ui.end_row();
        });
    ui.label(
        RichText::new(format!(
            "{} of {} questions answered correctly, {} per quiz on average",
            stats.total_score, stats.total_questions, stats.average_score
        ))
        .weak(),
    );
}
