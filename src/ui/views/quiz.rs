use crate::app::TriviaApp;
use crate::model::Phase;
use crate::ui::helpers::answer_button;
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::option_letter;
use egui::{Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_quiz(app: &mut TriviaApp, ctx: &Context) {
    match app.session.phase() {
        Phase::Loading => ui_loading(ctx),
        Phase::Failed => ui_failed(app, ctx),
        Phase::Playing => ui_question(app, ctx),
        // Nothing to show; the quiz was left or already finished.
        Phase::Idle => app.open_settings(),
        Phase::Finished => app.screen = crate::model::Screen::Summary,
    }
}

fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 120.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label("Loading questions...");
        });
    });
}

fn ui_failed(app: &mut TriviaApp, ctx: &Context) {
    let message = app
        .session
        .error_message()
        .unwrap_or_else(|| "Something went wrong.".to_owned());
    centered_panel(ctx, 200.0, 480.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("😕 Could not load the quiz");
            ui.add_space(10.0);
            ui.colored_label(egui::Color32::from_rgb(218, 54, 51), message);
            ui.add_space(14.0);
        });
        let (retry, back) = two_button_row(ui, width, "Try again", "Back to settings");
        if retry {
            app.try_again();
        }
        if back {
            app.new_quiz_settings();
        }
    });
}

fn ui_question(app: &mut TriviaApp, ctx: &Context) {
    let Some(view) = app.session.current_question_view() else {
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.horizontal(|ui| {
                        ui.strong(format!("Question {} of {}", view.number, view.total));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(format!("Score: {}", view.score));
                        });
                    });
                    ui.add(ProgressBar::new(view.progress()).desired_width(panel_width));
                    ui.add_space(10.0);

                    ui.label(
                        RichText::new(format!("{} · {}", view.category, view.difficulty)).weak(),
                    );
                    ui.add_space(4.0);
                    ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                        ui.label(RichText::new(&view.text).heading());
                    });
                    ui.add_space(12.0);

                    let mut picked = None;
                    for (index, (answer, state)) in view.answers.iter().enumerate() {
                        if answer_button(ui, option_letter(index), answer, *state, panel_width) {
                            picked = Some(answer.clone());
                        }
                        ui.add_space(4.0);
                    }
                    if let Some(answer) = picked {
                        app.answer(&answer);
                    }

                    if view.answered {
                        ui.add_space(10.0);
                        ui.vertical_centered(|ui| {
                            let next = ui.add_sized(
                                [panel_width / 2.0, 36.0],
                                Button::new(view.next_label()),
                            );
                            if next.clicked() {
                                app.advance();
                            }
                        });
                    }

                    if !app.message.is_empty() {
                        ui.add_space(8.0);
                        ui.label(&app.message);
                    }
                });
        });
    });
}
