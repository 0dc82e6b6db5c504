use crate::app::TriviaApp;
use crate::model::Screen;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut TriviaApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("🧠 Trivia Quiz");
            ui.separator();

            if ui
                .selectable_label(app.screen == Screen::Home, "Home")
                .clicked()
            {
                app.go_home();
            }
            if ui
                .selectable_label(
                    matches!(app.screen, Screen::Settings | Screen::Quiz | Screen::Summary),
                    "New quiz",
                )
                .clicked()
            {
                app.new_quiz_settings();
            }
            if ui
                .selectable_label(app.screen == Screen::History, "History")
                .clicked()
            {
                app.show_history();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centred both ways, at most `max_width` wide.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Two equally wide buttons, centred in `panel_width`.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}
