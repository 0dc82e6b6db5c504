use crate::app::{CategoryState, TriviaApp};
use crate::model::{CategoryChoice, Difficulty, DifficultyChoice, MAX_AMOUNT, MIN_AMOUNT};
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{ComboBox, Context, RichText, Slider, TextEdit};

pub fn ui_settings(app: &mut TriviaApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 520.0, |ui| {
        let content_width = ui.available_width();
        ui.heading("⚙ Quiz settings");
        ui.add_space(12.0);

        // Amount
        ui.label("Number of questions");
        ui.add(
            Slider::new(&mut app.form.amount, 5..=30)
                .step_by(5.0)
                .clamping(egui::SliderClamping::Always),
        );
        app.form.amount = app.form.amount.clamp(MIN_AMOUNT, MAX_AMOUNT);
        ui.add_space(10.0);

        // Difficulty
        ui.label("Difficulty");
        ui.horizontal(|ui| {
            let choices = std::iter::once(DifficultyChoice::Any)
                .chain(Difficulty::ALL.into_iter().map(DifficultyChoice::Only));
            for choice in choices {
                ui.selectable_value(&mut app.form.difficulty, choice, choice.label());
            }
        });
        ui.add_space(10.0);

        // Category
        ui.label("Category");
        match app.categories.clone() {
            CategoryState::NotLoaded | CategoryState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading categories...");
                });
            }
            CategoryState::Failed(err) => {
                ui.colored_label(egui::Color32::from_rgb(218, 54, 51), err);
                if ui.button("Try again").clicked() {
                    app.load_categories();
                }
            }
            CategoryState::Loaded(_) => category_picker(app, ui, content_width),
        }

        ui.add_space(18.0);
        ui.vertical_centered(|ui| {
            let btn_w = (content_width * 0.6).clamp(120.0, 300.0);
            if big_button(ui, "▶ Start quiz", btn_w, 40.0, app.can_start()) {
                app.start_quiz();
            }
            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}

fn category_picker(app: &mut TriviaApp, ui: &mut egui::Ui, width: f32) {
    ui.add(
        TextEdit::singleline(&mut app.form.category_search)
            .hint_text("🔍 Search categories")
            .desired_width(width),
    );

    let visible: Vec<(u32, String)> = app
        .visible_categories()
        .into_iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();
    if visible.is_empty() {
        ui.label(RichText::new("No category matches that search.").weak());
        return;
    }

    let selected = app.category_label(app.form.category);
    ComboBox::from_id_salt("category_combo")
        .width(width)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut app.form.category, CategoryChoice::Any, "Any category");
            for (id, name) in visible {
                ui.selectable_value(&mut app.form.category, CategoryChoice::Id(id), name);
            }
        });
}
