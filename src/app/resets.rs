use super::*;

impl TriviaApp {
    /// Abandons whatever is running and goes home.
    pub fn go_home(&mut self) {
        self.pending_load = None;
        self.session.reset();
        self.screen = Screen::Home;
        self.message.clear();
    }

    pub fn clear_history(&mut self) {
        self.session.history_mut().clear();
        self.confirm_clear_history = false;
        self.message = "History cleared".into();
    }

    pub fn confirm_clear_history(&mut self, ctx: &egui::Context) {
        egui::Window::new("Clear history")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Delete every saved quiz result? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, clear").clicked() {
                        self.clear_history();
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_clear_history = false;
                    }
                });
            });
    }
}
