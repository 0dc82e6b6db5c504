// src/ui/helpers.rs
use crate::model::PerformanceTier;
use crate::view_models::AnswerState;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn tier_color(tier: PerformanceTier) -> Color32 {
    match tier {
        PerformanceTier::Excellent | PerformanceTier::Great => Color32::from_rgb(46, 160, 67),
        PerformanceTier::Good | PerformanceTier::NotBad => Color32::from_rgb(210, 153, 34),
        PerformanceTier::OnTrack | PerformanceTier::NeedsPractice => Color32::from_rgb(218, 54, 51),
    }
}

/// One answer option; clickable only while the question is open.
pub fn answer_button(ui: &mut Ui, letter: char, answer: &str, state: AnswerState, width: f32) -> bool {
    let (fill, suffix) = match state {
        AnswerState::Open => (None, ""),
        AnswerState::Correct => (Some(Color32::from_rgb(46, 160, 67)), "  ✔"),
        AnswerState::WrongPick => (Some(Color32::from_rgb(218, 54, 51)), "  ✖"),
        AnswerState::Dimmed => (None, ""),
    };
    let mut text = RichText::new(format!("{letter}.  {answer}{suffix}"));
    if fill.is_some() {
        text = text.color(Color32::WHITE).strong();
    }
    let mut button = Button::new(text).min_size(Vec2::new(width, 40.0)).wrap();
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add_enabled(state == AnswerState::Open || fill.is_some(), button)
        .clicked()
        && state == AnswerState::Open
}
