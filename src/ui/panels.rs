use eframe::egui::{self, Key, RichText, Ui};

use crate::state::{ViewMode, ViewerState};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and, when animating, the playback controls.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(state.title()).strong().size(18.0));
        ui.separator();

        let n = state.frame_count();
        let points = state.current_observation().map_or(0, |obs| obs.len());
        ui.label(format!("observation {} of {n} ({points} points)", state.current + 1));

        if state.mode == ViewMode::Still {
            return;
        }

        ui.separator();

        let play_label = if state.playing { "Pause" } else { "Play" };
        if ui.button(play_label).clicked() {
            state.toggle_playing();
        }
        if ui.button("<").on_hover_text("Previous frame (←)").clicked() {
            state.step_back();
        }
        if ui.button(">").on_hover_text("Next frame (→)").clicked() {
            state.step_forward();
        }

        let mut frame = state.current;
        let last = n.saturating_sub(1);
        if ui
            .add(egui::Slider::new(&mut frame, 0..=last).text("frame"))
            .changed()
        {
            state.set_frame(frame);
        }

        ui.separator();

        if ui
            .selectable_label(state.fixed_axes, "Fixed axes")
            .clicked()
        {
            state.fixed_axes = !state.fixed_axes;
        }
    });
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

/// Space toggles playback, arrows step one frame.
pub fn handle_keys(ctx: &egui::Context, state: &mut ViewerState) {
    if state.mode == ViewMode::Still {
        return;
    }
    let (space, left, right) = ctx.input(|i| {
        (
            i.key_pressed(Key::Space),
            i.key_pressed(Key::ArrowLeft),
            i.key_pressed(Key::ArrowRight),
        )
    });
    if space {
        state.toggle_playing();
    }
    if left {
        state.step_back();
    }
    if right {
        state.step_forward();
    }
}
