use std::time::Duration;

use eframe::egui;

use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct Render1dApp {
    pub state: ViewerState,
}

impl Render1dApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for Render1dApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::handle_keys(ctx, &mut self.state);

        let now = ctx.input(|i| i.time);
        self.state.tick(now);
        if self.state.playing {
            ctx.request_repaint_after(Duration::from_secs_f64(self.state.interval));
        }

        // ---- Top panel: title and playback ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::observation_plot(ui, &self.state);
        });
    }
}
