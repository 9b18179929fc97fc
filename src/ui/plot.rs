use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Observation plot (central panel)
// ---------------------------------------------------------------------------

/// Render the displayed observation as a scatter plot.
pub fn observation_plot(ui: &mut Ui, state: &ViewerState) {
    let observation = match state.current_observation() {
        Some(obs) => obs,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No observations to show");
            });
            return;
        }
    };

    let variable = state.series.variable.as_str();
    let bounds = state.bounds;
    let fixed_axes = state.fixed_axes_active();

    let points: PlotPoints = observation
        .samples()
        .map(|s| [s.x, s.value])
        .collect();

    Plot::new("observation_plot")
        .x_axis_label("x")
        .y_axis_label(variable)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Frames must not rescale the axes while animating.
            if fixed_axes {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [bounds.x_min, bounds.y_min],
                    [bounds.x_max, bounds.y_max],
                ));
            }

            let markers = Points::new(points)
                .name(variable)
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(3.0)
                .color(Color32::LIGHT_BLUE);

            plot_ui.points(markers);
        });
}
