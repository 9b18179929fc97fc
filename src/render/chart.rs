use plotters::coord::Shift;
use plotters::prelude::*;

use super::{RenderError, draw_error};
use crate::data::model::{Bounds, Observation, TimeSeries};

/// Relative padding around a still, so edge markers stay whole.
pub const STILL_MARGIN: f64 = 0.05;

/// Relative padding around every animation frame.
pub const ANIMATION_MARGIN: f64 = 0.02;

const MARKER_RADIUS: i32 = 3;

/// Caption of a frame.
pub fn frame_title(time: f64) -> String {
    format!("t = {time:.5}")
}

/// Axis limits shared by all frames of an animation.
pub fn animation_bounds(series: &TimeSeries) -> Bounds {
    series.bounds().with_margin(ANIMATION_MARGIN)
}

/// Draw one observation as a scatter plot filling `root`.
pub fn draw_observation<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    observation: &Observation,
    variable: &str,
    bounds: Bounds,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(frame_title(observation.time), ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc(variable)
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(
            observation
                .samples()
                .filter(|s| s.x.is_finite() && s.value.is_finite())
                .map(|s| Circle::new((s.x, s.value), MARKER_RADIUS, BLUE.filled())),
        )
        .map_err(draw_error)?;

    Ok(())
}

/// Draw one observation into a packed RGB buffer of `size`.
pub fn render_rgb(
    observation: &Observation,
    variable: &str,
    bounds: Bounds,
    size: (u32, u32),
) -> Result<Vec<u8>, RenderError> {
    let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        draw_observation(&root, observation, variable, bounds)?;
        root.present().map_err(draw_error)?;
    }
    Ok(buffer)
}
