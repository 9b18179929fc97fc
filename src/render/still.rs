use std::path::Path;

use plotters::prelude::*;

use super::chart::{STILL_MARGIN, draw_observation, render_rgb};
use super::{RenderError, StillFormat, draw_error};
use crate::data::model::Observation;

/// Write a single observation to `path`, autoscaled to its own data.
pub fn save_still(
    observation: &Observation,
    variable: &str,
    path: &Path,
    format: StillFormat,
    size: (u32, u32),
) -> Result<(), RenderError> {
    let bounds = observation.bounds().with_margin(STILL_MARGIN);

    match format {
        StillFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_observation(&root, observation, variable, bounds)?;
            root.present().map_err(draw_error)?;
        }
        StillFormat::Png => {
            let buffer = render_rgb(observation, variable, bounds, size)?;
            let image = image::RgbImage::from_raw(size.0, size.1, buffer)
                .ok_or_else(|| RenderError::Draw("frame buffer does not match image size".into()))?;
            image.save(path)?;
        }
    }
    Ok(())
}
