use super::error::VolumeError;
use super::model::{Observation, Sample, TimeSeries};
use super::volume::VolumeSource;

/// Spatial coordinate plotted on the x axis.
pub const DEFAULT_COORDINATE: &str = "InertialCoordinates_x";

/// Grid datasets that are never worth plotting.
const CONNECTIVITY: &str = "connectivity";
const LEGACY_COORDINATE: &str = "x-coord";
const COORDINATE_PREFIX: &str = "InertialCoordinates";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Gather `variable` against `coordinate` for every observation.
///
/// Observation ids come from the first source and are ordered by their
/// observation value. Each observation concatenates the grids of every
/// source, then sorts the samples by coordinate.
pub fn load_time_series<S: VolumeSource>(
    sources: &[S],
    variable: &str,
    coordinate: &str,
) -> Result<TimeSeries, VolumeError> {
    let first = sources.first().ok_or_else(|| VolumeError::NoFilesFound {
        pattern: String::new(),
    })?;

    let mut ids_and_times = first
        .observation_ids()?
        .into_iter()
        .map(|id| {
            let time = first.observation_value(&id)?;
            Ok((id, time))
        })
        .collect::<Result<Vec<_>, VolumeError>>()?;
    if ids_and_times.is_empty() {
        return Err(VolumeError::NoObservations {
            path: first.label().to_string(),
        });
    }
    ids_and_times.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut observations = Vec::with_capacity(ids_and_times.len());
    for (id, time) in ids_and_times {
        let mut samples = Vec::new();
        for source in sources {
            gather_samples(source, &id, variable, coordinate, &mut samples)?;
        }
        log::debug!("{id} (t = {time}): {} samples", samples.len());
        observations.push(Observation::from_samples(id, time, samples));
    }

    Ok(TimeSeries::new(variable, observations))
}

/// Names of the plottable components of the first grid of the first observation.
pub fn list_variables<S: VolumeSource>(source: &S, coordinate: &str) -> Result<Vec<String>, VolumeError> {
    let observation = source
        .observation_ids()?
        .into_iter()
        .next()
        .ok_or_else(|| VolumeError::NoObservations {
            path: source.label().to_string(),
        })?;
    let grid = source
        .grid_names(&observation)?
        .into_iter()
        .next()
        .ok_or_else(|| VolumeError::NoGrids {
            path: source.label().to_string(),
            observation: observation.clone(),
        })?;

    let mut names = source.component_names(&observation, &grid)?;
    names.retain(|name| {
        name != CONNECTIVITY
            && name != LEGACY_COORDINATE
            && name != coordinate
            && !name.starts_with(COORDINATE_PREFIX)
    });
    Ok(names)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn gather_samples<S: VolumeSource>(
    source: &S,
    observation: &str,
    variable: &str,
    coordinate: &str,
    samples: &mut Vec<Sample>,
) -> Result<(), VolumeError> {
    for grid in source.grid_names(observation)? {
        let values = source.tensor_component(observation, &grid, variable)?;
        let coords = source.tensor_component(observation, &grid, coordinate)?;

        if coords.len() != values.len() {
            return Err(VolumeError::LengthMismatch {
                path: source.label().to_string(),
                observation: observation.to_string(),
                grid,
                coordinates: coords.len(),
                values: values.len(),
            });
        }

        samples.extend(
            coords
                .into_iter()
                .zip(values)
                .map(|(x, value)| Sample { x, value }),
        );
    }
    Ok(())
}
