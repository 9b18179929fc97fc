use serde::Serialize;

use super::error::VolumeError;

// ---------------------------------------------------------------------------
// Sample – one (coordinate, value) pair
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Observation – one recorded time step
// ---------------------------------------------------------------------------

/// The selected variable at one observation, over the whole domain.
///
/// `x` and `y` are parallel arrays sorted by `x`, ready to hand to a plot.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    #[serde(rename = "observation_id")]
    pub id: String,
    pub time: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Observation {
    /// Sort the samples by coordinate and split them into plot arrays.
    ///
    /// NaN coordinates sort last.
    pub fn from_samples(id: impl Into<String>, time: f64, mut samples: Vec<Sample>) -> Self {
        samples.sort_by(|a, b| a.x.total_cmp(&b.x));
        let (x, y) = samples.into_iter().map(|s| (s.x, s.value)).unzip();
        Self {
            id: id.into(),
            time,
            x,
            y,
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &value)| Sample { x, value })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Axis limits of this observation alone.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_values(self.x.iter().copied(), self.y.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// TimeSeries – every observation of one variable, in time order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub variable: String,
    pub observations: Vec<Observation>,
}

impl TimeSeries {
    pub fn new(variable: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            variable: variable.into(),
            observations,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// The observation at a `--time` index.
    pub fn select(&self, index: usize) -> Result<&Observation, VolumeError> {
        self.observations
            .get(index)
            .ok_or(VolumeError::TimeIndexOutOfRange {
                index,
                count: self.len(),
            })
    }

    /// Axis limits covering every observation, used to keep animation axes fixed.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_values(
            self.observations.iter().flat_map(|obs| obs.x.iter().copied()),
            self.observations.iter().flat_map(|obs| obs.y.iter().copied()),
        )
    }
}

// ---------------------------------------------------------------------------
// Bounds – axis limits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl Bounds {
    /// Min/max over the finite values only. An axis without any finite value
    /// falls back to `0..1`.
    pub fn from_values(xs: impl IntoIterator<Item = f64>, ys: impl IntoIterator<Item = f64>) -> Self {
        let default = Self::default();
        let (x_min, x_max) = finite_extrema(xs).unwrap_or((default.x_min, default.x_max));
        let (y_min, y_max) = finite_extrema(ys).unwrap_or((default.y_min, default.y_max));
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Grow each axis by `fraction` of its span on both sides. Zero-width axes
    /// are always widened so a chart can be built on them.
    pub fn with_margin(self, fraction: f64) -> Self {
        let (x_min, x_max) = widen(self.x_min, self.x_max, fraction);
        let (y_min, y_max) = widen(self.y_min, self.y_max, fraction);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn finite_extrema(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

fn widen(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        let pad = span * fraction;
        (min - pad, max + pad)
    } else {
        let pad = 0.5 * min.abs().max(1.0);
        (min - pad, max + pad)
    }
}
