use thiserror::Error;

/// Everything that can go wrong between the command line and a [`TimeSeries`].
///
/// [`TimeSeries`]: super::model::TimeSeries
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("no volume files match '{pattern}'")]
    NoFilesFound { pattern: String },

    #[error("invalid file pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot read directory entry while matching files")]
    Glob(#[from] glob::GlobError),

    #[error("{path}: {source}")]
    Hdf5 {
        path: String,
        #[source]
        source: hdf5::Error,
    },

    #[error("{path}: no volume subfile '{subfile}'")]
    SubfileNotFound { path: String, subfile: String },

    #[error(
        "{path}: expected volume data format version {expected}, found {}",
        found.map_or_else(|| "no version attribute".to_string(), |v| v.to_string())
    )]
    VersionMismatch {
        path: String,
        found: Option<u32>,
        expected: u32,
    },

    #[error("{path}: observation '{observation}' not found")]
    ObservationNotFound { path: String, observation: String },

    #[error("{path}: no grids in observation '{observation}'")]
    NoGrids { path: String, observation: String },

    #[error("{path}: variable '{variable}' not found in grid '{grid}' of observation '{observation}'")]
    VariableNotFound {
        path: String,
        observation: String,
        grid: String,
        variable: String,
    },

    #[error(
        "{path}: grid '{grid}' of observation '{observation}' has {coordinates} coordinates but {values} values"
    )]
    LengthMismatch {
        path: String,
        observation: String,
        grid: String,
        coordinates: usize,
        values: usize,
    },

    #[error("{path}: no observations in volume data")]
    NoObservations { path: String },

    #[error("time index {index} out of range, the data has {count} observations")]
    TimeIndexOutOfRange { index: usize, count: usize },
}
