/// Data layer: discovery, extraction and export of volume data.
///
/// Architecture:
/// ```text
///  <prefix>*.h5
///        │
///        ▼
///   ┌──────────┐
///   │  volume   │  discover files, open `.vol` subfiles, check version
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  concatenate grids per observation, sort by coordinate
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ TimeSeries  │  Vec<Observation>, time ascending
///   └────────────┘
///        │
///        ▼
///   render / ui / export
/// ```

pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod volume;

#[cfg(test)]
pub mod memory;
