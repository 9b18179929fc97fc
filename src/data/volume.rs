use std::path::{Path, PathBuf};

use super::error::VolumeError;

/// The only volume data layout this tool understands.
pub const FORMAT_VERSION: u32 = 2;

/// Integer attribute on the subfile group holding the format version.
pub const VERSION_ATTRIBUTE: &str = "version";

/// Float attribute on every observation group holding its time.
pub const OBSERVATION_VALUE: &str = "observation_value";

pub const DEFAULT_SUBFILE: &str = "element_data";

// ---------------------------------------------------------------------------
// Storage seam
// ---------------------------------------------------------------------------

/// Read access to one file's volume data.
///
/// Observations hold grids (one per element), grids hold named tensor
/// components, each a flat array of doubles.
pub trait VolumeSource {
    /// Human readable origin, used in error messages.
    fn label(&self) -> &str;

    fn observation_ids(&self) -> Result<Vec<String>, VolumeError>;

    fn observation_value(&self, observation_id: &str) -> Result<f64, VolumeError>;

    fn grid_names(&self, observation_id: &str) -> Result<Vec<String>, VolumeError>;

    fn component_names(&self, observation_id: &str, grid: &str) -> Result<Vec<String>, VolumeError>;

    fn tensor_component(
        &self,
        observation_id: &str,
        grid: &str,
        component: &str,
    ) -> Result<Vec<f64>, VolumeError>;
}

// ---------------------------------------------------------------------------
// File discovery
// ---------------------------------------------------------------------------

/// A glob pattern is used verbatim, a plain prefix matches `<prefix>*.h5`.
pub fn file_pattern(prefix: &str) -> String {
    if prefix.contains(['*', '?', '[']) {
        prefix.to_string()
    } else {
        format!("{prefix}*.h5")
    }
}

/// All files matching the prefix or pattern, sorted by path.
pub fn discover_files(prefix: &str) -> Result<Vec<PathBuf>, VolumeError> {
    let pattern = file_pattern(prefix);
    let mut paths = glob::glob(&pattern)
        .map_err(|source| VolumeError::Pattern {
            pattern: pattern.clone(),
            source,
        })?
        .collect::<Result<Vec<_>, _>>()?;
    paths.retain(|p| p.is_file());
    paths.sort();

    if paths.is_empty() {
        return Err(VolumeError::NoFilesFound { pattern });
    }
    Ok(paths)
}

/// `element_data` and `element_data.vol` both name the group `element_data.vol`.
pub fn subfile_group_name(subfile: &str) -> String {
    if subfile.ends_with(".vol") {
        subfile.to_string()
    } else {
        format!("{subfile}.vol")
    }
}

// ---------------------------------------------------------------------------
// HDF5 backend
// ---------------------------------------------------------------------------

/// An open `.vol` subfile. The handles are released on drop.
pub struct H5VolumeFile {
    label: String,
    volume: hdf5::Group,
    _file: hdf5::File,
}

impl H5VolumeFile {
    /// Open `path` and check the format version of its volume subfile.
    pub fn open(path: &Path, subfile: &str) -> Result<Self, VolumeError> {
        let label = path.display().to_string();
        let file = hdf5::File::open(path).map_err(hdf5_error(&label))?;

        let group_name = subfile_group_name(subfile);
        let volume = file
            .group(&group_name)
            .map_err(|_| VolumeError::SubfileNotFound {
                path: label.clone(),
                subfile: group_name.clone(),
            })?;

        let found = volume
            .attr(VERSION_ATTRIBUTE)
            .and_then(|attr| attr.read_scalar::<u32>())
            .ok();
        if found != Some(FORMAT_VERSION) {
            return Err(VolumeError::VersionMismatch {
                path: label,
                found,
                expected: FORMAT_VERSION,
            });
        }

        log::debug!("Opened {label}/{group_name}");
        Ok(Self {
            label,
            volume,
            _file: file,
        })
    }

    fn observation(&self, observation_id: &str) -> Result<hdf5::Group, VolumeError> {
        self.volume
            .group(observation_id)
            .map_err(|_| VolumeError::ObservationNotFound {
                path: self.label.clone(),
                observation: observation_id.to_string(),
            })
    }

    fn grid(&self, observation_id: &str, grid: &str) -> Result<hdf5::Group, VolumeError> {
        self.observation(observation_id)?
            .group(grid)
            .map_err(hdf5_error(&self.label))
    }
}

impl VolumeSource for H5VolumeFile {
    fn label(&self) -> &str {
        &self.label
    }

    fn observation_ids(&self) -> Result<Vec<String>, VolumeError> {
        let mut ids = Vec::new();
        for group in self.volume.groups().map_err(hdf5_error(&self.label))? {
            // Header and version groups share the subfile with the observations.
            let attrs = group.attr_names().map_err(hdf5_error(&self.label))?;
            if attrs.iter().any(|name| name == OBSERVATION_VALUE) {
                ids.push(base_name(&group.name()));
            }
        }
        Ok(ids)
    }

    fn observation_value(&self, observation_id: &str) -> Result<f64, VolumeError> {
        self.observation(observation_id)?
            .attr(OBSERVATION_VALUE)
            .and_then(|attr| attr.read_scalar::<f64>())
            .map_err(hdf5_error(&self.label))
    }

    fn grid_names(&self, observation_id: &str) -> Result<Vec<String>, VolumeError> {
        let groups = self
            .observation(observation_id)?
            .groups()
            .map_err(hdf5_error(&self.label))?;
        Ok(groups.iter().map(|g| base_name(&g.name())).collect())
    }

    fn component_names(&self, observation_id: &str, grid: &str) -> Result<Vec<String>, VolumeError> {
        let datasets = self
            .grid(observation_id, grid)?
            .datasets()
            .map_err(hdf5_error(&self.label))?;
        Ok(datasets.iter().map(|d| base_name(&d.name())).collect())
    }

    fn tensor_component(
        &self,
        observation_id: &str,
        grid: &str,
        component: &str,
    ) -> Result<Vec<f64>, VolumeError> {
        let dataset = self
            .grid(observation_id, grid)?
            .dataset(component)
            .map_err(|_| VolumeError::VariableNotFound {
                path: self.label.clone(),
                observation: observation_id.to_string(),
                grid: grid.to_string(),
                variable: component.to_string(),
            })?;
        dataset.read_raw::<f64>().map_err(hdf5_error(&self.label))
    }
}

fn hdf5_error(path: &str) -> impl FnOnce(hdf5::Error) -> VolumeError + '_ {
    move |source| VolumeError::Hdf5 {
        path: path.to_string(),
        source,
    }
}

/// Last component of an HDF5 object path.
fn base_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn prefix_becomes_h5_pattern() {
        assert_eq!(file_pattern("VolumeData"), "VolumeData*.h5");
        assert_eq!(file_pattern("run/Vol*.h5"), "run/Vol*.h5");
        assert_eq!(file_pattern("Vol?.h5"), "Vol?.h5");
    }

    #[test]
    fn subfile_suffix_is_added_once() {
        assert_eq!(subfile_group_name("element_data"), "element_data.vol");
        assert_eq!(subfile_group_name("element_data.vol"), "element_data.vol");
    }

    #[test]
    fn base_name_strips_group_path() {
        assert_eq!(base_name("/element_data.vol/ObservationId3"), "ObservationId3");
        assert_eq!(base_name("psi"), "psi");
    }

    #[test]
    fn discover_sorts_and_filters_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Volume1.h5", "Volume0.h5", "Other0.h5", "Volume0.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }
        let prefix = dir.path().join("Volume");
        let found = discover_files(prefix.to_str().unwrap()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Volume0.h5", "Volume1.h5"]);
    }

    #[test]
    fn discover_nothing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("Missing");
        assert!(matches!(
            discover_files(prefix.to_str().unwrap()),
            Err(VolumeError::NoFilesFound { .. })
        ));
    }
}
