use std::path::Path;
use std::process::Output;

use tempfile::TempDir;

pub const BIN: &str = env!("CARGO_BIN_EXE_render1d");

/// Observation ids with their times, deliberately not in time order.
pub const OBSERVATIONS: [(&str, f64); 2] = [("ObservationId1", 1.0), ("ObservationId2", 0.0)];

/// Value of `psi` at coordinate `x` and time `t`.
pub fn psi(x: f64, t: f64) -> f64 {
    10.0 * t + x
}

/// Write one h5 file with a `element_data.vol` subfile.
///
/// `grids` are `(name, coordinates)`; every grid gets `psi`, the x coordinate
/// and a connectivity dataset at each observation.
pub fn write_volume_file(
    path: &Path,
    version: Option<u32>,
    observations: &[(&str, f64)],
    grids: &[(&str, &[f64])],
) -> hdf5::Result<()> {
    let file = hdf5::File::create(path)?;
    let volume = file.create_group("element_data.vol")?;
    if let Some(version) = version {
        volume
            .new_attr::<u32>()
            .shape(())
            .create("version")?
            .write_scalar(&version)?;
    }

    for &(id, time) in observations {
        let observation = volume.create_group(id)?;
        observation
            .new_attr::<f64>()
            .shape(())
            .create("observation_value")?
            .write_scalar(&time)?;

        for &(name, coords) in grids {
            let grid = observation.create_group(name)?;
            let values: Vec<f64> = coords.iter().map(|&x| psi(x, time)).collect();
            let connectivity: Vec<i32> = (0..coords.len() as i32).collect();
            grid.new_dataset_builder()
                .with_data(coords)
                .create("InertialCoordinates_x")?;
            grid.new_dataset_builder()
                .with_data(values.as_slice())
                .create("psi")?;
            grid.new_dataset_builder()
                .with_data(connectivity.as_slice())
                .create("connectivity")?;
        }
    }
    Ok(())
}

/// Two files sharing the domain [0, 1, 2]: `VolumeData0.h5` holds x = 2 and 0,
/// `VolumeData1.h5` holds x = 1.
pub fn two_file_dataset(version: Option<u32>) -> TempDir {
    two_file_dataset_with_versions(version, version)
}

/// Same as [`two_file_dataset`] with a separate version tag per file.
pub fn two_file_dataset_with_versions(first: Option<u32>, second: Option<u32>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_volume_file(
        &dir.path().join("VolumeData0.h5"),
        first,
        &OBSERVATIONS,
        &[("[B0,(L1I0)]", &[2.0, 0.0])],
    )
    .unwrap();
    write_volume_file(
        &dir.path().join("VolumeData1.h5"),
        second,
        &OBSERVATIONS,
        &[("[B0,(L1I1)]", &[1.0])],
    )
    .unwrap();
    dir
}

pub fn prefix(dir: &TempDir) -> String {
    dir.path().join("VolumeData").display().to_string()
}

pub fn render1d(args: &[&str]) -> Output {
    std::process::Command::new(BIN)
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to run render1d")
}

/// Names of the files in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
