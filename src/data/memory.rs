//! In-memory [`VolumeSource`] for exercising the loader without HDF5 files.

use std::collections::BTreeMap;

use super::error::VolumeError;
use super::volume::VolumeSource;

#[derive(Debug, Default)]
pub struct MemoryVolume {
    label: String,
    observations: Vec<MemoryObservation>,
}

#[derive(Debug)]
struct MemoryObservation {
    id: String,
    value: f64,
    grids: Vec<(String, BTreeMap<String, Vec<f64>>)>,
}

impl MemoryVolume {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            observations: Vec::new(),
        }
    }

    /// Add an observation made of `(grid name, [(component, values)])`.
    pub fn observation(mut self, id: &str, value: f64, grids: &[(&str, &[(&str, &[f64])])]) -> Self {
        let grids = grids
            .iter()
            .map(|(grid, components)| {
                let components = components
                    .iter()
                    .map(|(name, values)| (name.to_string(), values.to_vec()))
                    .collect();
                (grid.to_string(), components)
            })
            .collect();
        self.observations.push(MemoryObservation {
            id: id.to_string(),
            value,
            grids,
        });
        self
    }

    fn find(&self, observation_id: &str) -> Result<&MemoryObservation, VolumeError> {
        self.observations
            .iter()
            .find(|obs| obs.id == observation_id)
            .ok_or_else(|| VolumeError::ObservationNotFound {
                path: self.label.clone(),
                observation: observation_id.to_string(),
            })
    }

    fn grid(
        &self,
        observation_id: &str,
        grid: &str,
    ) -> Result<&BTreeMap<String, Vec<f64>>, VolumeError> {
        self.find(observation_id)?
            .grids
            .iter()
            .find(|(name, _)| name == grid)
            .map(|(_, components)| components)
            .ok_or_else(|| VolumeError::NoGrids {
                path: self.label.clone(),
                observation: observation_id.to_string(),
            })
    }
}

impl VolumeSource for MemoryVolume {
    fn label(&self) -> &str {
        &self.label
    }

    fn observation_ids(&self) -> Result<Vec<String>, VolumeError> {
        Ok(self.observations.iter().map(|obs| obs.id.clone()).collect())
    }

    fn observation_value(&self, observation_id: &str) -> Result<f64, VolumeError> {
        Ok(self.find(observation_id)?.value)
    }

    fn grid_names(&self, observation_id: &str) -> Result<Vec<String>, VolumeError> {
        Ok(self
            .find(observation_id)?
            .grids
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn component_names(&self, observation_id: &str, grid: &str) -> Result<Vec<String>, VolumeError> {
        Ok(self.grid(observation_id, grid)?.keys().cloned().collect())
    }

    fn tensor_component(
        &self,
        observation_id: &str,
        grid: &str,
        component: &str,
    ) -> Result<Vec<f64>, VolumeError> {
        self.grid(observation_id, grid)?
            .get(component)
            .cloned()
            .ok_or_else(|| VolumeError::VariableNotFound {
                path: self.label.clone(),
                observation: observation_id.to_string(),
                grid: grid.to_string(),
                variable: component.to_string(),
            })
    }
}
