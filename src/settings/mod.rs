// settings/mod.rs
// Settings containers for a multistate sampling protocol, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ultraviolet::Vec3;

use crate::errors::SettingsLoadError;
use crate::units::{Length, MolarEnergy, Temperature, Time};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratorSettings {
    /// Integration timestep.
    pub timestep: Time,
}

impl Default for IntegratorSettings {
    fn default() -> Self {
        Self {
            timestep: Time::femtoseconds(4.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcefieldSettings {
    /// Target hydrogen mass in amu, after repartitioning.
    pub hydrogen_mass: f64,
}

impl Default for ForcefieldSettings {
    fn default() -> Self {
        Self { hydrogen_mass: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermoSettings {
    pub temperature: Temperature,
}

impl Default for ThermoSettings {
    fn default() -> Self {
        Self {
            temperature: Temperature::kelvin(298.15),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiStateSimulationSettings {
    /// Simulation time between state exchange attempts.
    pub time_per_iteration: Time,
    /// Cadence of online free energy analysis. `None` turns it off.
    #[serde(default)]
    pub real_time_analysis_interval: Option<Time>,
    /// Simulation time before online analysis starts.
    pub real_time_analysis_minimum_time: Time,
    /// How often a checkpoint is written.
    pub checkpoint_interval: Time,
    pub equilibration_length: Time,
    pub production_length: Time,
    /// Stop early once the estimated error drops below this. `None` or zero
    /// means run the full production length.
    #[serde(default)]
    pub early_termination_target_error: Option<MolarEnergy>,
}

impl Default for MultiStateSimulationSettings {
    fn default() -> Self {
        Self {
            time_per_iteration: Time::picoseconds(2.5),
            real_time_analysis_interval: Some(Time::picoseconds(250.0)),
            real_time_analysis_minimum_time: Time::picoseconds(500.0),
            checkpoint_interval: Time::picoseconds(250.0),
            equilibration_length: Time::nanoseconds(1.0),
            production_length: Time::nanoseconds(5.0),
            early_termination_target_error: Some(MolarEnergy::kcal_per_mol(0.0)),
        }
    }
}

/// Periodic box shapes understood by the solvation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxShape {
    Cube,
    Dodecahedron,
    Octahedron,
}

/// Ways of defining the solvent box. The first four are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenMMSolvationSettings {
    #[serde(default)]
    pub solvent_padding: Option<Length>,
    #[serde(default)]
    pub number_of_solvent_molecules: Option<u32>,
    /// Periodic box vectors in nanometers.
    #[serde(default)]
    pub box_vectors: Option<[Vec3; 3]>,
    /// Box edge lengths in nanometers.
    #[serde(default)]
    pub box_size: Option<Vec3>,
    #[serde(default)]
    pub box_shape: Option<BoxShape>,
}

/// Every settings group the engine parameters are derived from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProtocolSettings {
    #[serde(default)]
    pub thermo: ThermoSettings,
    #[serde(default)]
    pub forcefield: ForcefieldSettings,
    #[serde(default)]
    pub integrator: IntegratorSettings,
    #[serde(default)]
    pub simulation: MultiStateSimulationSettings,
    #[serde(default)]
    pub solvation: OpenMMSolvationSettings,
}

impl ProtocolSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsLoadError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded protocol settings from {}: timestep={} time_per_iteration={}",
            path.display(),
            settings.integrator.timestep,
            settings.simulation.time_per_iteration
        );
        Ok(settings)
    }
}
