// engine/mod.rs
// Integer and kT-scaled parameters handed to the multistate sampler.

use serde::{Deserialize, Serialize};

use crate::discretize::{
    checkpoint_interval_iterations, real_time_analysis_iterations, simulation_steps,
    steps_per_iteration,
};
use crate::energy::convert_target_error_to_kt;
use crate::errors::ValidationError;
use crate::settings::ProtocolSettings;
use crate::validate::{validate_solvation_settings, validate_timestep};

#[cfg(test)]
mod tests;

/// Everything the sampler needs, already discretized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineParameters {
    pub steps_per_iteration: i64,
    pub equilibration_steps: i64,
    pub production_steps: i64,
    pub checkpoint_interval_iterations: i64,
    /// `None` when online analysis is off.
    pub real_time_analysis_iterations: Option<i64>,
    pub real_time_analysis_minimum_iterations: Option<i64>,
    /// 0.0 means no early termination.
    pub early_termination_target_error_kt: f64,
}

impl EngineParameters {
    /// Validate `settings` and derive the sampler parameters.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn derive(settings: &ProtocolSettings) -> Result<Self, ValidationError> {
        let sim = &settings.simulation;
        let timestep = &settings.integrator.timestep;

        validate_solvation_settings(&settings.solvation)?;
        validate_timestep(settings.forcefield.hydrogen_mass, timestep)?;

        let steps_per_iteration = steps_per_iteration(sim, &settings.integrator)?;
        let equilibration_steps =
            simulation_steps(&sim.equilibration_length, timestep, steps_per_iteration)?;
        let production_steps =
            simulation_steps(&sim.production_length, timestep, steps_per_iteration)?;
        let checkpoint_interval_iterations =
            checkpoint_interval_iterations(&sim.checkpoint_interval, &sim.time_per_iteration)?;
        let (real_time_analysis_iterations, real_time_analysis_minimum_iterations) =
            real_time_analysis_iterations(sim)?;
        let early_termination_target_error_kt = convert_target_error_to_kt(
            &settings.thermo.temperature,
            sim.early_termination_target_error.as_ref(),
        )?;

        let params = Self {
            steps_per_iteration,
            equilibration_steps,
            production_steps,
            checkpoint_interval_iterations,
            real_time_analysis_iterations,
            real_time_analysis_minimum_iterations,
            early_termination_target_error_kt,
        };
        log::debug!(
            "derived engine parameters: {} steps/iteration, {:?} iterations total, \
             checkpoint every {} iterations",
            params.steps_per_iteration,
            params.total_iterations(),
            params.checkpoint_interval_iterations
        );
        Ok(params)
    }

    /// Iterations covered by equilibration plus production.
    ///
    /// `None` for hand-built parameters with no steps per iteration.
    pub fn total_iterations(&self) -> Option<i64> {
        self.equilibration_steps
            .checked_add(self.production_steps)?
            .checked_div(self.steps_per_iteration)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl TryFrom<&ProtocolSettings> for EngineParameters {
    type Error = ValidationError;

    fn try_from(settings: &ProtocolSettings) -> Result<Self, Self::Error> {
        Self::derive(settings)
    }
}
