// discretize.rs
// Turns time-valued settings into the step and iteration counts the engine runs on.

use crate::errors::ValidationError;
use crate::settings::{IntegratorSettings, MultiStateSimulationSettings};
use crate::time_division::{divmod_time_and_check, to_attoseconds};
use crate::units::{Time, TimeUnit};

/// Number of integration steps in `sim_length`.
///
/// The length has to be a whole number of timesteps, and that number has to
/// be a whole number of iterations of `mc_steps` steps each.
pub fn simulation_steps(
    sim_length: &Time,
    timestep: &Time,
    mc_steps: i64,
) -> Result<i64, ValidationError> {
    if mc_steps <= 0 {
        return Err(ValidationError::non_positive(
            "number of integrator timesteps between MC moves",
            mc_steps,
        ));
    }

    let sim_steps = divmod_time_and_check(sim_length, timestep, "simulation time", "timestep")?;

    if sim_steps % mc_steps != 0 {
        return Err(ValidationError::NonIntegralIterations {
            simulation_time_ps: to_attoseconds(sim_length)
                .map_or(sim_length.value_in(TimeUnit::Picosecond), |ats| ats as f64 / 1e6),
            mc_steps,
        });
    }

    Ok(sim_steps)
}

/// Number of iterations between checkpoints.
///
/// Checkpoints are configured in time but the reporter counts iterations.
pub fn checkpoint_interval_iterations(
    checkpoint_interval: &Time,
    time_per_iteration: &Time,
) -> Result<i64, ValidationError> {
    divmod_time_and_check(
        checkpoint_interval,
        time_per_iteration,
        "checkpoint_interval",
        "time_per_iteration",
    )
}

/// Integration steps per iteration, for the integrator.
pub fn steps_per_iteration(
    simulation_settings: &MultiStateSimulationSettings,
    integrator_settings: &IntegratorSettings,
) -> Result<i64, ValidationError> {
    divmod_time_and_check(
        &simulation_settings.time_per_iteration,
        &integrator_settings.timestep,
        "time_per_iteration",
        "timestep",
    )
}

/// Online analysis cadence and minimum iterations.
///
/// Returns `(None, None)` without looking at the minimum time when online
/// analysis is turned off. Otherwise the interval is checked before the
/// minimum time and the first failure is returned.
pub fn real_time_analysis_iterations(
    simulation_settings: &MultiStateSimulationSettings,
) -> Result<(Option<i64>, Option<i64>), ValidationError> {
    let Some(interval) = &simulation_settings.real_time_analysis_interval else {
        return Ok((None, None));
    };

    let rta_its = divmod_time_and_check(
        interval,
        &simulation_settings.time_per_iteration,
        "real_time_analysis_interval",
        "time_per_iteration",
    )?;
    let rta_min_its = divmod_time_and_check(
        &simulation_settings.real_time_analysis_minimum_time,
        &simulation_settings.time_per_iteration,
        "real_time_analysis_minimum_time",
        "time_per_iteration",
    )?;

    Ok((Some(rta_its), Some(rta_min_its)))
}
