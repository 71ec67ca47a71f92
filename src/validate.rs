// validate.rs
// Consistency checks over settings groups before anything is discretized.

use crate::errors::ValidationError;
use crate::settings::OpenMMSolvationSettings;
use crate::units::Time;

/// Hydrogen mass (amu) below which long timesteps are refused.
pub const MIN_HMASS_FOR_LONG_TIMESTEP: f64 = 3.0;
/// Longest timestep allowed without hydrogen mass repartitioning.
pub const MAX_TIMESTEP_WITHOUT_HMR: Time = Time::femtoseconds(2.0);

/// Check that the box is defined at most one way.
///
/// The cardinality check runs first, so a settings object violating both
/// rules reports the cardinality error.
pub fn validate_solvation_settings(
    settings: &OpenMMSolvationSettings,
) -> Result<(), ValidationError> {
    let defined = [
        settings.solvent_padding.is_some(),
        settings.number_of_solvent_molecules.is_some(),
        settings.box_vectors.is_some(),
        settings.box_size.is_some(),
    ]
    .into_iter()
    .filter(|&set| set)
    .count();

    if defined > 1 {
        return Err(ValidationError::conflicting(
            "Only one of solvent_padding, number_of_solvent_molecules, \
             box_vectors, and box_size can be defined in the solvation settings.",
        ));
    }

    let explicit_box = settings.box_size.is_some() || settings.box_vectors.is_some();
    if settings.box_shape.is_some() && explicit_box {
        return Err(ValidationError::conflicting(
            "box_shape cannot be defined alongside either box_size or box_vectors \
             in the solvation settings.",
        ));
    }

    Ok(())
}

/// Refuse timesteps over 2 fs unless hydrogens are at least 3 amu.
pub fn validate_timestep(hydrogen_mass: f64, timestep: &Time) -> Result<(), ValidationError> {
    if hydrogen_mass < MIN_HMASS_FOR_LONG_TIMESTEP && *timestep > MAX_TIMESTEP_WITHOUT_HMR {
        return Err(ValidationError::UnstableIntegration {
            timestep: *timestep,
            hydrogen_mass,
        });
    }
    Ok(())
}
