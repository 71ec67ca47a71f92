// energy.rs
// Energy thresholds in units of kT.

use crate::errors::ValidationError;
use crate::units::{
    EnergyUnit, MolarEnergy, Temperature, TemperatureUnit, BOLTZMANN_KCAL_PER_MOL_K,
};

/// Thermal energy kT in kcal/mol.
pub fn thermal_energy(temperature: &Temperature) -> MolarEnergy {
    let kelvin = temperature.value_in(TemperatureUnit::Kelvin);
    MolarEnergy::kcal_per_mol(kelvin * BOLTZMANN_KCAL_PER_MOL_K)
}

/// Express an early termination target error in kT.
///
/// A missing or zero target means "no target" and gives 0.0 whatever the
/// temperature. Otherwise the temperature must be positive.
pub fn convert_target_error_to_kt(
    temperature: &Temperature,
    target_error: Option<&MolarEnergy>,
) -> Result<f64, ValidationError> {
    let Some(error) = target_error.filter(|e| !e.is_zero()) else {
        return Ok(0.0);
    };

    let kt = thermal_energy(temperature).value_in(EnergyUnit::KilocaloriePerMole);
    if !(kt > 0.0 && kt.is_finite()) {
        return Err(ValidationError::non_positive("temperature", temperature));
    }

    Ok(error.value_in(EnergyUnit::KilocaloriePerMole) / kt)
}
