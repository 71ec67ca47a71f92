// time_division.rs
// Exact integer division of time quantities, done in attoseconds.

use crate::errors::ValidationError;
use crate::units::{Time, TimeUnit};

/// Largest attosecond magnitude that still fits an `i128`.
const MAX_ATTOSECONDS: f64 = i128::MAX as f64;

/// Convert a time to a whole number of attoseconds.
///
/// Rounds to nearest so float noise from unit conversion (0.1 ps ->
/// 100000.00000000001 as) never shows up as a remainder. `None` when the
/// value is not finite or does not fit.
pub fn to_attoseconds(time: &Time) -> Option<i128> {
    let ats = time.value_in(TimeUnit::Attosecond).round();
    (ats.is_finite() && ats.abs() < MAX_ATTOSECONDS).then(|| ats as i128)
}

fn attoseconds_of(time: &Time, name: &str) -> Result<i128, ValidationError> {
    to_attoseconds(time).ok_or_else(|| ValidationError::out_of_range(name, time))
}

fn divmod_named(
    time: &Time,
    time_per_iteration: &Time,
    time_name: &str,
    time_per_iteration_name: &str,
) -> Result<(i64, i64), ValidationError> {
    let time_ats = attoseconds_of(time, time_name)?;
    let tpi_ats = attoseconds_of(time_per_iteration, time_per_iteration_name)?;

    if tpi_ats <= 0 {
        return Err(ValidationError::non_positive(
            time_per_iteration_name,
            time_per_iteration,
        ));
    }

    let iterations = i64::try_from(time_ats.div_euclid(tpi_ats))
        .map_err(|_| ValidationError::out_of_range(time_name, time))?;
    let remainder = i64::try_from(time_ats.rem_euclid(tpi_ats))
        .map_err(|_| ValidationError::out_of_range(time_per_iteration_name, time_per_iteration))?;

    Ok((iterations, remainder))
}

/// Number of whole `time_per_iteration` intervals in `time`, plus the
/// remainder in attoseconds.
///
/// Fails only when the divisor rounds to zero or below, or a value is too
/// large to count.
pub fn divmod_time(time: &Time, time_per_iteration: &Time) -> Result<(i64, i64), ValidationError> {
    divmod_named(time, time_per_iteration, "time", "time per iteration")
}

/// Divide `numerator` by `denominator`, failing if there is any remainder.
///
/// For example 20 ps / 4 fs gives 5000. The names are used in the error.
pub fn divmod_time_and_check(
    numerator: &Time,
    denominator: &Time,
    numerator_name: &str,
    denominator_name: &str,
) -> Result<i64, ValidationError> {
    let (iterations, remainder) =
        divmod_named(numerator, denominator, numerator_name, denominator_name)?;

    if remainder != 0 {
        return Err(ValidationError::inexact(
            *numerator,
            numerator_name,
            *denominator,
            denominator_name,
        ));
    }

    Ok(iterations)
}
