//! Error types for settings validation and discretization.

use thiserror::Error;

use crate::units::Time;

/// A settings combination the sampling engine cannot be configured with.
///
/// None of these are retryable; the offending setting has to change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Mutually exclusive options were set together.
    #[error("{0}")]
    ConflictingSettings(String),

    /// Hydrogen mass too light for the requested timestep.
    #[error("timestep {timestep} too large for hydrogen mass {hydrogen_mass}")]
    UnstableIntegration { timestep: Time, hydrogen_mass: f64 },

    /// One time quantity does not evenly divide another.
    #[error(
        "The {numerator_name} ({numerator}) does not evenly divide by the \
         {denominator_name} ({denominator})"
    )]
    InexactDivision {
        numerator: Time,
        numerator_name: String,
        denominator: Time,
        denominator_name: String,
    },

    /// Step count does not land on an iteration boundary.
    #[error(
        "Simulation time {simulation_time_ps} ps should contain a number of steps \
         divisible by the number of integrator timesteps between MC moves {mc_steps}"
    )]
    NonIntegralIterations { simulation_time_ps: f64, mc_steps: i64 },

    /// A divisor that is zero or negative once discretized.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: String, value: String },

    /// A time too long, or not finite, to count in attoseconds.
    #[error("{name} ({value}) is out of range")]
    OutOfRange { name: String, value: String },
}

impl ValidationError {
    pub fn conflicting(message: impl Into<String>) -> Self {
        ValidationError::ConflictingSettings(message.into())
    }

    pub fn inexact(
        numerator: Time,
        numerator_name: impl Into<String>,
        denominator: Time,
        denominator_name: impl Into<String>,
    ) -> Self {
        ValidationError::InexactDivision {
            numerator,
            numerator_name: numerator_name.into(),
            denominator,
            denominator_name: denominator_name.into(),
        }
    }

    pub fn non_positive(name: impl Into<String>, value: impl ToString) -> Self {
        ValidationError::NonPositive {
            name: name.into(),
            value: value.to_string(),
        }
    }

    pub fn out_of_range(name: impl Into<String>, value: impl ToString) -> Self {
        ValidationError::OutOfRange {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Failure to read a quantity such as `"2 fs"` from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityParseError {
    #[error("expected \"<magnitude> <unit>\", got {0:?}")]
    Malformed(String),

    #[error("invalid magnitude {0:?}")]
    InvalidMagnitude(String),

    #[error("unknown {dimension} unit {unit:?}")]
    UnknownUnit { dimension: &'static str, unit: String },
}

/// Failure to load a settings file.
#[derive(Error, Debug)]
pub enum SettingsLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    Validation(#[from] ValidationError),
}
