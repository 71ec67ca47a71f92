pub mod discretize;
pub mod energy;
pub mod engine;
pub mod errors;
pub mod settings;
pub mod time_division;
pub mod units;
pub mod validate;

pub use engine::EngineParameters;
pub use errors::{QuantityParseError, SettingsLoadError, ValidationError};
pub use settings::ProtocolSettings;
pub use units::{Length, MolarEnergy, Temperature, Time};
