//! Physical unit definitions and typed quantities.
//!
//! Base units:
//! - Time: attosecond (as)
//! - Molar energy: kilocalorie per mole (kcal/mol)
//! - Temperature: kelvin (K)
//! - Length: nanometer (nm)
//!
//! Quantities of different dimensions are different types, so a timestep can
//! never be divided by an energy.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::errors::QuantityParseError;

/// Boltzmann constant in kcal/(mol·K).
pub const BOLTZMANN_KCAL_PER_MOL_K: f64 = 0.001987204;
/// Kilojoules in one kilocalorie (thermochemical).
pub const KJ_PER_KCAL: f64 = 4.184;

/// A unit belonging to one physical dimension.
pub trait Unit: Copy + PartialEq + fmt::Debug + 'static {
    /// Dimension name used in error messages.
    const DIMENSION: &'static str;

    /// How many base units one of `self` is.
    fn factor(self) -> f64;

    fn symbol(self) -> &'static str;

    /// Look up a unit by symbol or long name.
    fn lookup(name: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Attosecond,
    Femtosecond,
    Picosecond,
    Nanosecond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyUnit {
    KilocaloriePerMole,
    KilojoulePerMole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Kelvin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Angstrom,
    Nanometer,
}

static TIME_UNITS: Lazy<HashMap<&'static str, TimeUnit>> = Lazy::new(|| {
    use TimeUnit::*;
    let mut m = HashMap::new();
    for name in ["as", "attosecond", "attoseconds"] {
        m.insert(name, Attosecond);
    }
    for name in ["fs", "femtosecond", "femtoseconds"] {
        m.insert(name, Femtosecond);
    }
    for name in ["ps", "picosecond", "picoseconds"] {
        m.insert(name, Picosecond);
    }
    for name in ["ns", "nanosecond", "nanoseconds"] {
        m.insert(name, Nanosecond);
    }
    m
});

static ENERGY_UNITS: Lazy<HashMap<&'static str, EnergyUnit>> = Lazy::new(|| {
    use EnergyUnit::*;
    let mut m = HashMap::new();
    for name in ["kcal/mol", "kilocalorie_per_mole", "kilocalories_per_mole"] {
        m.insert(name, KilocaloriePerMole);
    }
    for name in ["kJ/mol", "kj/mol", "kilojoule_per_mole", "kilojoules_per_mole"] {
        m.insert(name, KilojoulePerMole);
    }
    m
});

static TEMPERATURE_UNITS: Lazy<HashMap<&'static str, TemperatureUnit>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for name in ["K", "kelvin"] {
        m.insert(name, TemperatureUnit::Kelvin);
    }
    m
});

static LENGTH_UNITS: Lazy<HashMap<&'static str, LengthUnit>> = Lazy::new(|| {
    use LengthUnit::*;
    let mut m = HashMap::new();
    for name in ["A", "Å", "angstrom", "angstroms"] {
        m.insert(name, Angstrom);
    }
    for name in ["nm", "nanometer", "nanometers"] {
        m.insert(name, Nanometer);
    }
    m
});

impl Unit for TimeUnit {
    const DIMENSION: &'static str = "time";

    fn factor(self) -> f64 {
        match self {
            TimeUnit::Attosecond => 1.0,
            TimeUnit::Femtosecond => 1.0e3,
            TimeUnit::Picosecond => 1.0e6,
            TimeUnit::Nanosecond => 1.0e9,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Attosecond => "as",
            TimeUnit::Femtosecond => "fs",
            TimeUnit::Picosecond => "ps",
            TimeUnit::Nanosecond => "ns",
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        TIME_UNITS.get(name).copied()
    }
}

impl Unit for EnergyUnit {
    const DIMENSION: &'static str = "molar energy";

    fn factor(self) -> f64 {
        match self {
            EnergyUnit::KilocaloriePerMole => 1.0,
            EnergyUnit::KilojoulePerMole => 1.0 / KJ_PER_KCAL,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::KilocaloriePerMole => "kcal/mol",
            EnergyUnit::KilojoulePerMole => "kJ/mol",
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        ENERGY_UNITS.get(name).copied()
    }
}

impl Unit for TemperatureUnit {
    const DIMENSION: &'static str = "temperature";

    fn factor(self) -> f64 {
        1.0
    }

    fn symbol(self) -> &'static str {
        "K"
    }

    fn lookup(name: &str) -> Option<Self> {
        TEMPERATURE_UNITS.get(name).copied()
    }
}

impl Unit for LengthUnit {
    const DIMENSION: &'static str = "length";

    fn factor(self) -> f64 {
        match self {
            LengthUnit::Angstrom => 0.1,
            LengthUnit::Nanometer => 1.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Angstrom => "A",
            LengthUnit::Nanometer => "nm",
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        LENGTH_UNITS.get(name).copied()
    }
}

/// A magnitude tagged with a unit of a single dimension.
///
/// Equality and ordering both compare base-unit magnitudes, so `1 ps` equals
/// `1000 fs`.
#[derive(Debug, Clone, Copy)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

pub type Time = Quantity<TimeUnit>;
pub type MolarEnergy = Quantity<EnergyUnit>;
pub type Temperature = Quantity<TemperatureUnit>;
pub type Length = Quantity<LengthUnit>;

impl<U: Unit> Quantity<U> {
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Magnitude in the quantity's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Magnitude expressed in the dimension's base unit.
    pub fn base_value(&self) -> f64 {
        self.value * self.unit.factor()
    }

    /// Magnitude expressed in `unit`.
    pub fn value_in(&self, unit: U) -> f64 {
        self.base_value() / unit.factor()
    }

    pub fn to(&self, unit: U) -> Self {
        Self::new(self.value_in(unit), unit)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl Time {
    pub const fn femtoseconds(value: f64) -> Self {
        Self::new(value, TimeUnit::Femtosecond)
    }

    pub const fn picoseconds(value: f64) -> Self {
        Self::new(value, TimeUnit::Picosecond)
    }

    pub const fn nanoseconds(value: f64) -> Self {
        Self::new(value, TimeUnit::Nanosecond)
    }
}

impl MolarEnergy {
    pub const fn kcal_per_mol(value: f64) -> Self {
        Self::new(value, EnergyUnit::KilocaloriePerMole)
    }

    pub const fn kj_per_mol(value: f64) -> Self {
        Self::new(value, EnergyUnit::KilojoulePerMole)
    }
}

impl Temperature {
    pub const fn kelvin(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Kelvin)
    }
}

impl Length {
    pub const fn nanometers(value: f64) -> Self {
        Self::new(value, LengthUnit::Nanometer)
    }

    pub const fn angstroms(value: f64) -> Self {
        Self::new(value, LengthUnit::Angstrom)
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.base_value() == other.base_value()
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base_value().partial_cmp(&other.base_value())
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = QuantityParseError;

    /// Accepts `"<magnitude> <unit>"`, optionally with a `*` between them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.replace('*', " ");
        let mut parts = cleaned.split_whitespace();
        let (Some(magnitude), Some(unit), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(QuantityParseError::Malformed(s.to_string()));
        };

        let value: f64 = magnitude
            .parse()
            .map_err(|_| QuantityParseError::InvalidMagnitude(magnitude.to_string()))?;
        if !value.is_finite() {
            return Err(QuantityParseError::InvalidMagnitude(magnitude.to_string()));
        }
        let unit = U::lookup(unit).ok_or_else(|| QuantityParseError::UnknownUnit {
            dimension: U::DIMENSION,
            unit: unit.to_string(),
        })?;
        Ok(Self::new(value, unit))
    }
}

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> serde::de::Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a {} quantity such as \"2 fs\"", U::DIMENSION)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(QuantityVisitor(PhantomData))
    }
}
