//! Car and motorbike presets.

use serde::{Deserialize, Serialize};

use crate::constants::fuel::{DEFAULT_CAR_MPG, DEFAULT_MOTORBIKE_MPG};

/// How a vehicle is powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drivetrain {
    /// Gasoline engine, efficiency in MPG.
    #[default]
    Combustion,
    /// Battery electric, efficiency in MPGe.
    Electric,
}

/// Which preset list to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorbike,
}

impl VehicleKind {
    /// Efficiency assumed before any preset is chosen.
    #[must_use]
    pub fn default_efficiency(self) -> f64 {
        match self {
            Self::Car => DEFAULT_CAR_MPG,
            Self::Motorbike => DEFAULT_MOTORBIKE_MPG,
        }
    }

    /// The presets for this kind.
    #[must_use]
    pub fn presets(self) -> &'static [VehiclePreset] {
        match self {
            Self::Car => CAR_PRESETS,
            Self::Motorbike => MOTORBIKE_PRESETS,
        }
    }
}

/// A named vehicle class with a typical efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehiclePreset {
    pub name: &'static str,
    /// MPG, or MPGe for electric presets.
    pub efficiency: f64,
    pub drivetrain: Drivetrain,
}

const fn combustion(name: &'static str, efficiency: f64) -> VehiclePreset {
    VehiclePreset {
        name,
        efficiency,
        drivetrain: Drivetrain::Combustion,
    }
}

const fn electric(name: &'static str, efficiency: f64) -> VehiclePreset {
    VehiclePreset {
        name,
        efficiency,
        drivetrain: Drivetrain::Electric,
    }
}

pub const CAR_PRESETS: &[VehiclePreset] = &[
    combustion("Small car (up to 1.4 liter engine)", 35.0),
    combustion("Medium car (1.4-2.0 liter engine)", 30.0),
    combustion("Large car (above 2.0 liter engine)", 25.0),
    combustion("SUV or 4x4", 20.0),
    combustion("Hybrid", 50.0),
    electric("Electric vehicle", 120.0),
];

pub const MOTORBIKE_PRESETS: &[VehiclePreset] = &[
    combustion("Small motorcycle (up to 125cc)", 85.0),
    combustion("Medium motorcycle (125-500cc)", 65.0),
    combustion("Large motorcycle (over 500cc)", 45.0),
    combustion("Scooter", 95.0),
    combustion("Sport motorcycle", 40.0),
    electric("Electric motorcycle", 150.0),
];

/// Look up a preset by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn find_preset(kind: VehicleKind, name: &str) -> Option<&'static VehiclePreset> {
    let name = name.trim();
    kind.presets()
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
