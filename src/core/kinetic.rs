use log::debug;

use crate::core::error::FieldError;
use crate::core::input::{format_number, parse_number};

pub fn kinetic_energy(mass_kg: f64, speed_mps: f64) -> f64 {
    (mass_kg * speed_mps * speed_mps) / 2.0
}

/// Parses both fields and evaluates KE = M·V²/2. No sign check is applied.
pub fn calculate_kinetic_energy(mass: &str, velocity: &str) -> Result<f64, FieldError> {
    let (Some(mass_kg), Some(speed_mps)) = (parse_number(mass), parse_number(velocity)) else {
        debug!("kinetic energy rejected: mass={mass:?} velocity={velocity:?}");
        return Err(FieldError::InvalidNumber);
    };
    Ok(kinetic_energy(mass_kg, speed_mps))
}

pub fn format_kinetic_energy(energy_j: f64) -> String {
    format!("動能 KE = {} 焦耳", format_number(energy_j))
}

/// The text shown in the result slot: either the energy in joules or the
/// error message.
pub fn kinetic_energy_report(mass: &str, velocity: &str) -> String {
    match calculate_kinetic_energy(mass, velocity) {
        Ok(energy) => format_kinetic_energy(energy),
        Err(err) => err.to_string(),
    }
}
