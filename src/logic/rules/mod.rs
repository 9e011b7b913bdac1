pub mod base_profile;
pub mod engine;
pub mod moisture;
pub mod pot_size;
pub mod season;
pub mod sunlight;
pub mod temperature;

pub use base_profile::BaseProfile;
pub use engine::RulesEngine;

use crate::models::{Adjustment, PlantInputs};

/// One adjustment group of the watering heuristic.
///
/// A group inspects a single input dimension and fires at most one branch.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an adjustment if a branch fires
    fn evaluate(&self, inputs: &PlantInputs) -> Option<Adjustment>;
}

#[cfg(test)]
pub(crate) fn test_inputs() -> PlantInputs {
    use crate::models::{PlantType, PotSize, Season, Sunlight};

    PlantInputs {
        soil_moisture: 45,
        plant_type: PlantType::Leafy,
        sunlight: Sunlight::Medium,
        temperature_c: 21.0,
        pot_size: PotSize::Medium,
        season: Season::Spring,
    }
}
