use super::Rule;
use crate::models::{Adjustment, PlantInputs};

/// Ambient temperature
///
/// Conditions:
/// - Hot: >28°C
/// - Cool: <15°C
/// - 15-28°C inclusive leaves the schedule alone
pub struct TemperatureRule;

impl Rule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature"
    }

    fn evaluate(&self, inputs: &PlantInputs) -> Option<Adjustment> {
        let temp = inputs.temperature_c;

        if temp > 28.0 {
            Some(Adjustment::new(
                "Hot (>28°C) => increase water and decrease interval",
                -1,
                60,
            ))
        } else if temp < 15.0 {
            Some(Adjustment::new(
                "Cool (<15°C) => reduce water and increase interval",
                1,
                -40,
            ))
        } else {
            None
        }
    }
}
