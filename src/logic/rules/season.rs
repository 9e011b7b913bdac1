use super::Rule;
use crate::models::{Adjustment, PlantInputs, Season};

/// Seasonal growth
///
/// Summer raises evapotranspiration; winter slows growth. Spring and fall
/// leave the schedule unchanged.
pub struct SeasonRule;

impl Rule for SeasonRule {
    fn id(&self) -> &'static str {
        "season"
    }

    fn name(&self) -> &'static str {
        "Season"
    }

    fn evaluate(&self, inputs: &PlantInputs) -> Option<Adjustment> {
        match inputs.season {
            Season::Summer => Some(Adjustment::new(
                "Summer => higher evapotranspiration: water a bit more, sooner",
                -1,
                40,
            )),
            Season::Winter => Some(Adjustment::new(
                "Winter => plant growth slows: water less, less often",
                2,
                -60,
            )),
            Season::Spring | Season::Fall => None,
        }
    }
}
