use super::Rule;
use crate::models::{Adjustment, PlantInputs};

pub const WET_SOIL_TIP: &str = "Soil is already quite moist — ensure pot has proper drainage.";

/// Soil moisture urgency
///
/// Bands:
/// - Very dry: <15%
/// - Dry: 15-29%
/// - Moderate: 30-60% (no change)
/// - Wet: >60%, also warns about drainage
pub struct MoistureRule;

impl Rule for MoistureRule {
    fn id(&self) -> &'static str {
        "soil_moisture"
    }

    fn name(&self) -> &'static str {
        "Soil Moisture"
    }

    fn evaluate(&self, inputs: &PlantInputs) -> Option<Adjustment> {
        let moisture = inputs.soil_moisture;

        if moisture < 15 {
            Some(Adjustment::new(
                "Moisture <15% => Very dry: decrease interval, increase volume",
                -2,
                100,
            ))
        } else if moisture < 30 {
            Some(Adjustment::new(
                "Moisture 15–29% => Dry: decrease interval, slight volume boost",
                -1,
                50,
            ))
        } else if moisture > 60 {
            Some(
                Adjustment::new(
                    "Moisture >60% => Wet: increase interval, reduce volume",
                    2,
                    -50,
                )
                .with_tip(WET_SOIL_TIP),
            )
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_inputs;

    fn eval(moisture: i64) -> Option<Adjustment> {
        let mut inputs = test_inputs();
        inputs.soil_moisture = moisture;
        MoistureRule.evaluate(&inputs)
    }

    #[test]
    fn very_dry() {
        let adj = eval(14).unwrap();
        assert_eq!((adj.frequency_days, adj.volume_ml), (-2, 100));
        assert!(adj.tip.is_none());
        assert_eq!((eval(0).unwrap().frequency_days), -2);
    }

    #[test]
    fn dry() {
        for m in [15, 29] {
            let adj = eval(m).unwrap();
            assert_eq!((adj.frequency_days, adj.volume_ml), (-1, 50));
        }
    }

    #[test]
    fn moderate_band_does_not_fire() {
        for m in [30, 45, 60] {
            assert!(eval(m).is_none(), "moisture {} should not fire", m);
        }
    }

    #[test]
    fn wet_adds_drainage_tip() {
        let adj = eval(61).unwrap();
        assert_eq!((adj.frequency_days, adj.volume_ml), (2, -50));
        assert_eq!(adj.tip, Some(WET_SOIL_TIP));
        assert!(eval(100).is_some());
    }
}
