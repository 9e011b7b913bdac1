use super::Rule;
use crate::models::{Adjustment, PlantInputs, Sunlight};

/// Light exposure: more light means more transpiration
pub struct SunlightRule;

impl Rule for SunlightRule {
    fn id(&self) -> &'static str {
        "sunlight"
    }

    fn name(&self) -> &'static str {
        "Sunlight"
    }

    fn evaluate(&self, inputs: &PlantInputs) -> Option<Adjustment> {
        match inputs.sunlight {
            Sunlight::High => Some(Adjustment::new(
                "High sunlight => plants transpire more: water a bit more, sooner",
                -1,
                50,
            )),
            Sunlight::Low => Some(Adjustment::new(
                "Low sunlight => slower evaporation: water less, less often",
                1,
                -30,
            )),
            Sunlight::Medium => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_inputs;

    #[test]
    fn sunlight_branches() {
        let mut inputs = test_inputs();

        inputs.sunlight = Sunlight::High;
        let adj = SunlightRule.evaluate(&inputs).unwrap();
        assert_eq!((adj.frequency_days, adj.volume_ml), (-1, 50));

        inputs.sunlight = Sunlight::Low;
        let adj = SunlightRule.evaluate(&inputs).unwrap();
        assert_eq!((adj.frequency_days, adj.volume_ml), (1, -30));

        inputs.sunlight = Sunlight::Medium;
        assert!(SunlightRule.evaluate(&inputs).is_none());
    }
}
