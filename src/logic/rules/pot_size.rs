use super::Rule;
use crate::models::{Adjustment, PlantInputs, PotSize};

/// Pot size: large pots hold more water, small pots dry out faster
pub struct PotSizeRule;

impl Rule for PotSizeRule {
    fn id(&self) -> &'static str {
        "pot_size"
    }

    fn name(&self) -> &'static str {
        "Pot Size"
    }

    fn evaluate(&self, inputs: &PlantInputs) -> Option<Adjustment> {
        match inputs.pot_size {
            PotSize::Large => Some(Adjustment::new(
                "Large pot => holds more water: increase volume, slightly longer interval",
                1,
                80,
            )),
            PotSize::Small => Some(Adjustment::new(
                "Small pot => dries faster: decrease interval, slightly reduce volume",
                -1,
                -30,
            )),
            PotSize::Medium => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_inputs;

    #[test]
    fn pot_size_branches() {
        let mut inputs = test_inputs();

        inputs.pot_size = PotSize::Large;
        let adj = PotSizeRule.evaluate(&inputs).unwrap();
        assert_eq!((adj.frequency_days, adj.volume_ml), (1, 80));

        inputs.pot_size = PotSize::Small;
        let adj = PotSizeRule.evaluate(&inputs).unwrap();
        assert_eq!((adj.frequency_days, adj.volume_ml), (-1, -30));

        inputs.pot_size = PotSize::Medium;
        assert!(PotSizeRule.evaluate(&inputs).is_none());
    }
}
