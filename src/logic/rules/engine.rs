use super::{
    moisture::MoistureRule, pot_size::PotSizeRule, season::SeasonRule, sunlight::SunlightRule,
    temperature::TemperatureRule, BaseProfile, Rule,
};
use crate::logic::calculations::{clamp_frequency, clamp_volume, should_water_today, WET_MOISTURE};
use crate::logic::validation::{validate, ValidationError};
use crate::models::{PlantInputs, Recommendation};

pub const SKIP_WATERING_TIP: &str = "Skip watering for now. Recheck moisture in a few days.";

pub const GENERIC_TIPS: [&str; 2] = [
    "Always water until excess drains out; never leave roots sitting in water.",
    "Recheck soil moisture with your finger 2–3 cm below the surface before watering.",
];

pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(MoistureRule),
            Box::new(SunlightRule),
            Box::new(TemperatureRule),
            Box::new(PotSizeRule),
            Box::new(SeasonRule),
        ];

        Self { rules }
    }

    /// Build an engine with a custom group order. The order only changes
    /// the order of the fired-rule trace, never the totals.
    #[cfg(test)]
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn evaluate(&self, inputs: &PlantInputs) -> Result<Recommendation, ValidationError> {
        validate(inputs)?;

        let base = BaseProfile::for_plant(inputs.plant_type);
        let mut fired_rules = vec![base.description.to_string()];
        let mut tips = Vec::new();
        let mut frequency_days = base.frequency_days;
        let mut volume_ml = base.volume_ml;

        for adjustment in self.rules.iter().filter_map(|rule| rule.evaluate(inputs)) {
            fired_rules.push(adjustment.description.to_string());
            frequency_days += adjustment.frequency_days;
            volume_ml += adjustment.volume_ml;
            if let Some(tip) = adjustment.tip {
                tips.push(tip.to_string());
            }
        }

        // Clamp once, after every group has contributed
        let frequency_days = clamp_frequency(frequency_days);
        let volume_ml = clamp_volume(volume_ml);

        let water_today = should_water_today(inputs);
        if !water_today && inputs.soil_moisture > WET_MOISTURE {
            tips.push(SKIP_WATERING_TIP.to_string());
        }

        tips.extend(GENERIC_TIPS.iter().map(|tip| tip.to_string()));

        Ok(Recommendation {
            should_water_today: water_today,
            recommended_volume_ml: volume_ml,
            recommended_frequency_days: frequency_days,
            tips,
            fired_rules,
        })
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
