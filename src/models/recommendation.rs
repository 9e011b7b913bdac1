use serde::{Deserialize, Serialize};

/// Outcome of one engine evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub should_water_today: bool,
    pub recommended_volume_ml: i64,
    pub recommended_frequency_days: i64,
    pub tips: Vec<String>,
    pub fired_rules: Vec<String>,
}

impl Recommendation {
    pub fn decision_label(&self) -> &'static str {
        if self.should_water_today {
            "Yes"
        } else {
            "No"
        }
    }
}

/// A single rule-group outcome, applied to the running accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub description: &'static str,
    pub frequency_days: i64,
    pub volume_ml: i64,
    pub tip: Option<&'static str>,
}

impl Adjustment {
    pub fn new(description: &'static str, frequency_days: i64, volume_ml: i64) -> Self {
        Self {
            description,
            frequency_days,
            volume_ml,
            tip: None,
        }
    }

    pub fn with_tip(mut self, tip: &'static str) -> Self {
        self.tip = Some(tip);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_json_shape() {
        let rec = Recommendation {
            should_water_today: true,
            recommended_volume_ml: 450,
            recommended_frequency_days: 1,
            tips: vec!["tip".into()],
            fired_rules: vec!["rule".into()],
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["should_water_today"], true);
        assert_eq!(value["recommended_volume_ml"], 450);
        assert_eq!(value["recommended_frequency_days"], 1);
        assert_eq!(value["tips"][0], "tip");
        assert_eq!(value["fired_rules"][0], "rule");
    }

    #[test]
    fn decision_label() {
        let mut rec = Recommendation {
            should_water_today: false,
            recommended_volume_ml: 50,
            recommended_frequency_days: 14,
            tips: Vec::new(),
            fired_rules: Vec::new(),
        };
        assert_eq!(rec.decision_label(), "No");
        rec.should_water_today = true;
        assert_eq!(rec.decision_label(), "Yes");
    }

    #[test]
    fn adjustment_builder() {
        let adj = Adjustment::new("Wet", 2, -50).with_tip("drain");
        assert_eq!(adj.frequency_days, 2);
        assert_eq!(adj.volume_ml, -50);
        assert_eq!(adj.tip, Some("drain"));
    }
}
