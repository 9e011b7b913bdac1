use crate::models::PlantType;

/// Watering profile intrinsic to a plant type, before any environmental
/// adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseProfile {
    pub frequency_days: i64,
    pub volume_ml: i64,
    pub description: &'static str,
}

impl BaseProfile {
    pub fn for_plant(plant_type: PlantType) -> Self {
        match plant_type {
            PlantType::Succulent => Self {
                frequency_days: 10,
                volume_ml: 120,
                description: "Base: succulents need infrequent, small watering",
            },
            PlantType::Leafy => Self {
                frequency_days: 4,
                volume_ml: 250,
                description: "Base: leafy plants need moderate watering",
            },
            PlantType::Flowering => Self {
                frequency_days: 3,
                volume_ml: 300,
                description: "Base: flowering plants need more frequent watering",
            },
            PlantType::Herb => Self {
                frequency_days: 2,
                volume_ml: 220,
                description: "Base: herbs need frequent, moderate watering",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_profiles() {
        let expected = [
            (PlantType::Succulent, 10, 120),
            (PlantType::Leafy, 4, 250),
            (PlantType::Flowering, 3, 300),
            (PlantType::Herb, 2, 220),
        ];
        for (plant, freq, vol) in expected {
            let base = BaseProfile::for_plant(plant);
            assert_eq!(base.frequency_days, freq, "frequency for {}", plant);
            assert_eq!(base.volume_ml, vol, "volume for {}", plant);
            assert!(base.description.starts_with("Base: "));
        }
    }
}
