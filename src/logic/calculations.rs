use crate::models::{PlantInputs, Sunlight};

pub const MIN_FREQUENCY_DAYS: i64 = 1;
pub const MAX_FREQUENCY_DAYS: i64 = 14;
pub const MIN_VOLUME_ML: i64 = 50;
pub const MAX_VOLUME_ML: i64 = 600;

/// Soil drier than this always needs water today
pub const DRY_MOISTURE: i64 = 30;

/// Harsh conditions (high sun and heat) bring the watering threshold up to this
pub const HARSH_MOISTURE: i64 = 50;

pub const HOT_TEMP_C: f64 = 28.0;

/// Above this the soil counts as wet
pub const WET_MOISTURE: i64 = 60;

pub fn clamp_frequency(days: i64) -> i64 {
    days.clamp(MIN_FREQUENCY_DAYS, MAX_FREQUENCY_DAYS)
}

pub fn clamp_volume(ml: i64) -> i64 {
    ml.clamp(MIN_VOLUME_ML, MAX_VOLUME_ML)
}

/// Decide whether to water today. Uses the raw observation only, never
/// the adjusted accumulators.
pub fn should_water_today(inputs: &PlantInputs) -> bool {
    let dry = inputs.soil_moisture < DRY_MOISTURE;
    let harsh = inputs.soil_moisture < HARSH_MOISTURE
        && inputs.sunlight == Sunlight::High
        && inputs.temperature_c > HOT_TEMP_C;
    dry || harsh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlantType, PotSize, Season};

    fn inputs(soil_moisture: i64, sunlight: Sunlight, temperature_c: f64) -> PlantInputs {
        PlantInputs {
            soil_moisture,
            plant_type: PlantType::Leafy,
            sunlight,
            temperature_c,
            pot_size: PotSize::Medium,
            season: Season::Spring,
        }
    }

    #[test]
    fn clamp_frequency_bounds() {
        assert_eq!(clamp_frequency(-3), 1);
        assert_eq!(clamp_frequency(0), 1);
        assert_eq!(clamp_frequency(7), 7);
        assert_eq!(clamp_frequency(17), 14);
    }

    #[test]
    fn clamp_volume_bounds() {
        assert_eq!(clamp_volume(0), 50);
        assert_eq!(clamp_volume(250), 250);
        assert_eq!(clamp_volume(750), 600);
    }

    #[test]
    fn dry_soil_always_waters() {
        assert!(should_water_today(&inputs(0, Sunlight::Low, 5.0)));
        assert!(should_water_today(&inputs(29, Sunlight::Medium, 20.0)));
        assert!(!should_water_today(&inputs(30, Sunlight::Medium, 20.0)));
    }

    #[test]
    fn harsh_conditions_raise_threshold() {
        assert!(should_water_today(&inputs(49, Sunlight::High, 28.5)));
        // Each harsh condition on its own is not enough
        assert!(!should_water_today(&inputs(50, Sunlight::High, 35.0)));
        assert!(!should_water_today(&inputs(40, Sunlight::Medium, 35.0)));
        assert!(!should_water_today(&inputs(40, Sunlight::High, 28.0)));
    }
}
