use crate::models::{PlantInputs, PlantType, PotSize, RecommendRequest, Season, Sunlight};
use thiserror::Error;

pub const SOIL_MOISTURE_MIN: i64 = 0;
pub const SOIL_MOISTURE_MAX: i64 = 100;

/// A categorical input field with a closed set of wire names.
pub trait Categorical: Sized + Copy + 'static {
    /// Field name as it appears in requests and error messages
    const FIELD: &'static str;

    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// Wire names, same order as `ALL`
    const NAMES: &'static [&'static str];

    fn name(&self) -> &'static str;
}

impl Categorical for PlantType {
    const FIELD: &'static str = "plant_type";
    const ALL: &'static [Self] = PlantType::ALL;
    const NAMES: &'static [&'static str] = PlantType::NAMES;

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl Categorical for Sunlight {
    const FIELD: &'static str = "sunlight";
    const ALL: &'static [Self] = Sunlight::ALL;
    const NAMES: &'static [&'static str] = Sunlight::NAMES;

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl Categorical for PotSize {
    const FIELD: &'static str = "pot_size";
    const ALL: &'static [Self] = PotSize::ALL;
    const NAMES: &'static [&'static str] = PotSize::NAMES;

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl Categorical for Season {
    const FIELD: &'static str = "season";
    const ALL: &'static [Self] = Season::ALL;
    const NAMES: &'static [&'static str] = Season::NAMES;

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

/// Allowed values for every categorical field, one entry per field.
pub const ALLOWED_VALUES: &[(&str, &[&str])] = &[
    (PlantType::FIELD, <PlantType as Categorical>::NAMES),
    (Sunlight::FIELD, <Sunlight as Categorical>::NAMES),
    (PotSize::FIELD, <PotSize as Categorical>::NAMES),
    (Season::FIELD, <Season as Categorical>::NAMES),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedValues {
    OneOf(&'static [&'static str]),
    Range { min: i64, max: i64 },
}

impl AllowedValues {
    /// Members sorted alphabetically, as shown to clients
    pub fn sorted(&self) -> Vec<&'static str> {
        match self {
            AllowedValues::OneOf(values) => {
                let mut sorted = values.to_vec();
                sorted.sort_unstable();
                sorted
            }
            AllowedValues::Range { .. } => Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AllowedValues::OneOf(_) => serde_json::json!(self.sorted()),
            AllowedValues::Range { min, max } => serde_json::json!({ "min": min, "max": max }),
        }
    }
}

impl std::fmt::Display for AllowedValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllowedValues::OneOf(_) => write!(f, "[{}]", self.sorted().join(", ")),
            AllowedValues::Range { min, max } => write!(f, "{}..={}", min, max),
        }
    }
}

/// An input field outside its declared domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {value}. Allowed: {allowed}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
    pub allowed: AllowedValues,
}

/// Parse a wire value into its categorical type. Matching is exact.
pub fn parse_field<T: Categorical>(value: &str) -> Result<T, ValidationError> {
    T::ALL
        .iter()
        .copied()
        .find(|member| member.name() == value)
        .ok_or_else(|| ValidationError {
            field: T::FIELD,
            value: value.to_string(),
            allowed: AllowedValues::OneOf(T::NAMES),
        })
}

/// Range checks on an already typed record. Categorical membership is
/// guaranteed by the types.
pub fn validate(inputs: &PlantInputs) -> Result<(), ValidationError> {
    if !(SOIL_MOISTURE_MIN..=SOIL_MOISTURE_MAX).contains(&inputs.soil_moisture) {
        return Err(ValidationError {
            field: "soil_moisture",
            value: inputs.soil_moisture.to_string(),
            allowed: AllowedValues::Range {
                min: SOIL_MOISTURE_MIN,
                max: SOIL_MOISTURE_MAX,
            },
        });
    }
    Ok(())
}

impl TryFrom<&RecommendRequest> for PlantInputs {
    type Error = ValidationError;

    fn try_from(request: &RecommendRequest) -> Result<Self, Self::Error> {
        let inputs = PlantInputs {
            soil_moisture: request.soil_moisture,
            plant_type: parse_field(&request.plant_type)?,
            sunlight: parse_field(&request.sunlight)?,
            temperature_c: request.temperature_c,
            pot_size: parse_field(&request.pot_size)?,
            season: parse_field(&request.season)?,
        };
        validate(&inputs)?;
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RecommendRequest {
        RecommendRequest {
            soil_moisture: 35,
            plant_type: "leafy".into(),
            sunlight: "medium".into(),
            temperature_c: 22.0,
            pot_size: "medium".into(),
            season: "spring".into(),
        }
    }

    #[test]
    fn valid_request_converts() {
        let inputs = PlantInputs::try_from(&request()).unwrap();
        assert_eq!(inputs.plant_type, PlantType::Leafy);
        assert_eq!(inputs.sunlight, Sunlight::Medium);
        assert_eq!(inputs.pot_size, PotSize::Medium);
        assert_eq!(inputs.season, Season::Spring);
    }

    #[test]
    fn invalid_plant_type_names_field_and_set() {
        let mut req = request();
        req.plant_type = "cactus".into();
        let err = PlantInputs::try_from(&req).unwrap_err();
        assert_eq!(err.field, "plant_type");
        assert_eq!(err.value, "cactus");
        assert_eq!(
            err.allowed.sorted(),
            vec!["flowering", "herb", "leafy", "succulent"]
        );
        assert_eq!(
            err.to_string(),
            "Invalid plant_type: cactus. Allowed: [flowering, herb, leafy, succulent]"
        );
    }

    #[test]
    fn invalid_sunlight_pot_size_and_season() {
        let mut req = request();
        req.sunlight = "blinding".into();
        let err = PlantInputs::try_from(&req).unwrap_err();
        assert_eq!(err.field, "sunlight");
        assert_eq!(err.allowed.sorted(), vec!["high", "low", "medium"]);

        let mut req = request();
        req.pot_size = "huge".into();
        let err = PlantInputs::try_from(&req).unwrap_err();
        assert_eq!(err.field, "pot_size");
        assert_eq!(err.allowed.sorted(), vec!["large", "medium", "small"]);

        let mut req = request();
        req.season = "autumn".into();
        let err = PlantInputs::try_from(&req).unwrap_err();
        assert_eq!(err.field, "season");
        assert_eq!(err.allowed.sorted(), vec!["fall", "spring", "summer", "winter"]);
    }

    #[test]
    fn wire_matching_is_exact() {
        let mut req = request();
        req.plant_type = "Leafy".into();
        assert!(PlantInputs::try_from(&req).is_err());
    }

    #[test]
    fn categorical_checked_before_moisture() {
        let mut req = request();
        req.soil_moisture = 500;
        req.season = "monsoon".into();
        let err = PlantInputs::try_from(&req).unwrap_err();
        assert_eq!(err.field, "season");
    }

    #[test]
    fn soil_moisture_bounds() {
        for bad in [-1, 101] {
            let mut req = request();
            req.soil_moisture = bad;
            let err = PlantInputs::try_from(&req).unwrap_err();
            assert_eq!(err.field, "soil_moisture");
            assert_eq!(err.value, bad.to_string());
            assert_eq!(err.allowed, AllowedValues::Range { min: 0, max: 100 });
        }
        for good in [0, 100] {
            let mut req = request();
            req.soil_moisture = good;
            assert!(PlantInputs::try_from(&req).is_ok());
        }
    }

    #[test]
    fn moisture_error_message() {
        let mut req = request();
        req.soil_moisture = 101;
        let err = PlantInputs::try_from(&req).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid soil_moisture: 101. Allowed: 0..=100"
        );
    }

    #[test]
    fn allowed_table_covers_every_field() {
        let fields: Vec<_> = ALLOWED_VALUES.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec!["plant_type", "sunlight", "pot_size", "season"]);
        assert_eq!(ALLOWED_VALUES[0].1, PlantType::NAMES);
        assert_eq!(ALLOWED_VALUES[3].1, Season::NAMES);
    }

    #[test]
    fn allowed_values_json() {
        let one_of = AllowedValues::OneOf(Sunlight::NAMES).to_json();
        assert_eq!(one_of, serde_json::json!(["high", "low", "medium"]));
        let range = AllowedValues::Range { min: 0, max: 100 }.to_json();
        assert_eq!(range, serde_json::json!({ "min": 0, "max": 100 }));
    }
}
