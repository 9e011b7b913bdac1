use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Succulent,
    Leafy,
    Flowering,
    Herb,
}

impl PlantType {
    pub const ALL: &'static [PlantType] = &[
        PlantType::Succulent,
        PlantType::Leafy,
        PlantType::Flowering,
        PlantType::Herb,
    ];

    pub const NAMES: &'static [&'static str] = &["succulent", "leafy", "flowering", "herb"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Succulent => "succulent",
            PlantType::Leafy => "leafy",
            PlantType::Flowering => "flowering",
            PlantType::Herb => "herb",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "succulent" => Some(PlantType::Succulent),
            "leafy" => Some(PlantType::Leafy),
            "flowering" => Some(PlantType::Flowering),
            "herb" => Some(PlantType::Herb),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sunlight {
    Low,
    Medium,
    High,
}

impl Sunlight {
    pub const ALL: &'static [Sunlight] = &[Sunlight::Low, Sunlight::Medium, Sunlight::High];

    pub const NAMES: &'static [&'static str] = &["low", "medium", "high"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sunlight::Low => "low",
            Sunlight::Medium => "medium",
            Sunlight::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Sunlight::Low),
            "medium" => Some(Sunlight::Medium),
            "high" => Some(Sunlight::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sunlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotSize {
    Small,
    Medium,
    Large,
}

impl PotSize {
    pub const ALL: &'static [PotSize] = &[PotSize::Small, PotSize::Medium, PotSize::Large];

    pub const NAMES: &'static [&'static str] = &["small", "medium", "large"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PotSize::Small => "small",
            PotSize::Medium => "medium",
            PotSize::Large => "large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Some(PotSize::Small),
            "medium" => Some(PotSize::Medium),
            "large" => Some(PotSize::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for PotSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: &'static [Season] = &[Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub const NAMES: &'static [&'static str] = &["spring", "summer", "fall", "winter"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully typed observation of one plant.
///
/// `soil_moisture` is deliberately wider than its 0-100 domain so that
/// out-of-range readings survive deserialization and are rejected by
/// validation with a proper error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantInputs {
    pub soil_moisture: i64,
    pub plant_type: PlantType,
    pub sunlight: Sunlight,
    pub temperature_c: f64,
    pub pot_size: PotSize,
    pub season: Season,
}

/// Body of `POST /recommend` as it arrives on the wire.
///
/// Categorical fields stay as strings here; conversion into [`PlantInputs`]
/// is where unknown values are turned into a `ValidationError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub soil_moisture: i64,
    pub plant_type: String,
    pub sunlight: String,
    pub temperature_c: f64,
    pub pot_size: String,
    pub season: String,
}

/// Integers, or floats with no fractional part (`22.0`).
fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(value) => Ok(value),
        Number::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Number::Float(value) => Err(D::Error::custom(format!(
            "expected a whole number, got {}",
            value
        ))),
    }
}

impl From<&PlantInputs> for RecommendRequest {
    fn from(inputs: &PlantInputs) -> Self {
        Self {
            soil_moisture: inputs.soil_moisture,
            plant_type: inputs.plant_type.as_str().to_string(),
            sunlight: inputs.sunlight.as_str().to_string(),
            temperature_c: inputs.temperature_c,
            pot_size: inputs.pot_size.as_str().to_string(),
            season: inputs.season.as_str().to_string(),
        }
    }
}
