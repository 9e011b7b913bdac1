use crate::config::Config;
use crate::error::{PlantOpsError, Result};
use crate::models::{PlantInputs, PlantType, PotSize, Recommendation, Season, Sunlight};

pub const TEMP_MIN_C: f64 = -10.0;
pub const TEMP_MAX_C: f64 = 45.0;
pub const TEMP_STEP_C: f64 = 0.5;
pub const MOISTURE_STEP: i64 = 1;
pub const MOISTURE_LARGE_STEP: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SoilMoisture,
    PlantType,
    PotSize,
    Sunlight,
    Temperature,
    Season,
    Submit,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::SoilMoisture,
            FormField::PlantType,
            FormField::PotSize,
            FormField::Sunlight,
            FormField::Temperature,
            FormField::Season,
            FormField::Submit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::SoilMoisture => "Soil moisture (%)",
            FormField::PlantType => "Plant type",
            FormField::PotSize => "Pot size",
            FormField::Sunlight => "Sunlight",
            FormField::Temperature => "Temperature (°C)",
            FormField::Season => "Season",
            FormField::Submit => "Get Recommendation",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::SoilMoisture => FormField::PlantType,
            FormField::PlantType => FormField::PotSize,
            FormField::PotSize => FormField::Sunlight,
            FormField::Sunlight => FormField::Temperature,
            FormField::Temperature => FormField::Season,
            FormField::Season => FormField::Submit,
            FormField::Submit => FormField::SoilMoisture,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::SoilMoisture => FormField::Submit,
            FormField::PlantType => FormField::SoilMoisture,
            FormField::PotSize => FormField::PlantType,
            FormField::Sunlight => FormField::PotSize,
            FormField::Temperature => FormField::Sunlight,
            FormField::Season => FormField::Temperature,
            FormField::Submit => FormField::Season,
        }
    }
}

/// Step to the neighbouring option, wrapping at either end.
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next]
}

pub struct FormState {
    pub inputs: PlantInputs,
    pub focused_field: FormField,
    pub editing: bool,
    pub edit_buffer: String,
}

impl FormState {
    pub fn new(inputs: PlantInputs) -> Self {
        Self {
            inputs: PlantInputs {
                temperature_c: inputs.temperature_c.clamp(TEMP_MIN_C, TEMP_MAX_C),
                ..inputs
            },
            focused_field: FormField::SoilMoisture,
            editing: false,
            edit_buffer: String::new(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Move the focused widget one step right (`forward`) or left.
    pub fn step(&mut self, forward: bool) {
        let inputs = &mut self.inputs;
        match self.focused_field {
            FormField::SoilMoisture => {
                let delta = if forward { MOISTURE_STEP } else { -MOISTURE_STEP };
                inputs.soil_moisture = (inputs.soil_moisture + delta).clamp(0, 100);
            }
            FormField::PlantType => {
                inputs.plant_type = cycle(PlantType::ALL, inputs.plant_type, forward);
            }
            FormField::PotSize => {
                inputs.pot_size = cycle(PotSize::ALL, inputs.pot_size, forward);
            }
            FormField::Sunlight => {
                inputs.sunlight = cycle(Sunlight::ALL, inputs.sunlight, forward);
            }
            FormField::Temperature => {
                let delta = if forward { TEMP_STEP_C } else { -TEMP_STEP_C };
                inputs.temperature_c = (inputs.temperature_c + delta).clamp(TEMP_MIN_C, TEMP_MAX_C);
            }
            FormField::Season => {
                inputs.season = cycle(Season::ALL, inputs.season, forward);
            }
            FormField::Submit => {}
        }
    }

    /// PgUp/PgDn on the moisture slider
    pub fn step_large(&mut self, forward: bool) {
        if self.focused_field == FormField::SoilMoisture {
            let delta = if forward {
                MOISTURE_LARGE_STEP
            } else {
                -MOISTURE_LARGE_STEP
            };
            self.inputs.soil_moisture = (self.inputs.soil_moisture + delta).clamp(0, 100);
        } else {
            self.step(forward);
        }
    }

    pub fn start_editing(&mut self) {
        if self.focused_field == FormField::Temperature {
            self.editing = true;
            self.edit_buffer = format!("{:.1}", self.inputs.temperature_c);
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Apply the typed temperature. Returns an error message if the text is
    /// not a number; values outside the widget bounds are clamped.
    pub fn finish_editing(&mut self) -> std::result::Result<(), String> {
        self.editing = false;
        let text = std::mem::take(&mut self.edit_buffer);
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                self.inputs.temperature_c = value.clamp(TEMP_MIN_C, TEMP_MAX_C);
                Ok(())
            }
            _ => Err(format!("Not a temperature: '{}'", text)),
        }
    }
}

pub struct App {
    pub should_quit: bool,

    pub form: FormState,
    pub recommendation: Option<Recommendation>,
    pub error_message: Option<String>,

    pub status_message: Option<String>,
    pub submitting: bool,
    pub needs_submit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            form: FormState::new(config.form.to_inputs()),
            recommendation: None,
            error_message: None,
            status_message: None,
            submitting: false,
            needs_submit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn request_submit(&mut self) {
        self.needs_submit = true;
        self.set_status("Requesting recommendation...");
    }

    /// Record the outcome of a submission.
    pub fn apply_result(&mut self, result: Result<Recommendation>) {
        match result {
            Ok(rec) => {
                self.recommendation = Some(rec);
                self.error_message = None;
                self.set_status("Recommendation generated!");
            }
            Err(PlantOpsError::Backend { status, body }) => {
                self.recommendation = None;
                self.error_message = Some(format!("Backend error {}: {}", status, body));
                self.clear_status();
            }
            Err(e) => {
                self.recommendation = None;
                self.error_message = Some(format!("Failed to reach backend: {}", e));
                self.clear_status();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn form_starts_with_configured_defaults() {
        let app = app();
        let inputs = app.form.inputs;
        assert_eq!(inputs.soil_moisture, 35);
        assert_eq!(inputs.plant_type, PlantType::Succulent);
        assert_eq!(inputs.pot_size, PotSize::Small);
        assert_eq!(inputs.sunlight, Sunlight::Low);
        assert_eq!(inputs.season, Season::Spring);
        assert!((inputs.temperature_c - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn field_navigation_wraps() {
        let mut form = app().form;
        for _ in FormField::all() {
            form.next_field();
        }
        assert_eq!(form.focused_field, FormField::SoilMoisture);
        form.prev_field();
        assert_eq!(form.focused_field, FormField::Submit);
    }

    #[test]
    fn moisture_slider_is_bounded() {
        let mut form = app().form;
        form.inputs.soil_moisture = 99;
        form.step(true);
        form.step(true);
        assert_eq!(form.inputs.soil_moisture, 100);

        form.inputs.soil_moisture = 5;
        form.step_large(false);
        assert_eq!(form.inputs.soil_moisture, 0);
    }

    #[test]
    fn pickers_cycle_through_options() {
        let mut form = app().form;
        form.focused_field = FormField::PlantType;
        form.step(true);
        assert_eq!(form.inputs.plant_type, PlantType::Leafy);
        form.step(false);
        form.step(false);
        assert_eq!(form.inputs.plant_type, PlantType::Herb);

        form.focused_field = FormField::Season;
        for _ in Season::ALL {
            form.step(true);
        }
        assert_eq!(form.inputs.season, Season::Spring);
    }

    #[test]
    fn temperature_steps_and_bounds() {
        let mut form = app().form;
        form.focused_field = FormField::Temperature;
        form.step(true);
        assert!((form.inputs.temperature_c - 24.5).abs() < f64::EPSILON);

        form.inputs.temperature_c = 44.8;
        form.step(true);
        assert!((form.inputs.temperature_c - TEMP_MAX_C).abs() < f64::EPSILON);
    }

    #[test]
    fn temperature_editing() {
        let mut form = app().form;
        form.focused_field = FormField::Temperature;
        form.start_editing();
        assert!(form.editing);
        assert_eq!(form.edit_buffer, "24.0");

        form.edit_buffer = "31.5".into();
        assert!(form.finish_editing().is_ok());
        assert!((form.inputs.temperature_c - 31.5).abs() < f64::EPSILON);

        form.start_editing();
        form.edit_buffer = "warm".into();
        assert!(form.finish_editing().is_err());
        assert!((form.inputs.temperature_c - 31.5).abs() < f64::EPSILON);

        form.start_editing();
        form.edit_buffer = "80".into();
        assert!(form.finish_editing().is_ok());
        assert!((form.inputs.temperature_c - TEMP_MAX_C).abs() < f64::EPSILON);
    }

    #[test]
    fn editing_only_applies_to_temperature() {
        let mut form = app().form;
        form.focused_field = FormField::PlantType;
        form.start_editing();
        assert!(!form.editing);
    }

    #[test]
    fn apply_result_success_and_errors() {
        let mut app = app();
        app.apply_result(Ok(Recommendation {
            should_water_today: true,
            recommended_volume_ml: 300,
            recommended_frequency_days: 2,
            tips: Vec::new(),
            fired_rules: Vec::new(),
        }));
        assert!(app.recommendation.is_some());
        assert!(app.error_message.is_none());

        app.apply_result(Err(PlantOpsError::Backend {
            status: 422,
            body: "{\"error\":\"bad\"}".into(),
        }));
        assert!(app.recommendation.is_none());
        assert_eq!(
            app.error_message.as_deref(),
            Some("Backend error 422: {\"error\":\"bad\"}")
        );

        app.apply_result(Err(PlantOpsError::Config("offline".into())));
        assert!(app
            .error_message
            .as_deref()
            .unwrap()
            .starts_with("Failed to reach backend:"));
    }
}
