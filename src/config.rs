use crate::error::{PlantOpsError, Result};
use crate::models::{PlantInputs, PlantType, PotSize, Season, Sunlight};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub client: ClientConfig,
    #[serde(default)]
    pub form: FormDefaults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_enabled")]
    pub cors_permissive: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Ports may be written as numbers or come from `${VAR}` substitution as text.
fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Number(u16),
        Text(String),
    }

    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(value) => value.trim().parse::<u16>().map_err(|_| {
            D::Error::custom(format!(
                "invalid port '{}' - ensure PLANTOPS_PORT environment variable is set",
                value
            ))
        }),
    }
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    pub backend_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Initial values of the advisor form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormDefaults {
    pub soil_moisture: i64,
    pub plant_type: String,
    pub sunlight: String,
    pub temperature_c: f64,
    pub pot_size: String,
    pub season: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            soil_moisture: 35,
            plant_type: "succulent".into(),
            sunlight: "low".into(),
            temperature_c: 24.0,
            pot_size: "small".into(),
            season: "spring".into(),
        }
    }
}

impl FormDefaults {
    /// Unknown or misspelled values fall back to the first option of each picker.
    pub fn to_inputs(&self) -> PlantInputs {
        PlantInputs {
            soil_moisture: self.soil_moisture.clamp(0, 100),
            plant_type: PlantType::from_str(&self.plant_type).unwrap_or(PlantType::Succulent),
            sunlight: Sunlight::from_str(&self.sunlight).unwrap_or(Sunlight::Low),
            temperature_c: self.temperature_c,
            pot_size: PotSize::from_str(&self.pot_size).unwrap_or(PotSize::Small),
            season: Season::from_str(&self.season).unwrap_or(Season::Spring),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the standard locations.
    ///
    /// An explicit path must exist. Without one, a missing file means the
    /// built-in defaults are used.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(PlantOpsError::Config(format!(
                        "Config file not found at {:?}. Run `plantops init` to set up.",
                        p
                    )));
                }
                p
            }
            None => {
                let p = Self::find_config_path()?;
                if !p.exists() {
                    tracing::info!("No config file found, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| PlantOpsError::Config(format!("Failed to read config: {}", e)))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Self::from_yaml_str(&config_str)
    }

    /// Parse YAML after substituting `${VAR}` references from the environment.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        serde_yaml::from_str(&content)
            .map_err(|e| PlantOpsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let xdg_config = Self::default_config_path()?;
        Ok(xdg_config)
    }

    /// Default path for writing new config files (~/.config/plantops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlantOpsError::Config("Cannot determine config directory".into()))?
            .join("plantops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        let defaults = Self::default();

        println!();
        println!("Let's set up PlantOps!");
        println!();

        // --- API server ---
        println!("Recommendation API");
        let host: String = Input::new()
            .with_prompt("  Bind host")
            .default(defaults.server.host.clone())
            .interact_text()
            .map_err(|e| PlantOpsError::Config(format!("Input error: {}", e)))?;

        let port: u16 = Input::new()
            .with_prompt("  Port")
            .default(defaults.server.port)
            .interact_text()
            .map_err(|e| PlantOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        // --- Advisor form ---
        println!("Advisor form");
        let backend_url: String = Input::new()
            .with_prompt("  Backend URL")
            .default(format!("http://127.0.0.1:{}", port))
            .interact_text()
            .map_err(|e| PlantOpsError::Config(format!("Input error: {}", e)))?;

        let timeout_secs: u64 = Input::new()
            .with_prompt("  Request timeout (seconds)")
            .default(defaults.client.timeout_secs)
            .interact_text()
            .map_err(|e| PlantOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            server: ServerConfig {
                host,
                port,
                ..defaults.server
            },
            client: ClientConfig {
                backend_url,
                timeout_secs,
            },
            form: defaults.form,
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| PlantOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# PlantOps Configuration\n# Generated by `plantops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| PlantOpsError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8000,
                max_body_bytes: default_max_body_bytes(),
                cors_permissive: true,
            },
            client: ClientConfig {
                backend_url: "http://127.0.0.1:8000".into(),
                timeout_secs: default_timeout_secs(),
            },
            form: FormDefaults::default(),
        }
    }
}
