use crate::error::{PlantbookError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";
const DEFAULT_PLACEHOLDER: &str = "[no photo]";

pub const KEYS: &[&str] = &["date-format", "placeholder", "photo-mode"];

/// How a picked photo file is turned into a photo reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoMode {
    /// `file://` URI pointing at the picked file
    #[default]
    Uri,
    /// `data:` URI carrying the image bytes
    Embed,
}

impl fmt::Display for PhotoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoMode::Uri => write!(f, "uri"),
            PhotoMode::Embed => write!(f, "embed"),
        }
    }
}

impl FromStr for PhotoMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uri" => Ok(PhotoMode::Uri),
            "embed" => Ok(PhotoMode::Embed),
            other => Err(format!(
                "Invalid photo-mode: {} (expected uri or embed)",
                other
            )),
        }
    }
}

/// Configuration for plantbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantbookConfig {
    /// chrono format string for the "Added:" date
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Text shown in place of a missing photo
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub photo_mode: PhotoMode,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for PlantbookConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            placeholder: default_placeholder(),
            photo_mode: PhotoMode::default(),
        }
    }
}

impl PlantbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PlantbookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "date-format" => Some(self.date_format.clone()),
            "placeholder" => Some(self.placeholder.clone()),
            "photo-mode" => Some(self.photo_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "date-format" => {
                validate_date_format(value)?;
                self.date_format = value.to_string();
            }
            "placeholder" => self.placeholder = value.to_string(),
            "photo-mode" => {
                self.photo_mode = value.parse().map_err(PlantbookError::Config)?;
            }
            other => {
                return Err(PlantbookError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// Renders an "added" timestamp in local time. A `date_format` that chrono cannot
    /// render (hand-edited config file) falls back to the default.
    pub fn format_added(&self, at: &DateTime<Utc>) -> String {
        self.format_added_in(at, &Local)
    }

    pub fn format_added_in<Tz>(&self, at: &DateTime<Utc>, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let format = if validate_date_format(&self.date_format).is_ok() {
            self.date_format.as_str()
        } else {
            DEFAULT_DATE_FORMAT
        };
        at.with_timezone(tz).format(format).to_string()
    }

    /// All keys with their current values, in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

fn validate_date_format(format: &str) -> Result<()> {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(PlantbookError::Config(format!(
            "Invalid date-format: {}",
            format
        )));
    }
    Ok(())
}
