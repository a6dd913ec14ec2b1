//! User settings for FinFlow
//!
//! Manages display preferences, the budget warning threshold and overrides
//! for the category color palette.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::FinflowPaths;
use crate::error::FinflowError;
use crate::models::{Category, CategoryPalette, DEFAULT_WARNING_THRESHOLD, FALLBACK_COLOR};

/// User settings for FinFlow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Percent of a budget above which it is flagged as a warning
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: u8,

    /// How many transactions `transaction list` shows by default
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Per-category color overrides, merged over the built-in palette
    #[serde(default)]
    pub category_colors: BTreeMap<Category, String>,

    /// Color for categories missing from the palette
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_warning_threshold() -> u8 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_recent_limit() -> usize {
    20
}

fn default_fallback_color() -> String {
    FALLBACK_COLOR.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            warning_threshold: default_warning_threshold(),
            recent_limit: default_recent_limit(),
            category_colors: BTreeMap::new(),
            fallback_color: default_fallback_color(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinflowPaths) -> Result<Self, FinflowError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinflowError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinflowError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.warning_threshold > 100 {
            return Err(FinflowError::Config(format!(
                "warning_threshold must be between 0 and 100, got {}",
                settings.warning_threshold
            )));
        }

        if !is_valid_date_format(&settings.date_format) {
            return Err(FinflowError::Config(format!(
                "date_format '{}' is not a valid strftime format",
                settings.date_format
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinflowPaths) -> Result<(), FinflowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinflowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinflowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Build the category palette: built-in colors with user overrides applied
    pub fn palette(&self) -> CategoryPalette {
        let base = Category::ALL
            .iter()
            .fold(CategoryPalette::empty(&self.fallback_color), |p, c| {
                p.with_color(*c, c.default_color())
            });

        self.category_colors
            .iter()
            .fold(base, |p, (category, color)| {
                if color.is_empty() {
                    p.without(*category)
                } else {
                    p.with_color(*category, color.clone())
                }
            })
    }
}

/// Whether chrono can render a calendar date with this strftime string
///
/// Time-of-day specifiers such as `%H` parse fine but fail when applied to a
/// date, so a sample date is rendered as well.
fn is_valid_date_format(format: &str) -> bool {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }

    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::MIN.format(format)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.warning_threshold, 80);
        assert_eq!(settings.recent_limit, 20);
        assert_eq!(settings.palette(), CategoryPalette::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.warning_threshold = 90;
        settings
            .category_colors
            .insert(Category::Travel, "#000000".into());

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.warning_threshold, 80);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"warning_threshold": 150}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinflowError::Config(_)));
    }

    #[test]
    fn test_palette_overrides() {
        let mut settings = Settings::default();
        settings
            .category_colors
            .insert(Category::Shopping, "#111111".into());
        settings.category_colors.insert(Category::Travel, String::new());
        settings.fallback_color = "#222222".into();

        let palette = settings.palette();
        assert_eq!(palette.color_for(Category::Shopping), "#111111");
        assert_eq!(palette.color_for(Category::Travel), "#222222");
        assert_eq!(palette.color_for(Category::FoodDining), "#FF6B6B");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinflowError::Config(_)));
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(is_valid_date_format("%b %e, %Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%Y-%"));
        assert!(!is_valid_date_format("%Y %H:%M"));
        assert!(!is_valid_date_format(""));
    }
}
