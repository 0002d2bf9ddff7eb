//! Estimator settings loaded from TOML.
//!
//! - `parse_settings_toml(toml_content)` parses and validates custom settings
//! - `Settings::default()` uses the embedded `default_settings.toml`
//! - `default_toml()` returns the embedded defaults for export

use serde::Deserialize;

use crate::shape::Category;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub suffix: SuffixSettings,
    pub cutoff: CutoffSettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuffixSettings {
    pub max_suffix_length: usize,
    pub max_tags: usize,
}

/// Per-category training cutoffs on total word frequency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CutoffSettings {
    pub upper_max_freq: u64,
    pub lower_max_freq: u64,
    pub dash_max_freq: u64,
    pub cardinal_max_freq: u64,
}

impl CutoffSettings {
    /// Same cutoff for every category.
    pub fn uniform(max_freq: u64) -> Self {
        Self {
            upper_max_freq: max_freq,
            lower_max_freq: max_freq,
            dash_max_freq: max_freq,
            cardinal_max_freq: max_freq,
        }
    }

    pub fn for_category(&self, category: Category) -> u64 {
        match category {
            Category::Cardinal => self.cardinal_max_freq,
            Category::Capitalized => self.upper_max_freq,
            Category::Hyphenated => self.dash_max_freq,
            Category::Lowercase => self.lower_max_freq,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.suffix.max_tags == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suffix.max_tags".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    // Cutoffs and max_suffix_length may be zero; negatives are rejected by
    // the unsigned types at parse time.

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.suffix.max_suffix_length, 10);
        assert_eq!(s.suffix.max_tags, 10);
        assert_eq!(s.cutoff, CutoffSettings::uniform(10));
        assert_eq!(Settings::default(), s);
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[suffix]
max_suffix_length = 5
max_tags = 2

[cutoff]
upper_max_freq = 1
lower_max_freq = 2
dash_max_freq = 3
cardinal_max_freq = 0
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.suffix.max_suffix_length, 5);
        assert_eq!(s.suffix.max_tags, 2);
        assert_eq!(s.cutoff.for_category(Category::Capitalized), 1);
        assert_eq!(s.cutoff.for_category(Category::Lowercase), 2);
        assert_eq!(s.cutoff.for_category(Category::Hyphenated), 3);
        assert_eq!(s.cutoff.for_category(Category::Cardinal), 0);
    }

    #[test]
    fn error_zero_max_tags() {
        let toml = r#"
[suffix]
max_suffix_length = 5
max_tags = 0

[cutoff]
upper_max_freq = 10
lower_max_freq = 10
dash_max_freq = 10
cardinal_max_freq = 10
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("suffix.max_tags"));
    }

    #[test]
    fn error_negative_cutoff() {
        let toml = r#"
[suffix]
max_suffix_length = 5
max_tags = 3

[cutoff]
upper_max_freq = -1
lower_max_freq = 10
dash_max_freq = 10
cardinal_max_freq = 10
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[suffix]
max_suffix_length = 5
max_tags = 3
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
