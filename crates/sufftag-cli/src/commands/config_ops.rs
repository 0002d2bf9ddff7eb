use std::fs;

use sufftag_core::settings::{self, Settings};

use super::CommandResult;

pub fn settings_export() -> CommandResult {
    print!("{}", settings::default_toml());
    Ok(())
}

pub fn settings_validate(file: &str) -> CommandResult {
    let s = load_settings(file)?;
    println!(
        "OK: suffix.max_suffix_length={}, suffix.max_tags={}, cutoff.upper_max_freq={}, \
         cutoff.lower_max_freq={}, cutoff.dash_max_freq={}, cutoff.cardinal_max_freq={}",
        s.suffix.max_suffix_length,
        s.suffix.max_tags,
        s.cutoff.upper_max_freq,
        s.cutoff.lower_max_freq,
        s.cutoff.dash_max_freq,
        s.cutoff.cardinal_max_freq,
    );
    Ok(())
}

/// Read and validate a settings file.
pub fn load_settings(file: &str) -> Result<Settings, String> {
    let content = fail!(fs::read_to_string(file), "Error reading {file}: {}");
    Ok(fail!(settings::parse_settings_toml(&content), "Error: {}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_settings_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_settings(path.to_str().unwrap()).unwrap_err();
        assert!(err.starts_with("Error reading"), "{err}");
    }

    #[test]
    fn test_load_settings_invalid_value_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        let toml = settings::default_toml().replace("max_tags = 10", "max_tags = 0");
        fs::write(&path, toml).unwrap();
        let err = load_settings(path.to_str().unwrap()).unwrap_err();
        assert!(err.contains("suffix.max_tags"), "{err}");
    }

    #[test]
    fn test_load_settings_defaults_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, settings::default_toml()).unwrap();
        assert_eq!(load_settings(path.to_str().unwrap()).unwrap(), Settings::default());
    }
}
