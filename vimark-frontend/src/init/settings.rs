use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

use crate::{error::AppError, settings::Settings};

const SHOW_SIGNS_BEFORE_LINE_NUMBERS: &str = "show_signs_before_line_numbers";

#[tracing::instrument(skip(settings))]
pub fn load_settings_from_file(settings: &mut Settings) -> Result<(), AppError> {
    let settings_path = get_settings_path()?;
    load_from(&settings_path, settings)
}

#[tracing::instrument(skip(settings))]
pub fn save_settings_to_file(settings: &Settings) -> Result<(), AppError> {
    let settings_path = get_settings_path()?;
    save_to(&settings_path, settings)
}

fn load_from(path: &Path, settings: &mut Settings) -> Result<(), AppError> {
    if !path.exists() {
        tracing::debug!("settings file does not exist on path {:?}", path);
        return Ok(());
    }

    let settings_file = File::open(path)?;
    let mut settings_csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(settings_file);

    for result in settings_csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => return Err(AppError::LoadSettingsFailed),
        };

        let (key, value) = match (record.get(0), record.get(1)) {
            (Some(key), Some(value)) => (key, value),
            _ => continue,
        };

        match key {
            SHOW_SIGNS_BEFORE_LINE_NUMBERS => match value.parse::<bool>() {
                Ok(value) => settings.show_signs_before_line_numbers = value,
                Err(_) => tracing::warn!("invalid value {} for {}", value, key),
            },
            _ => tracing::warn!("unknown setting {}", key),
        }
    }

    tracing::trace!("settings file read");

    Ok(())
}

fn save_to(path: &Path, settings: &Settings) -> Result<(), AppError> {
    let settings_dictionary = match path.parent() {
        Some(path) => path,
        None => return Err(AppError::SettingsPathUnresolvable),
    };

    fs::create_dir_all(settings_dictionary)?;

    let settings_writer = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut writer = csv::Writer::from_writer(settings_writer);
    writer.write_record([
        SHOW_SIGNS_BEFORE_LINE_NUMBERS,
        settings.show_signs_before_line_numbers.to_string().as_str(),
    ])?;
    writer.flush()?;

    tracing::trace!("settings file written");

    Ok(())
}

fn get_settings_path() -> Result<PathBuf, AppError> {
    match dirs::config_dir() {
        Some(config_dir) => Ok(config_dir.join("vimark").join("settings")),
        None => Err(AppError::SettingsPathUnresolvable),
    }
}

#[cfg(test)]
mod tests {
    use std::process;

    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("vimark-test-{}-{}", process::id(), name))
            .join("settings")
    }

    #[test]
    fn load_missing_file_keeps_defaults() {
        let path = temp_settings_path("missing");
        let mut settings = Settings::default();

        assert!(load_from(&path, &mut settings).is_ok());
        assert!(settings.show_signs_before_line_numbers);
    }

    #[test]
    fn save_and_load_placement() {
        let path = temp_settings_path("roundtrip");
        let settings = Settings {
            show_signs_before_line_numbers: false,
            ..Default::default()
        };

        save_to(&path, &settings).expect("saving settings failed");

        let mut loaded = Settings::default();
        load_from(&path, &mut loaded).expect("loading settings failed");
        assert!(!loaded.show_signs_before_line_numbers);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn load_ignores_unknown_keys_and_invalid_values() {
        let path = temp_settings_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "unknown,1\nshow_signs_before_line_numbers,maybe\n").unwrap();

        let mut settings = Settings::default();
        assert!(load_from(&path, &mut settings).is_ok());
        assert!(settings.show_signs_before_line_numbers);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
