use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Loading settings failed")]
    LoadSettingsFailed,
    #[error("Writing settings failed")]
    SaveSettingsFailed(#[from] csv::Error),
    #[error("Settings path could not be resolved")]
    SettingsPathUnresolvable,
}
