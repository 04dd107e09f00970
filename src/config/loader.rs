use std::env;
use std::path::PathBuf;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

const DEFAULT_PROVIDED_DATA_DIR: &str = "provided_data";
const DEFAULT_DELIVERABLE_DATA_DIR: &str = "deliverable_data";

pub fn load_config(
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let provided_data_dir = input_dir
        .or_else(|| path_from_env("PROVIDED_DATA_DIR"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROVIDED_DATA_DIR));

    let deliverable_data_dir = output_dir
        .or_else(|| path_from_env("DELIVERABLE_DATA_DIR"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DELIVERABLE_DATA_DIR));

    if !provided_data_dir.is_dir() {
        return Err(AppError::configuration(format!(
            "input directory not found: {}",
            provided_data_dir.display()
        )));
    }

    Ok(AppConfig {
        provided_data_dir,
        deliverable_data_dir,
    })
}

fn path_from_env(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
