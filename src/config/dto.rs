use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provided_data_dir: PathBuf,
    pub deliverable_data_dir: PathBuf,
}
