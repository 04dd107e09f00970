use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("load error: {0}")]
    Load(String),
    #[error("write error: {0}")]
    Write(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn load(message: String) -> Self {
        Self::Load(message)
    }

    pub fn write(message: String) -> Self {
        Self::Write(message)
    }
}
