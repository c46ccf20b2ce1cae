use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefinanceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config file already exists: {path}")]
    ConfigExists { path: String },

    #[error("nothing to export: calculate first")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, RefinanceError>;
