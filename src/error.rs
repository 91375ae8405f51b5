use thiserror::Error;

#[derive(Error, Debug)]
pub enum MidToIsoError {
    #[error("Unmatching country: {country}")]
    UnmatchedCountry { mid: String, country: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MidToIsoError>;
