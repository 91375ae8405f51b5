//! Generates `match` arms mapping MMSI Maritime Identification Digits to
//! ISO 3166-1 alpha-2 country codes from the embedded ITU and ISO tables.

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod metrics;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod tables;

pub use error::{MidToIsoError, Result};
pub use generator::{GenerationReport, Generator, MappingLine};
pub use output::{Emitter, OutputFormat, OutputTarget};
