#![deny(missing_docs)]
#![doc = "Core types for the Schroedinger engine: errors, Cartesian enumeration, session configuration and the run context."]

pub mod cartesian;
pub mod config;
pub mod context;
pub mod errors;
pub mod schema;
pub mod sink;

pub use cartesian::{
    cartesian_len, cartesian_rows, cartesian_sums, checked_cartesian_len, CartesianIndices,
};
pub use config::{LoggingConfig, OutputConfig, SessionConfig, WavefunctionDumpConfig};
pub use context::RunContext;
pub use errors::{ErrorInfo, SchError};
pub use schema::SchemaVersion;
