//! YAML-configurable session settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SchError};

/// Top-level settings shared by every component of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Numeric sink locations.
    #[serde(default)]
    pub output: OutputConfig,
    /// Per-wavefunction diagnostic dump settings.
    #[serde(default)]
    pub wavefunction_dump: WavefunctionDumpConfig,
    /// Log filter applied by front ends.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SessionConfig {
    /// Reads a YAML session file.
    pub fn load(path: &Path) -> Result<Self, SchError> {
        let raw = fs::read_to_string(path).map_err(|err| SchError::io("config_read", path, err))?;
        Self::from_yaml_str(&raw).map_err(|err| match err {
            SchError::Config(info) => {
                SchError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Parses a YAML session document.
    pub fn from_yaml_str(raw: &str) -> Result<Self, SchError> {
        serde_yaml::from_str(raw)
            .map_err(|err| SchError::Config(ErrorInfo::new("config_parse", err.to_string())))
    }

    /// Serializes the configuration back to YAML.
    pub fn to_yaml_string(&self) -> Result<String, SchError> {
        serde_yaml::to_string(self)
            .map_err(|err| SchError::Serde(ErrorInfo::new("yaml_serialize", err.to_string())))
    }
}

/// Where flat numeric dumps are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory every dump file is resolved against.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
    /// Combined potential field dump.
    #[serde(default = "default_potential_file")]
    pub potential_file: PathBuf,
    /// Continuous-axis coordinate rows.
    #[serde(default = "default_basis_file")]
    pub basis_file: PathBuf,
    /// Wavefunction samples.
    #[serde(default = "default_wavefunction_file")]
    pub wavefunction_file: PathBuf,
    /// Probability samples.
    #[serde(default = "default_probability_file")]
    pub probability_file: PathBuf,
    /// Persist shape-evaluated potentials as part of their construction.
    #[serde(default = "default_persist_potential")]
    pub persist_potential: bool,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_potential_file() -> PathBuf {
    PathBuf::from("potential.dat")
}

fn default_basis_file() -> PathBuf {
    PathBuf::from("base.dat")
}

fn default_wavefunction_file() -> PathBuf {
    PathBuf::from("wavefunction.dat")
}

fn default_probability_file() -> PathBuf {
    PathBuf::from("probability.dat")
}

fn default_persist_potential() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            potential_file: default_potential_file(),
            basis_file: default_basis_file(),
            wavefunction_file: default_wavefunction_file(),
            probability_file: default_probability_file(),
            persist_potential: default_persist_potential(),
        }
    }
}

impl OutputConfig {
    /// Output settings rooted at `directory` with default file names.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Resolved path of the potential dump.
    pub fn potential_path(&self) -> PathBuf {
        self.directory.join(&self.potential_file)
    }

    /// Resolved path of the basis dump.
    pub fn basis_path(&self) -> PathBuf {
        self.directory.join(&self.basis_file)
    }

    /// Resolved path of the wavefunction dump.
    pub fn wavefunction_path(&self) -> PathBuf {
        self.directory.join(&self.wavefunction_file)
    }

    /// Resolved path of the probability dump.
    pub fn probability_path(&self) -> PathBuf {
        self.directory.join(&self.probability_file)
    }
}

/// Diagnostic dump of individual wavefunctions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavefunctionDumpConfig {
    /// Whether dumps are written at all.
    #[serde(default)]
    pub enabled: bool,
    /// Directory receiving one file per dump. Relative paths are resolved
    /// against `output.directory`.
    #[serde(default = "default_dump_directory")]
    pub directory: PathBuf,
}

fn default_dump_directory() -> PathBuf {
    PathBuf::from("wavefunctions")
}

impl Default for WavefunctionDumpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: default_dump_directory(),
        }
    }
}

/// Log filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `env_logger` style filter, e.g. `warn` or `sch_potential=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
