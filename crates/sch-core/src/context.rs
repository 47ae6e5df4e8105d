//! Explicitly passed run context.
//!
//! Holds the session configuration, every non-fatal error reported while the
//! session ran, and the counter used to name wavefunction dumps. Components
//! that persist data as a side effect take `&mut RunContext` instead of
//! reaching for process-wide state.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use crate::config::{OutputConfig, SessionConfig};
use crate::errors::SchError;
use crate::sink;

/// Session-scoped configuration and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    config: SessionConfig,
    reported: Vec<SchError>,
    next_dump_id: usize,
}

impl RunContext {
    /// Wraps a configuration without touching the filesystem.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            reported: Vec::new(),
            next_dump_id: 0,
        }
    }

    /// Creates a context and, when wavefunction dumps are enabled, resets
    /// the dump directory (removes it and recreates it empty).
    pub fn init(config: SessionConfig) -> Self {
        let mut ctx = Self::new(config);
        if ctx.config.wavefunction_dump.enabled {
            let dir = ctx.dump_directory();
            if dir.exists() {
                let removed = fs::remove_dir_all(&dir)
                    .map_err(|err| SchError::io("dump_reset", &dir, err));
                ctx.record(removed);
            }
            let created =
                fs::create_dir_all(&dir).map_err(|err| SchError::io("dump_create_dir", &dir, err));
            ctx.record(created);
        }
        ctx
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Output sink settings.
    pub fn output(&self) -> &OutputConfig {
        &self.config.output
    }

    /// Records a non-fatal error and logs it.
    pub fn report(&mut self, err: SchError) {
        warn!("{err}");
        self.reported.push(err);
    }

    /// Unwraps `result`, reporting the error instead of propagating it.
    pub fn record<T>(&mut self, result: Result<T, SchError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    /// Errors reported so far, in order.
    pub fn reported(&self) -> &[SchError] {
        &self.reported
    }

    /// Drains the reported errors.
    pub fn take_reported(&mut self) -> Vec<SchError> {
        std::mem::take(&mut self.reported)
    }

    /// Directory receiving wavefunction dumps.
    pub fn dump_directory(&self) -> PathBuf {
        self.config
            .output
            .directory
            .join(&self.config.wavefunction_dump.directory)
    }

    /// Writes `wavefunction` to its own file when dumps are enabled.
    ///
    /// Unnamed dumps are numbered `wf_<n>.dat`; the counter advances on every
    /// call. Returns the path written, or `None` when disabled or on failure.
    pub fn dump_wavefunction(&mut self, wavefunction: &[f64], name: Option<&str>) -> Option<PathBuf> {
        if !self.config.wavefunction_dump.enabled {
            return None;
        }
        let id = self.next_dump_id;
        self.next_dump_id += 1;
        let stem = name.map_or_else(|| format!("wf_{id}"), str::to_owned);
        let path = self.dump_directory().join(format!("{stem}.dat"));
        debug!("dumping {} wavefunction samples to {}", wavefunction.len(), path.display());
        let written = sink::write_rows(&path, wavefunction.iter().map(std::slice::from_ref));
        self.record(written).map(|()| path)
    }
}
