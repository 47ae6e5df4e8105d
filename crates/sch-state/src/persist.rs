use log::info;
use sch_core::sink;
use sch_core::{OutputConfig, RunContext, SchError};

use crate::state::QuantumState;

impl QuantumState {
    /// Writes the basis, wavefunction and probability dumps.
    pub fn write_files(&self, output: &OutputConfig) -> Result<(), SchError> {
        self.basis().write_dump(&output.basis_path())?;
        sink::write_column(
            &output.wavefunction_path(),
            self.wavefunction().iter().copied(),
        )?;
        sink::write_column(
            &output.probability_path(),
            self.probability().iter().copied(),
        )?;
        info!(
            "persisted state with {} samples to {}",
            self.wavefunction().len(),
            output.directory.display()
        );
        Ok(())
    }

    /// Persists the state to the context's sinks and, when enabled, dumps the
    /// wavefunction for diagnostics. Failures are reported through `ctx`;
    /// returns whether the dumps were written.
    pub fn persist(&self, ctx: &mut RunContext) -> bool {
        let written = self.write_files(ctx.output());
        ctx.dump_wavefunction(self.wavefunction(), None);
        ctx.record(written).is_some()
    }
}
