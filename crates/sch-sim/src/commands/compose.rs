use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::{info, warn};
use sch_core::{RunContext, SchError, SessionConfig};
use sch_state::QuantumState;

#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// State snapshot (JSON) to aggregate; repeat in constituent order.
    #[arg(long = "state", required = true)]
    pub states: Vec<PathBuf>,
    /// Energy assigned to the composite state.
    #[arg(long)]
    pub energy: Option<f64>,
    /// Write the composite state snapshot to this path.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

pub fn run(args: &ComposeArgs, config: SessionConfig) -> Result<(), Box<dyn Error>> {
    let states = args
        .states
        .iter()
        .map(|path| {
            let raw =
                fs::read_to_string(path).map_err(|err| SchError::io("state_read", path, err))?;
            sch_state::from_json(&raw)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut composite = QuantumState::compose(&states)?;
    if let Some(energy) = args.energy {
        composite = composite.with_energy(energy);
    }
    info!(
        "composed {} states into {} samples",
        states.len(),
        composite.wavefunction().len()
    );

    let mut ctx = RunContext::init(config);
    if !composite.persist(&mut ctx) {
        warn!("composite state was not fully persisted");
    }
    if let Some(path) = &args.snapshot {
        let json = sch_state::to_json(&composite)?;
        fs::write(path, json).map_err(|err| SchError::io("snapshot_write", path, err))?;
    }

    print!("{composite}");
    for err in ctx.take_reported() {
        eprintln!("{err}");
    }
    Ok(())
}
