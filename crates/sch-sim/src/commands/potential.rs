use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use log::info;
use sch_core::{RunContext, SchError, SessionConfig};
use sch_potential::PotentialField;
use serde::Serialize;

use super::problem::ProblemFile;

#[derive(Args, Debug)]
pub struct PotentialArgs {
    /// YAML problem file declaring the basis axes and the potential shape.
    #[arg(long)]
    pub problem: PathBuf,
}

#[derive(Debug, Serialize)]
struct PotentialSummary {
    preset: String,
    shape: String,
    continuous_axes: usize,
    discrete_axes: usize,
    samples: usize,
    min: Option<f64>,
    max: Option<f64>,
    potential_file: Option<PathBuf>,
    basis_file: Option<PathBuf>,
    reported: Vec<SchError>,
}

pub fn run(args: &PotentialArgs, config: SessionConfig) -> Result<(), Box<dyn Error>> {
    let (basis, shape) = ProblemFile::load(&args.problem)?.into_parts()?;
    let mut ctx = RunContext::init(config);

    let reported_before = ctx.reported().len();
    let field = PotentialField::from_shape(basis, shape, &mut ctx)?;
    let potential_file = (ctx.output().persist_potential
        && ctx.reported().len() == reported_before)
        .then(|| ctx.output().potential_path());
    let basis_path = ctx.output().basis_path();
    let basis_written = field.basis().write_dump(&basis_path);
    let basis_file = ctx.record(basis_written).map(|()| basis_path);

    let combined = field.combined()?;
    let min = combined.iter().copied().reduce(f64::min);
    let max = combined.iter().copied().reduce(f64::max);
    info!("evaluated {} potential over {} samples", shape.kind(), combined.len());

    let summary = PotentialSummary {
        preset: field.basis().preset().to_string(),
        shape: field.kind().to_string(),
        continuous_axes: field.basis().continuous().len(),
        discrete_axes: field.basis().discrete().len(),
        samples: combined.len(),
        min,
        max,
        potential_file,
        basis_file,
        reported: ctx.take_reported(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
