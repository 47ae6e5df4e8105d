use std::error::Error;

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the package name and snapshot schema versions as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    basis_schema: String,
    state_schema: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let basis = sch_basis::serde::BASIS_SCHEMA;
    let state = sch_state::serde::STATE_SCHEMA;
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        basis_schema: format!("{}.{}.{}", basis.major, basis.minor, basis.patch),
        state_schema: format!("{}.{}.{}", state.major, state.minor, state.patch),
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
