//! Command line interface for the release packager.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::{
    error::{CliError, Result},
    release::Releaser,
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime = RuntimeConfig::from(&args);
    let settings = args.to_settings()?;
    log::debug!("Release settings: {:?}", settings);

    Releaser::new(settings).release(&runtime).await?;
    Ok(0)
}
