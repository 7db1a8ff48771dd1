//! CLI entrypoint for `enameg`.

use std::io::Write;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use enameg::cli::Args;
use enameg::output::{default_output_path, write_generated};
use enameg::{EnamegError, FileSet, generate};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let args = match Args::try_parse() {
        Ok(parsed) => parsed,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            write!(std::io::stderr().lock(), "{}", err.render())?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };
    run(&args).map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), EnamegError> {
    if args.paths.is_empty() {
        debug!("no input paths given");
        return Ok(());
    }

    let files = FileSet::resolve(&args.paths)?;
    let Some(generated) = generate(&files, &args.generate_options())? else {
        return Ok(());
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&files, &generated.package_name));
    write_generated(&output, &generated.source)
}
