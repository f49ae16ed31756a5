//! CLI entrypoint for `nifgen`.

mod cli;

use clap::Parser;
use nifgen::config;
use nifgen::error::NifgenError;
use nifgen::io::{self, Output};
use nifgen::pipeline;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    run().map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), NifgenError> {
    let args = Args::parse();
    let generator = args.command.generator()?;
    let settings = config::load(args.config.as_deref(), &args.command.overrides())?;

    let sources = io::read_sources(args.command.sources())?;
    let text = pipeline::generate(&generator, &sources, &settings)?;

    let output = Output::open(args.command.output().map(|path| path.as_path()))?;
    output.write_text(&text)
}
