use anyhow::Context;
use clap::Parser;
use timeline_masker::cli::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    run(cli).context("timeline conversion failed")
}
