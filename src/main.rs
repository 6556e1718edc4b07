//! hublint - scenario taxonomy generator for detection hubs

use clap::Parser;

use hublint::cli::Cli;
use hublint::error::ExitCode;
use hublint::observability::{LogFormat, init_logging};
use hublint::pipeline::{self, PipelineOptions};

fn main() {
    let cli = Cli::parse();

    init_logging(LogFormat::Human, cli.verbose);

    match run(&cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> hublint::error::Result<()> {
    let hub = cli.require_hub()?;

    let options = PipelineOptions {
        hub: hub.clone(),
        output: cli.output.clone(),
        errors: cli.errors.clone(),
        behaviors: cli.behaviors.clone(),
        mitre: cli.mitre.clone(),
    };

    pipeline::run(&options)?;
    Ok(())
}
