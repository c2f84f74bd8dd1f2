use clap::Parser;
use ipv4_cidr_tools::cli::{run, write_usage, Cli};
use ipv4_cidr_tools::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose, cli.log_config.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    log::info!("#Start main()");

    if !cli.has_operation() {
        if let Err(e) = write_usage(&mut std::io::stdout()) {
            eprintln!("Error printing help: {e}");
        }
        return ExitCode::FAILURE;
    }

    match run(&cli, &mut std::io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
