//! `snakediff` - compare two files line by line.

use std::process::ExitCode;

use clap::Parser;
use snakediff_kernel::cli::{self, Cli};
use snakediff_kernel::infrastructure::{config::Settings, telemetry::TelemetryBuilder};
use tracing::error;

fn main() -> ExitCode {
    let args = Cli::parse();

    let mut settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("snakediff: failed to load configuration: {e}");
            return ExitCode::from(2);
        }
    };
    args.apply_overrides(&mut settings);

    if let Err(e) = TelemetryBuilder::new("snakediff")
        .with_log_level(settings.telemetry.log_level.clone())
        .with_json(settings.telemetry.json)
        .init()
    {
        eprintln!("snakediff: {e:#}");
        return ExitCode::from(2);
    }

    let stdout = std::io::stdout();
    match cli::run(&args, &settings, &mut stdout.lock()) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            error!("{e:#}");
            eprintln!("snakediff: {e:#}");
            ExitCode::from(2)
        }
    }
}
