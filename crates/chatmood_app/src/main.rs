mod app;
mod cli;
mod config;
mod effects;
mod render;

use std::process::ExitCode;

use chatmood_core::WorkflowStatus;
use chatmood_logging::mood_error;
use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    chatmood_logging::initialize(cli.log_destination(), cli.log_level());

    match app::run(&cli) {
        Ok(view) if view.status == WorkflowStatus::Success => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            mood_error!("{err:#}");
            eprintln!("chatmood: {err:#}");
            ExitCode::from(2)
        }
    }
}
