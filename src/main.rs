use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use vet::{Options, Outcome};
use vet::tui::prompt::DEFAULT_QUESTION;

#[derive(Parser)]
#[command(
    name = "vet",
    version,
    about = "Ask about each line of stdin and pass the approved ones to stdout"
)]
struct Args {
    /// Question shown after each line
    #[arg(short, long, default_value = DEFAULT_QUESTION)]
    question: String,

    /// Write a debug log to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let log_config = ConfigBuilder::new()
            .set_time_format_rfc3339()
            .build();

        match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
            }
            Err(e) => eprintln!("vet: cannot open log file {}: {e}", path.display()),
        }
    }

    log::info!("Vet starting up, question: {:?}", args.question);

    match vet::tui::run(Options {
        question: args.question,
    }) {
        Ok(Outcome::Terminated(signal)) => {
            log::info!("Terminated by signal {}", signal);
            ExitCode::from(u8::try_from(128 + signal).unwrap_or(u8::MAX))
        }
        Ok(outcome) => {
            log::info!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("Failed: {}", e);
            eprintln!("vet: {e}");
            ExitCode::FAILURE
        }
    }
}
