use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "filepick", about = "Terminal file selection dialog")]
struct Args {
    /// Directory to start browsing in (defaults to the working directory).
    path: Option<PathBuf>,

    /// Append debug logs to this file (stderr belongs to the dialog).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(file) = std::fs::File::create(path) {
            let _ = WriteLogger::init(LevelFilter::Debug, config, file);
        }
    }

    match filepick::select(args.path) {
        Ok(selection) => {
            for path in selection {
                println!("{path}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("filepick: {e}");
            ExitCode::FAILURE
        }
    }
}
