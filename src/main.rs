use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use buildutil::logging::init_logging;
use buildutil::runner::ProcessRunner;
use buildutil::version;

/// Read and validate a 'major.minor.patch' version file
#[derive(Parser, Debug)]
#[command(name = "verfile")]
#[command(about = "Read and validate a 'major.minor.patch' version file")]
#[command(version)]
#[command(long_version = format!("{} ({})", env!("CARGO_PKG_VERSION"), buildutil::build_git_hash()))]
struct Args {
    /// Version file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Directory whose git history supplies the revision hash
    #[arg(short = 'g', long = "git-dir", value_name = "DIR")]
    git_dir: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.log_level.as_deref()) {
        eprintln!("Failed to initialize logging: {}", err);
    }

    let runner = ProcessRunner;
    let result = match &args.git_dir {
        Some(dir) => version::read_version_with_revision(&args.file, dir, &runner),
        None => version::read_version(&args.file),
    };

    match result {
        Ok(info) => {
            match &info.revision {
                Some(rev) => println!("{} ({})", info.raw, rev),
                None => println!("{}", info.raw),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("FATAL: {}", err);
            ExitCode::FAILURE
        }
    }
}
