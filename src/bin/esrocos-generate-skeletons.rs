//! Skeleton generation entry point for ESROCOS projects

use clap::Parser;
use esrocos::exceptions::EsrocosError;
use esrocos::exit_codes::{
    EXIT_CONFIG_ERROR, EXIT_ERROR, EXIT_EXECUTION_ERROR, EXIT_IO_ERROR, EXIT_PANIC, EXIT_SUCCESS,
};
use esrocos::{ProjectOptions, generate_skeletons};
use std::{env, panic, path::PathBuf, process};

const VERSION: &str = esrocos::version::VERSION;

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = "Generate TASTE function skeletons from the project interface view"
)]
struct Args {
    /// Project directory (defaults to the current directory)
    #[arg(short, long)]
    project_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, json[:level])
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in esrocos-generate-skeletons");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!(
            "esrocos-generate-skeletons {}",
            esrocos::version::full_version()
        );
        return EXIT_SUCCESS;
    }

    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        esrocos::logger::JsonLogger::init_with_level(level);
    } else {
        esrocos::logger::JsonLogger::init();
    }

    let options = ProjectOptions {
        project_dir: args.project_dir,
    };

    match generate_skeletons(options) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Skeleton generation error: {}", e);
            match e {
                EsrocosError::ConfigError(_) | EsrocosError::YamlError(_) => EXIT_CONFIG_ERROR,
                EsrocosError::IoError(_) => EXIT_IO_ERROR,
                EsrocosError::CommandError(_) => EXIT_EXECUTION_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}
