//! ROS message to ASN.1 conversion entry point

use clap::Parser;
use esrocos::exceptions::EsrocosError;
use esrocos::exit_codes::{
    EXIT_ERROR, EXIT_GENERATION_ERROR, EXIT_IO_ERROR, EXIT_PANIC, EXIT_SUCCESS,
};
use esrocos::{ConvertOptions, convert_messages};
use std::{env, panic, path::PathBuf, process};

const VERSION: &str = esrocos::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Convert ROS message definitions to ASN.1 type modules")]
struct Args {
    /// Directory to save the ASN.1 messages
    #[arg(short, long, default_value = "/tmp/asn1_msgs")]
    output: PathBuf,

    /// Additional package root to search (may be given multiple times,
    /// searched before ROS_PACKAGE_PATH)
    #[arg(long = "msg-path")]
    msg_paths: Vec<PathBuf>,

    /// Log level (trace, debug, info, warn, error, json[:level])
    #[arg(long)]
    log_level: Option<String>,

    /// The messages to be converted, as `Name` or `pkg/Name`
    #[arg(required = true)]
    messages: Vec<String>,
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
            eprintln!("Fatal: Unhandled panic in rosmsg-to-asn1");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("rosmsg-to-asn1 {}", esrocos::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        esrocos::logger::JsonLogger::init_with_level(level);
    } else {
        esrocos::logger::JsonLogger::init();
    }

    let options = ConvertOptions {
        output_dir: args.output,
        msg_paths: args.msg_paths,
    };

    match convert_messages(&args.messages, options) {
        Ok(generated) => {
            for message in &generated {
                println!("{}", message);
            }
            0
        }
        Err(e) => {
            eprintln!("Conversion error: {}", e);
            match e {
                EsrocosError::GenerationError(_) => EXIT_GENERATION_ERROR,
                EsrocosError::IoError(_) => EXIT_IO_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}
