use clap::Parser;
use log::{debug, error, info};

use yolo2supervisely::{process_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    debug!("{:?}", args);

    if !args.origin.exists() {
        error!(
            "The specified origin does not exist: {}",
            args.origin.display()
        );
        std::process::exit(1);
    }

    info!("Starting the conversion process...");

    match process_dataset(&args) {
        Ok(summary) => summary.print_summary(),
        Err(e) => {
            error!("Failed to convert dataset: {}", e);
            std::process::exit(1);
        }
    }
}
