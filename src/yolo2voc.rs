use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use yolo2mot::{process_voc_dataset, Args};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!(
        "Converting ground truth to PASCAL VOC format for {} ...",
        args.class_id_filter
    );

    if let Err(e) = process_voc_dataset(&args) {
        error!("Conversion failed: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
