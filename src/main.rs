// Rotate glyph contours around a pivot to build radially symmetric shapes.

use std::process::ExitCode;

use clap::Parser;
use rosette::core::{run, CliArgs};
use rosette::utils::logger::init_custom_logger;
use tracing::error;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_custom_logger(args.debug);

    match run(&args) {
        Ok(summary) => {
            let verb = if summary.committed { "Added" } else { "Would add" };
            println!(
                "{} {} contours to '{}' ({} copies at {}°)",
                verb,
                summary.contours_added,
                summary.glyph,
                summary.copies,
                summary.angle_label
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
