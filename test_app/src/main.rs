mod cli;

use std::process;
use std::time::Duration;

use cancellation::CancellationTokenSource;
use clap::Parser;
use log::{error, Level};

use tag_identifier::reader::*;
use tag_identifier::DetectionRecord;

use cli::Args;

fn main() {
    simple_logger::init_with_level(Level::Info).unwrap();

    let args = Args::parse();

    let record = match DetectionRecord::parse(
        args.technology.name(),
        &args.uid_hex,
        args.aux.as_deref(),
    ) {
        Ok(x) => x,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    let reader = ReplayReader::new(vec![record]);
    if !read_tag(&reader, Duration::from_secs(args.timeout)) {
        process::exit(1);
    }
}

fn read_tag(reader: &impl TagReader, timeout: Duration) -> bool {
    let cts = CancellationTokenSource::new();
    cts.cancel_after(timeout);

    match read_report(reader, &cts) {
        Ok(ReportResult::Canceled) => {
            println!("canceled");
            false
        }
        Ok(ReportResult::Success(report)) => {
            println!("{}", report);
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}
