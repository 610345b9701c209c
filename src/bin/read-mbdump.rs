// src/bin/read-mbdump.rs

use clap::Parser;
use mbstats::cli::DumpArgs;
use mbstats::{extract, writer, Result};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = DumpArgs::parse();
    let start_time = Instant::now();

    match run(&args) {
        Ok(()) => {
            info!("Total time: {:.2?}", start_time.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &DumpArgs) -> Result<()> {
    let opts = args.scan_options();
    info!("Dump dir: {}", args.dump_dir.display());
    info!("Output:   {}", args.out_dir.display());

    let (editors, stats) = extract::extract_dump(&args.dump_dir, &opts)?;
    let paths = writer::write_editor_stats(&args.out_dir, stats, &editors, opts.progress_bar)?;
    info!("Wrote {} files to {}", paths.len(), args.out_dir.display());
    Ok(())
}
