// src/bin/mbstats.rs

use clap::Parser;
use mbstats::cli::{Action, StatsArgs};
use mbstats::edit_types::named_edit_type;
use mbstats::{reader, report, stats, Result};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    // clap exits with status 2 on usage errors, including a missing action.
    let args = StatsArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &StatsArgs) -> Result<()> {
    let Some(action) = args.action() else {
        unreachable!("clap requires exactly one action");
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let dir = &args.input_dir;

    match action {
        Action::Editor(name) => {
            let year = reader::read_year(dir, args.year)?;
            if let Some(es) = stats::find_editor(&year, &name) {
                report::write_editor_breakdown(&mut out, es)?;
            }
        }
        Action::EditorHistogram(et) => {
            let et = named_edit_type(&et)?;
            let year = reader::read_year(dir, args.year)?;
            report::write_editor_histogram(&mut out, &year, et, args.histogram_shape(), args.bar_width)?;
        }
        Action::EditorList(et) => {
            let et = named_edit_type(&et)?;
            let year = reader::read_year(dir, args.year)?;
            report::write_editor_list(&mut out, &year, et)?;
        }
        Action::YearlyAge(et) => {
            let et = named_edit_type(&et)?;
            let years = reader::read_all_editor_stats(dir, args.min_year, args.max_year)?;
            report::write_yearly_age(&mut out, &years, et)?;
        }
        Action::YearlyEditors(et) => {
            let et = named_edit_type(&et)?;
            let years = reader::read_all_editor_stats(dir, args.min_year, args.max_year)?;
            report::write_yearly_editors(&mut out, &years, et)?;
        }
        Action::YearlyEdits(et) => {
            let et = named_edit_type(&et)?;
            let years = reader::read_all_editor_stats(dir, args.min_year, args.max_year)?;
            report::write_yearly_edits(&mut out, &years, et)?;
        }
        Action::EditTypes => {
            let year = reader::read_year(dir, args.year)?;
            report::write_edit_type_totals(&mut out, &year)?;
        }
        Action::Correlations => {
            let year = reader::read_year(dir, args.year)?;
            report::write_correlations(&mut out, &year)?;
        }
    }

    out.flush()?;
    Ok(())
}
