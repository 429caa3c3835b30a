use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use galaxy_export_cli::{Cli, ExportSummary, init_logging, run_export};
use galaxy_export_report::{ReportWriter, XlsxReportWriter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let writer = XlsxReportWriter::new();
    let output = writer.output_path(&cli.output);

    match run_export(&cli.db_path, &output, &cli.export_options(), &writer) {
        Ok(summary) => {
            log_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".if_supports_color(Stderr, |t| t.red()), e);
            ExitCode::FAILURE
        }
    }
}

fn log_summary(summary: &ExportSummary) {
    for (sheet, rows) in &summary.sheets {
        log::info!(
            "  {:<24} {:>6} games",
            sheet.if_supports_color(Stdout, |t| t.bold()),
            rows
        );
    }
    log::info!(
        "{} {} of {} games to {}",
        "Exported".if_supports_color(Stdout, |t| t.green()),
        summary.games_written(),
        summary.games_read,
        summary.output.display(),
    );
}
