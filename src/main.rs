//! CLI tool for summarizing a directory of FRT PDF documents as JSON.
//!
//! Summaries go to stdout; diagnostics go to stderr through `env_logger`
//! (`RUST_LOG` or `-v`/`-vv`).

use clap::Parser;
use frtsummary::{report, PdfScanner, Result, ScanConfig};
use std::path::PathBuf;
use std::{io, process};

/// Summarize Firearms Reference Table PDFs as a JSON array
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to scan recursively (a single PDF file also works)
    directory: PathBuf,

    /// Page to read the labeled fields from
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Password for encrypted documents
    #[arg(long, default_value = "")]
    password: String,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the distinct manufacturers, types, actions, classifications and
    /// models instead of the individual summaries
    #[arg(long)]
    catalog: bool,

    /// Follow symbolic links while walking the directory
    #[arg(long)]
    follow_links: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            // Nothing useful can be done if the usage text cannot be printed.
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        println!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = ScanConfig {
        page: cli.page,
        password: cli.password,
        follow_links: cli.follow_links,
    };
    let scanner = PdfScanner::with_config(&cli.directory, config)?;

    // Scan fully before writing so a failed run prints only the error.
    if cli.catalog {
        let catalog = scanner.catalog()?;
        report::write_json(io::stdout().lock(), &catalog, cli.pretty)
    } else {
        let summaries = scanner.scan()?;
        report::write_json(io::stdout().lock(), &summaries, cli.pretty)
    }
}
