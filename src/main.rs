mod cli;
mod config;
mod error;
mod merge;
mod report;
mod store;
mod types;

use crate::error::MergeError;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_MATCH: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("score_merge={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, MergeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::info!("score-merge v{}", env!("CARGO_PKG_VERSION"));

    if !cli.root.exists() {
        return Err(MergeError::PathNotFound(cli.root.display().to_string()));
    }
    let loaded = config::load_config(&cli.root)?;

    match cli.command {
        cli::Commands::Merge(cmd) => {
            let paths = types::config::resolve_paths(
                &cli.root,
                loaded.as_ref(),
                cmd.catalog.as_deref(),
                cmd.output.as_deref(),
            )?;
            let score_file = cli.root.join(&cmd.score_file);

            let record = store::load_score_record(&score_file)?;
            let mut catalog = store::load_catalog(&paths.catalog)?;
            let date = cmd
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive());

            let outcome = merge::merge_score(&record, &mut catalog, date)?;
            if !cmd.dry_run {
                store::write_catalog(&paths.output, &catalog)?;
            }

            let matched = outcome.matched();
            let summary = types::report::MergeSummary {
                score_file: score_file.display().to_string(),
                catalog: paths.catalog.display().to_string(),
                output: (!cmd.dry_run).then(|| paths.output.display().to_string()),
                pillar_id: record.pillar_id.clone(),
                outcome,
            };
            if !cli.quiet {
                println!(
                    "{}",
                    report::render_merge(&summary, output_format(&cmd.format))?
                );
            }

            if matched {
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!(
                    "warning: no product named '{}' in {}; catalog unchanged",
                    record.product_name,
                    paths.catalog.display()
                );
                Ok(exit_code::NO_MATCH)
            }
        }
        cli::Commands::History(cmd) => {
            let catalog_path = types::config::resolve_catalog_path(
                &cli.root,
                loaded.as_ref(),
                cmd.catalog.as_deref(),
            );
            let catalog = store::load_catalog(&catalog_path)?;

            let Some(product) = catalog.find_product(&cmd.product) else {
                eprintln!(
                    "warning: no product named '{}' in {}",
                    cmd.product,
                    catalog_path.display()
                );
                return Ok(exit_code::NO_MATCH);
            };

            let history = types::report::HistoryReport::from(product);
            println!(
                "{}",
                report::render_history(&history, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
