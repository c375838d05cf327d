use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "score-merge",
    version,
    about = "Merge a new pillar score into a product catalog's assessment history"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding score-merge.toml; relative paths resolve against it
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a new assessment built from a score file
    Merge(MergeCommand),
    /// Show a product's assessment history
    History(HistoryCommand),
}

#[derive(Args)]
pub struct MergeCommand {
    /// JSON document holding productName, pillarId and score
    pub score_file: PathBuf,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Date stamped on the new assessment (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Merge and report without writing the output catalog
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct HistoryCommand {
    pub product: String,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, crate::merge::DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2025-05-20").expect("date should parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid date"));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("20/05/2025").is_err());
    }

    #[test]
    fn cli_parses_merge_flags() {
        let cli = Cli::try_parse_from([
            "score-merge",
            "merge",
            "score.json",
            "--catalog",
            "products.json",
            "--date",
            "2025-05-20",
            "--dry-run",
        ])
        .expect("args should parse");
        match cli.command {
            Commands::Merge(cmd) => {
                assert_eq!(cmd.score_file, PathBuf::from("score.json"));
                assert_eq!(cmd.catalog, Some(PathBuf::from("products.json")));
                assert!(cmd.output.is_none());
                assert!(cmd.dry_run);
            }
            Commands::History(_) => panic!("expected merge command"),
        }
    }
}
