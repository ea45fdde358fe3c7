//! Reinsurance Capital Dashboard - Entry Point

use clap::Parser;
use recap::model::{AppError, TableKind};
use recap::source::{HttpSource, RecordSource};
use recap::state::RowsPerPage;
use recap::view::{ColorConfig, Palette};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Reinsurance Capital Dashboard - TUI over the policy and treaty APIs
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(version)]
#[command(about = "Terminal dashboard for reinsurance policies, reinsurers and transactions")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the records API
    #[arg(long)]
    pub api_base: Option<String>,

    /// Table shown on startup
    #[arg(long, value_parser = parse_table_kind)]
    pub table: Option<TableKind>,

    /// Rows per page (15, 25, 50 or 100)
    #[arg(long, value_parser = parse_rows_per_page)]
    pub rows_per_page: Option<RowsPerPage>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn parse_table_kind(value: &str) -> Result<TableKind, String> {
    TableKind::parse(value).ok_or_else(|| {
        let known: Vec<&str> = TableKind::ALL.iter().map(|kind| kind.key()).collect();
        format!("unknown table '{}', expected one of: {}", value, known.join(", "))
    })
}

fn parse_rows_per_page(value: &str) -> Result<RowsPerPage, String> {
    let rows: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    RowsPerPage::try_from(rows).map_err(|err| err.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = recap::config::load_config_with_precedence(args.config.clone())?;
        let merged = recap::config::merge_config(config_file)?;
        let with_env = recap::config::apply_env_overrides(merged);
        recap::config::apply_cli_overrides(
            with_env,
            args.api_base.clone(),
            args.table,
            args.rows_per_page,
        )
    };

    recap::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source: Arc<dyn RecordSource> = Arc::new(HttpSource::from_config(&config)?);
    let palette = Palette::new(ColorConfig::from_env_and_args(args.no_color));

    recap::view::run_with_source(source, &config, palette)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["recap", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["recap", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["recap"]);
        assert_eq!(args.config, None);
        assert_eq!(args.api_base, None);
        assert_eq!(args.table, None);
        assert_eq!(args.rows_per_page, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_table_accepts_known_keys() {
        let args = Args::parse_from(["recap", "--table", "reinsurer_levels"]);
        assert_eq!(args.table, Some(TableKind::ReinsurerLevels));
    }

    #[test]
    fn test_table_rejects_unknown_key() {
        let err = Args::try_parse_from(["recap", "--table", "claims"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("policy_transactions"));
    }

    #[test]
    fn test_rows_per_page_accepts_allowed_sizes() {
        let args = Args::parse_from(["recap", "--rows-per-page", "50"]);
        assert_eq!(args.rows_per_page, Some(RowsPerPage::Fifty));
    }

    #[test]
    fn test_rows_per_page_rejects_other_sizes() {
        assert!(Args::try_parse_from(["recap", "--rows-per-page", "20"]).is_err());
        assert!(Args::try_parse_from(["recap", "--rows-per-page", "many"]).is_err());
    }

    #[test]
    fn test_invalid_rows_per_page_fails_as_config_error() {
        let dir = std::env::temp_dir().join(format!("recap_main_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "rows_per_page = 20\n").unwrap();

        let args = Args::parse_from(["recap", "--config", path.to_str().unwrap()]);
        let err = run(&args).unwrap_err();

        std::fs::remove_dir_all(&dir).ok();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_api_base_and_config_paths() {
        let args = Args::parse_from([
            "recap",
            "--api-base",
            "http://localhost:9000",
            "--config",
            "/tmp/recap.toml",
            "--no-color",
        ]);
        assert_eq!(args.api_base.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/recap.toml")));
        assert!(args.no_color);
    }
}
