use chrono::NaiveDateTime;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "keepsake")]
#[command(about = "Keepsake - a live anniversary clock, countdown and journey counter for the terminal")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// When the journey began, local time (overrides config), e.g. 2025-12-12T00:00:00
    #[arg(long)]
    pub journey_start: Option<NaiveDateTime>,

    /// Date to count down to, local time (overrides config)
    #[arg(long)]
    pub countdown_target: Option<NaiveDateTime>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["keepsake"]);
        assert_eq!(args.config, None);
        assert_eq!(args.journey_start, None);
        assert_eq!(args.countdown_target, None);
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn test_cli_parse_dates() {
        let args = CliArgs::parse_from([
            "keepsake",
            "--journey-start", "2024-02-14T18:30:00",
            "--countdown-target", "2025-02-14T00:00:00",
        ]);
        assert_eq!(
            args.journey_start.map(|d| d.to_string()),
            Some("2024-02-14 18:30:00".to_string())
        );
        assert_eq!(
            args.countdown_target.map(|d| d.to_string()),
            Some("2025-02-14 00:00:00".to_string())
        );
    }

    #[test]
    fn test_cli_parse_with_config() {
        let args = CliArgs::parse_from([
            "keepsake",
            "--config", "/custom/keepsake.toml",
            "--log-file", "/tmp/keepsake.log",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/keepsake.toml")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/keepsake.log")));
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(CliArgs::try_parse_from(["keepsake", "--journey-start", "December 12"]).is_err());
    }
}
