use clap::Parser;
use std::path::PathBuf;

/// Browse Reddit listings sorted by upvotes.
#[derive(Debug, Parser)]
#[command(name = "reddit-top", version, about)]
pub struct Cli {
    /// Subreddit to open instead of the front page
    pub subreddit: Option<String>,

    /// Path to config file (default: ~/.config/reddit-top/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to PATH (suffixed with timestamp and pid)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["reddit-top"]).unwrap();
        assert!(cli.subreddit.is_none());
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn subreddit_and_flags() {
        let cli = Cli::try_parse_from([
            "reddit-top",
            "aww",
            "--config",
            "/tmp/c.toml",
            "--log-file",
            "/tmp/r.log",
        ])
        .unwrap();
        assert_eq!(cli.subreddit.as_deref(), Some("aww"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/r.log")));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["reddit-top", "--backend", "x"]).is_err());
    }
}
