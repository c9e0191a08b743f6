//! Command-line interface for the tic-tac-toe front-end.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Quit without asking for confirmation
    #[arg(long)]
    pub no_confirm_quit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.no_confirm_quit);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--config",
            "game.toml",
            "--log-file",
            "out.log",
            "--no-confirm-quit",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert!(cli.no_confirm_quit);
    }
}
