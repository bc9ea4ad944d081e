//! Command-line interface for tictactoe_match.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe_match")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every front end.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Name of the player who plays X
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the player who plays O
    #[arg(long)]
    pub player2: Option<String>,

    /// Path to a TOML match config
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        #[command(flatten)]
        args: MatchArgs,

        /// Log file (the terminal is busy drawing the board)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play a fixed list of moves and print each step
    Script {
        #[command(flatten)]
        args: MatchArgs,

        /// Moves as `row,col` pairs, each 0-2
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_command() {
        let cli = Cli::try_parse_from([
            "tictactoe_match",
            "script",
            "--player1",
            "Alice",
            "0,0",
            "1,1",
        ])
        .unwrap();
        match cli.command {
            Command::Script { args, moves } => {
                assert_eq!(args.player1.as_deref(), Some("Alice"));
                assert_eq!(args.player2, None);
                assert_eq!(moves, ["0,0", "1,1"]);
            }
            Command::Tui { .. } => panic!("Expected script command"),
        }
    }

    #[test]
    fn test_script_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe_match", "script"]).is_err());
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
