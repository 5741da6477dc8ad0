use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "hotclip",
    version,
    about = "Clipboard history with a recordable pasteback hotkey"
)]
pub struct Cli {
    /// Configuration file (default: <config_dir>/hotclip/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Watch the clipboard and serve the hotkey until Ctrl-C
    #[default]
    Run,
    /// Record a new hotkey from the next accepted key press
    Record,
    /// Print the persisted hotkey and its stored record
    ShowChord,
    /// Delete the persisted hotkey
    ClearChord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_the_default_command() {
        let cli = Cli::try_parse_from(["hotclip"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Run);
        assert!(cli.config.is_none());
    }

    #[test]
    fn subcommands_use_kebab_case() {
        let cli = Cli::try_parse_from(["hotclip", "show-chord"]).unwrap();
        assert_eq!(cli.command, Some(Command::ShowChord));
        let cli = Cli::try_parse_from(["hotclip", "clear-chord"]).unwrap();
        assert_eq!(cli.command, Some(Command::ClearChord));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["hotclip", "record", "--config", "/tmp/h.toml"]).unwrap();
        assert_eq!(cli.command, Some(Command::Record));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/h.toml")));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["hotclip", "sync"]).is_err());
    }
}
