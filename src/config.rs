//! Command-line configuration for the Gomoku GUI.

use clap::{Parser, ValueEnum};

use crate::rules::RuleSet;

/// Win rule as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RuleArg {
    /// Exactly five in a row wins
    #[default]
    Standard,
    /// Five or more in a row wins
    Freestyle,
}

impl From<RuleArg> for RuleSet {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Standard => RuleSet::Standard,
            RuleArg::Freestyle => RuleSet::Freestyle,
        }
    }
}

/// Gomoku - two-player five-in-a-row on a 15x15 board
#[derive(Parser, Debug, Clone)]
#[command(name = "gomoku")]
#[command(about = "Hotseat five-in-a-row", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Win rule
    #[arg(long, value_enum, default_value_t = RuleArg::Standard)]
    pub rule: RuleArg,

    /// Initial window width in points
    #[arg(long, default_value_t = 1000.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 750.0)]
    pub height: f32,

    /// Restart immediately instead of asking when a game is in progress
    #[arg(long)]
    pub no_confirm_restart: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Cli {
    /// Settings the GUI needs, detached from parsing
    pub fn settings(&self) -> Settings {
        Settings {
            rule: self.rule.into(),
            confirm_restart: !self.no_confirm_restart,
        }
    }
}

/// Behaviour knobs handed to the GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub rule: RuleSet,
    pub confirm_restart: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rule: RuleSet::Standard,
            confirm_restart: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gomoku"]).unwrap();
        assert_eq!(cli.rule, RuleArg::Standard);
        assert_eq!(cli.width, 1000.0);
        assert_eq!(cli.height, 750.0);
        assert_eq!(cli.log, "info");
        assert_eq!(cli.settings(), Settings::default());
    }

    #[test]
    fn test_freestyle_without_confirm() {
        let cli = Cli::try_parse_from(["gomoku", "--rule", "freestyle", "--no-confirm-restart"]).unwrap();
        let settings = cli.settings();
        assert_eq!(settings.rule, RuleSet::Freestyle);
        assert!(!settings.confirm_restart);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        assert!(Cli::try_parse_from(["gomoku", "--rule", "renju"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
