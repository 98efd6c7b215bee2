//! Command-line interface for the mastermind binary.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::{ConfigError, GameConfig};

/// Mastermind - guess the hidden digit code
#[derive(Parser, Debug, Default)]
#[command(name = "mastermind")]
#[command(about = "Guess the hidden digit code from black/white peg feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Secret code length (3 to 6). Asked for interactively when omitted.
    #[arg(
        short,
        long,
        env = "MASTERMIND_CODE_LENGTH",
        value_parser = clap::value_parser!(u8).range(3..=6)
    )]
    pub length: Option<u8>,

    /// Largest digit used in the code (3 to 9). Asked for interactively when omitted.
    #[arg(
        short,
        long,
        env = "MASTERMIND_MAX_DIGIT",
        value_parser = clap::value_parser!(u8).range(3..=9)
    )]
    pub max_digit: Option<u8>,

    /// Seed for the secret generator (defaults to the system clock)
    #[arg(long, env = "MASTERMIND_SEED")]
    pub seed: Option<u32>,

    /// Read one guess per stdin line and write JSON lines to stdout
    #[arg(long)]
    pub script: bool,
}

impl Cli {
    /// Configuration from the flags, with defaults for whatever is missing.
    pub fn config_or_default(&self) -> Result<GameConfig, ConfigError> {
        let fallback = GameConfig::default();
        GameConfig::new(
            self.length.unwrap_or(fallback.code_length()),
            self.max_digit.unwrap_or(fallback.max_digit()),
        )
    }

    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli =
            Cli::try_parse_from(["mastermind", "-l", "5", "-m", "8", "--seed", "42"]).unwrap();
        assert_eq!(cli.length, Some(5));
        assert_eq!(cli.max_digit, Some(8));
        assert_eq!(cli.seed_or_clock(), 42);
        assert!(!cli.script);
        assert_eq!(cli.config_or_default().unwrap(), GameConfig::new(5, 8).unwrap());
    }

    #[test]
    fn rejects_out_of_range_flags() {
        assert!(Cli::try_parse_from(["mastermind", "--length", "7"]).is_err());
        assert!(Cli::try_parse_from(["mastermind", "--max-digit", "2"]).is_err());
    }

    #[test]
    fn missing_flags_fall_back_to_defaults() {
        let cli = Cli {
            max_digit: Some(9),
            ..Cli::default()
        };
        assert_eq!(cli.config_or_default().unwrap(), GameConfig::new(4, 9).unwrap());
    }
}
