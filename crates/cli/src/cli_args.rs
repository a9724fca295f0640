//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

use crate::catalog::CatalogOptions;

/// Command-line arguments for the `sdeck` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use scenario_deck_cli::cli_args::Args;
///
/// let args = Args::parse_from(["sdeck", "--batch"]);
/// assert!(args.catalog_options().batch);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the scenario settings YAML.
    ///
    /// If not provided, defaults to `~/.scenario-deck/settings.yml`.
    #[arg(long = "settings", short = 's')]
    pub settings_path: Option<String>,

    /// Run every sample once, in order, instead of showing menus.
    ///
    /// Values missing from the settings are still prompted for.
    #[arg(long, short = 'b', action)]
    pub batch: bool,
}

impl Args {
    #[must_use]
    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions { batch: self.batch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["sdeck"]);

        assert!(args.settings_path.is_none());
        assert!(!args.batch);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["sdeck", "-s", "/custom/settings.yml", "-b"]);

        assert_eq!(args.settings_path, Some("/custom/settings.yml".to_string()));
        assert!(args.batch);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from(["sdeck", "--settings", "/custom/settings.yml", "--batch"]);

        assert_eq!(args.settings_path, Some("/custom/settings.yml".to_string()));
        assert!(args.catalog_options().batch);
    }

    #[test]
    fn test_args_reject_positional_arguments() {
        let result = Args::try_parse_from(["sdeck", "customers"]);
        assert!(result.is_err());
    }
}
