//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for onlinestore-headless
#[derive(Parser, Debug)]
#[command(name = "onlinestore-headless")]
#[command(author, version, about = "Fetch the catalog and print the listing and cart screens")]
#[command(long_about = r#"
Fetches the product catalog once, fills a cart with the first few products
and prints both screens as plain text.

Configuration is loaded from (later overrides earlier):
1. Built-in defaults
2. CONFIG_PATH, or onlinestore.toml in the platform config directory
3. ONLINESTORE_API_URL, ONLINESTORE_API_TIMEOUT_SECS, ONLINESTORE_CURRENCY_SYMBOL

Example:
  onlinestore-headless
  onlinestore-headless --offline
  onlinestore-headless ./onlinestore.toml
"#)]
pub struct Cli {
    /// Path to configuration file (must exist when given)
    #[arg(value_name = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Use the built-in sample catalog instead of the network
    #[arg(long)]
    pub offline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["onlinestore-headless"]).unwrap();
        assert!(!cli.offline);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_offline_and_config_path() {
        let cli =
            Cli::try_parse_from(["onlinestore-headless", "--offline", "shop.toml"]).unwrap();
        assert!(cli.offline);
        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["onlinestore-headless", "--ofline"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Cli::try_parse_from(["onlinestore-headless", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_second_positional_is_rejected() {
        let err =
            Cli::try_parse_from(["onlinestore-headless", "a.toml", "b.toml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
