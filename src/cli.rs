use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::constants::DEFAULT_LISTEN_ADDR;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Live esports data service
///
/// Serves live series, players and teams from the Abios API:
/// - GET /series/live
/// - GET /players/live
/// - GET /teams/live
///
/// Upstream settings come from the environment (ABIOS_API_BASE_URL,
/// ABIOS_TOKEN, ABIOS_CLIENT_REQ_TIMEOUT_SEC, ABIOS_CLIENT_RATE_LIMIT_PERSEC,
/// ABIOS_CLIENT_RATE_LIMIT_BURST), optionally layered over a TOML config file.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Address to listen on.
    #[arg(long = "listen", default_value = DEFAULT_LISTEN_ADDR, value_name = "ADDR")]
    pub listen: String,

    /// Read settings from this TOML file. Environment variables override it.
    /// Without this flag the default config location is read if it exists.
    #[arg(long = "config", help_heading = "Configuration", value_name = "PATH")]
    pub config: Option<String>,

    /// List current configuration settings (token masked) and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug level logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
