pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub use toml_config::PanelConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "range-panel")]
#[command(about = "Advanced date range panel helpers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the default lookback window, in days
    #[arg(long, global = true)]
    pub lookback_days: Option<i64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve the effective date range from optional YYYY-MM-DD bounds
    Resolve {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Print the default start and end date texts
    Defaults,
    /// Toggle the advanced range section N times from its hidden state
    Toggle {
        #[arg(long, default_value = "1")]
        times: u32,
    },
    /// Fetch the page source, falling back to an empty document snapshot
    FetchPage {
        #[arg(long)]
        url: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the TOML file (if any) and apply command-line overrides on top.
    pub fn load_panel_config(&self) -> crate::utils::error::Result<PanelConfig> {
        let mut config = match &self.config {
            Some(path) => PanelConfig::from_file(path)?,
            None => PanelConfig::default(),
        };

        if let Some(days) = self.lookback_days {
            config.range.lookback_days = days;
        }

        if let Command::FetchPage { url: Some(url) } = &self.command {
            config.page = Some(toml_config::PageConfig { url: url.clone() });
        }

        Ok(config)
    }
}
