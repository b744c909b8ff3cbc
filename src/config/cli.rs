use crate::config::ServiceConfig;
use crate::utils::error::{ClimateError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "climate-api")]
#[command(about = "JSON API over historical station precipitation and temperature observations")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5000
    #[arg(long)]
    pub bind: Option<String>,

    /// SQLite database URL, e.g. sqlite://Resources/hawaii.sqlite
    #[arg(long)]
    pub database_url: Option<String>,

    /// Most recent observation date in the dataset (YYYY-MM-DD)
    #[arg(long)]
    pub last_known_date: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the configuration file (or defaults) and applies command line overrides.
    pub fn load_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ClimateError::MissingConfigError {
                    field: format!("config file {}", path.display()),
                });
            }
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(date) = &self.last_known_date {
            config.dataset.last_known_date = date.clone();
        }

        Ok(config)
    }
}
