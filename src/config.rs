use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./.prompt_data";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory for stored prompt records
    #[arg(long, env = "PERSISTENCE_FILE_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Address to bind the HTTP server on
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to run the server on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

/// Process configuration, built once at start-up and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads `.env` if present, then reads flags and environment variables.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Cli::parse().into()
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            data_dir: cli.data_dir,
            host: cli.host,
            port: cli.port,
        }
    }
}
