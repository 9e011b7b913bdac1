use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plantops", version, about = "Houseplant watering advisor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the recommendation HTTP API (default)
    Serve {
        /// Bind address, overrides server.host
        #[arg(long)]
        host: Option<String>,

        /// Listen port, overrides server.port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Open the interactive watering form
    Ui {
        /// Backend base URL, overrides client.backend_url
        #[arg(short, long)]
        backend_url: Option<String>,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and test the backend connection
    Check,
}

impl Cli {
    /// Default log directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Log directive for the chosen command. The terminal form shares
    /// stderr with the alternate screen, so it never logs below `warn`.
    pub fn log_directive(&self) -> &'static str {
        match self.command {
            Some(Commands::Ui { .. }) => "warn",
            _ => self.log_level(),
        }
    }
}
