use std::path::PathBuf;

use chatmood_logging::{LevelFilter, LogDestination};
use clap::{Parser, ValueEnum};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "chatmood")]
#[command(about = "Send an exported WhatsApp chat to the sentiment service and show the report", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Chat export (.txt). Without it the run stops at input validation.
    pub file: Option<PathBuf>,

    /// Analysis endpoint, e.g. https://host/analyze.
    #[arg(long, env = "CHATMOOD_ENDPOINT")]
    pub endpoint: Option<String>,

    /// RON config file. Defaults to ./chatmood.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "CHATMOOD_CONNECT_TIMEOUT_SECS")]
    pub connect_timeout_secs: Option<u64>,

    #[arg(long, env = "CHATMOOD_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
    Off,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}
