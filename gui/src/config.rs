//! Command line and environment configuration for the viewer

use std::time::Duration;

use clap::Parser;
use echo_api::PollOptions;

#[derive(Debug, Clone, Parser)]
#[command(name = "echo-viewer")]
#[command(version)]
#[command(about = "Watch the requests an HTTP echo server has received", long_about = None)]
pub struct Config {
    /// Base URL of the echo server; requests are read from <BASE_URL>/echo
    #[arg(long, env = "ECHO_BASE_URL", default_value = "http://localhost:8025")]
    pub base_url: String,

    /// Milliseconds between polls
    #[arg(
        long,
        env = "ECHO_POLL_INTERVAL_MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Milliseconds before a single poll is abandoned
    #[arg(
        long,
        env = "ECHO_TIMEOUT_MS",
        default_value_t = 10000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn poll_options(&self) -> PollOptions {
        PollOptions {
            interval: Duration::from_millis(self.interval_ms),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
