//! Command-line and environment configuration.

use crate::lifecycle::DEFAULT_BUFFER_SIZE;
use clap::Parser;

/// Command-line arguments for the GrubDash service. Each one can also come from the
/// environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "In-memory order and dish API", long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "GRUBDASH_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Mailbox capacity of each actor
    #[arg(long, env = "GRUBDASH_BUFFER_SIZE", default_value_t = DEFAULT_BUFFER_SIZE, value_parser = parse_buffer_size)]
    pub buffer_size: usize,

    /// Log level or filter directive (trace, debug, info, warn, error). `RUST_LOG` wins
    /// when set.
    #[arg(short, long, env = "GRUBDASH_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_buffer_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("buffer size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}
