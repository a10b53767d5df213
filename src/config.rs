//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

/// User management service for the skill sharing app.
#[derive(Parser, Debug, Clone)]
#[command(name = "skillsync-users", version)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "SKILLSYNC_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Capacity of the request queue in front of the user store.
    #[arg(long, env = "SKILLSYNC_STORE_BUFFER", default_value_t = 32, value_parser = parse_buffer)]
    pub store_buffer: usize,

    /// Log output format.
    #[arg(long, env = "SKILLSYNC_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

fn parse_buffer(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if size == 0 {
        return Err("store buffer must be at least 1".to_string());
    }
    Ok(size)
}
