//! Process configuration read from the environment.

use std::net::SocketAddr;

use anyhow::{Context, bail};

pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const STRICT_LINES_VAR: &str = "STRICT_JOURNAL_LINES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Reject lines that are not exactly one positive debit or credit.
    pub strict_lines: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            strict_lines: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw_addr}"))?;

        let strict_lines = match lookup(STRICT_LINES_VAR) {
            Some(v) => parse_bool(STRICT_LINES_VAR, &v)?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            strict_lines,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{key} must be a boolean, got {other:?}"),
    }
}
