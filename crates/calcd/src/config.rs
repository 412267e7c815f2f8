//! Service configuration.
//!
//! Sources in increasing precedence: built-in defaults, environment
//! (`CALCD_ADDR`, `CALCD_MAX_DEPTH`), command-line flags (`--addr=`,
//! `--max-depth=`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use calc_eval::EvalConfig;

pub const DEFAULT_PORT: u16 = 8330;

/// Address the service listens on unless configured otherwise.
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT);

pub const ADDR_ENV: &str = "CALCD_ADDR";
pub const MAX_DEPTH_ENV: &str = "CALCD_MAX_DEPTH";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address `{value}`: {reason}")]
    InvalidAddr { value: String, reason: String },

    #[error("invalid max depth `{0}`: expected a non-negative integer or `none`")]
    InvalidMaxDepth(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub eval: EvalConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            eval: EvalConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(addr) = lookup(ADDR_ENV) {
            self.addr = parse_addr(&addr)?;
        }
        if let Some(depth) = lookup(MAX_DEPTH_ENV) {
            self.eval.max_depth = parse_max_depth(&depth)?;
        }
        Ok(self)
    }

    /// Apply one `--key=value` flag.
    pub fn apply_flag(&mut self, arg: &str) -> Result<(), ConfigError> {
        if let Some(addr) = arg.strip_prefix("--addr=") {
            self.addr = parse_addr(addr)?;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            self.eval.max_depth = parse_max_depth(depth)?;
        } else {
            return Err(ConfigError::UnknownOption(arg.to_string()));
        }
        Ok(())
    }
}

pub fn parse_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddr {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// `none` (any case) lifts the limit.
pub fn parse_max_depth(value: &str) -> Result<Option<usize>, ConfigError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidMaxDepth(value.to_string()))
}
