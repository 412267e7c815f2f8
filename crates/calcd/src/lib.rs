//! calcd - HTTP front end for the calc evaluator.
//!
//! - [`server`]: the `/calc` router and the listen loop
//! - [`config`]: listen address and evaluator limits from env and flags
//! - [`commands`]: CLI subcommands (`serve`, `eval`)
//! - [`telemetry`]: tracing subscriber setup

pub mod commands;
pub mod config;
pub mod server;
pub mod telemetry;

pub use config::{ConfigError, ServerConfig, DEFAULT_ADDR};
pub use server::{router, serve, CalcResponse, CALC_PATH, USE_POST_MESSAGE};
