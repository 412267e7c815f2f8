//! Command handlers for the `calcd` CLI.
//!
//! Each handler reports its own failures on stderr and exits the process
//! with status 1.

mod eval;
mod serve;

pub use eval::{eval_payload, read_payload, run_eval, EvalCommandError};
pub use serve::run_serve;
