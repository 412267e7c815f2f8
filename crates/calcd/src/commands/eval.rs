//! The `eval` command: evaluate one payload from a file or stdin.

use std::io::Read;

use calc_eval::{EvalConfig, Evaluator};
use calc_value::EvalError;

use crate::server::CalcResponse;

#[derive(Debug, thiserror::Error)]
pub enum EvalCommandError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Read a payload; `-` is stdin.
pub fn read_payload(path: &str) -> Result<Vec<u8>, EvalCommandError> {
    let read = if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map(|_| buf)
    } else {
        std::fs::read(path)
    };
    read.map_err(|source| EvalCommandError::Read {
        path: path.to_string(),
        source,
    })
}

pub fn eval_payload(path: &str, config: EvalConfig) -> Result<f64, EvalCommandError> {
    let payload = read_payload(path)?;
    Ok(Evaluator::new(config).evaluate_json(&payload)?)
}

/// Print `{"result":n}` on success, `error: <message>` on failure.
pub fn run_eval(path: &str, config: EvalConfig) {
    let result = match eval_payload(path, config) {
        Ok(result) => result,
        Err(err) => {
            if let EvalCommandError::Eval(eval_err) = &err {
                tracing::debug!(
                    kind = eval_err.kind.code(),
                    path = %eval_err.path().map_or_else(String::new, ToString::to_string),
                    "evaluation failed"
                );
            }
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string(&CalcResponse { result }) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: cannot encode result: {err}");
            std::process::exit(1);
        }
    }
}
