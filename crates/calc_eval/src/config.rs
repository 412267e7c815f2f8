//! Evaluator settings.

/// Nested nodes allowed on one root-to-leaf path unless configured otherwise.
///
/// Kept under the JSON decoder's own nesting limit of 128 so that the
/// evaluator, not the decoder, reports over-deep trees.
pub const DEFAULT_MAX_DEPTH: usize = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested nodes, or `None` for no limit.
    ///
    /// Without a limit the evaluator grows its stack on demand, so a `Value`
    /// built in code is bounded only by memory. Payloads decoded from JSON
    /// (`Evaluator::evaluate_json`, the HTTP route, `calcd eval`) still stop
    /// at the decoder's nesting limit of 128, which applies first.
    pub max_depth: Option<usize>,
}

impl EvalConfig {
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}
