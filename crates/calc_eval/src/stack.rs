//! Evaluation stack: one frame per node on the path being evaluated.
//!
//! The depth check lives in [`EvalStack::push`], so a frame beyond the limit
//! is never pushed. When an error surfaces, the frames give the operand path
//! to the innermost node that was active.

use calc_value::{too_deep, EvalError, NodePath, Side};

/// How a node was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Root,
    Operand(Side),
}

#[derive(Clone, Debug)]
pub struct EvalStack {
    frames: Vec<Frame>,
    max_depth: Option<usize>,
}

impl EvalStack {
    /// `max_depth` is `None` for unlimited nesting.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing with `TooDeep` if the limit is reached.
    pub fn push(&mut self, frame: Frame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(too_deep(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "EvalStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Operand path from the root to the current node.
    pub fn capture(&self) -> NodePath {
        NodePath::new(
            self.frames
                .iter()
                .filter_map(|frame| match frame {
                    Frame::Root => None,
                    Frame::Operand(side) => Some(*side),
                })
                .collect(),
        )
    }

    /// Attach the current path to `err` unless it already has one.
    pub fn attach_path(&self, err: EvalError) -> EvalError {
        err.at_path(|| self.capture())
    }
}
