//! Handler chain result type.

/// Handler result for the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// The message was dealt with; later handlers are skipped.
    Stop,
}
