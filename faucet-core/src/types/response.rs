//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the text sent back to the room so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and attach the reply text.
    Reply(String),
}
