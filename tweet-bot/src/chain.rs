//! # Handler chain
//!
//! Runs a sequence of handlers. Each handler has optional before/handle/after: all before run in
//! order (any false stops the chain); then handle runs until one returns Stop; then all after run in reverse.
//! Errors from any phase are returned to the caller (the update error boundary).

use crate::core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop → all after in reverse. Returns Stop if any handler stopped, else Continue.
    #[instrument(skip(self, message), fields(user_id = message.user.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(chat_id = message.chat.id, handlers = self.handlers.len(), "handler chain started");

        for h in &self.handlers {
            if !h.before(message).await? {
                info!(
                    handler = %std::any::type_name_of_val(h.as_ref()),
                    "before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let response = h.handle(message).await?;
            if response == HandlerResponse::Stop {
                debug!(
                    handler = %std::any::type_name_of_val(h.as_ref()),
                    "message handled, chain stopped"
                );
                final_response = response;
                break;
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        debug!(response = ?final_response, "handler chain finished");
        Ok(final_response)
    }
}

// Integration tests live in tests/handler_chain_test.rs
