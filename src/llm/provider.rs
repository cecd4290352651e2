//! Completion provider trait.

use async_trait::async_trait;

use super::error::CompletionError;
use super::types::{Completion, CompletionRequest};

/// Trait for backends that can answer a completion request.
///
/// Implementations are stateless and re-entrant: each call is a single
/// independent round trip, and concurrent calls share no mutable state.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue exactly one completion request.
    ///
    /// Returns the generated text of the first choice, or a classified
    /// [`CompletionError`]. Never panics past this boundary.
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, CompletionError>;
}
