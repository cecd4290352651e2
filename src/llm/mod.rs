//! LLM provider client for chat completions.

mod error;
mod openrouter;
mod provider;
mod types;

pub use error::CompletionError;
pub use openrouter::OpenRouterProvider;
pub use provider::CompletionProvider;
pub use types::{ChatRequest, Completion, CompletionRequest, Message, Role};
