//! orchat - A minimal command-line chat client for OpenRouter-compatible APIs.

pub mod config;
pub mod llm;
pub mod repl;
