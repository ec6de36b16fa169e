//! Shared domain types and errors for the LLM evaluation platform.

pub mod error;
pub mod types;
