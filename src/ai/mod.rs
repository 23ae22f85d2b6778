//! All AI/LLM functionality

pub mod client;
pub mod prompt;

// Re-export main types for convenience
pub use client::SummarizerClient;
pub use prompt::build_summary_prompt;
