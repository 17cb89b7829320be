//! Live adapters backed by real disk I/O and the Gemini API.

pub mod llm;
pub mod workspace;
