//! Adapter implementations of the port traits.
//!
//! `live` adapters talk to the real disk and the Gemini API; `memory`
//! adapters are in-memory substitutes used by tests.

pub mod live;
pub mod memory;
