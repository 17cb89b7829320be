//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (workspace/folder access, LLM). Implementations live
//! in `src/adapters/`.

pub mod llm;
pub mod workspace;

pub use llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient};
pub use workspace::{EntryKind, TreeNode, Workspace};
