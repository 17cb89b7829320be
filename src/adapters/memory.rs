//! In-memory adapters used by tests.
//!
//! [`MemoryNode`] builds file trees without touching the disk, and
//! [`StubLlmClient`] returns canned completions without touching the
//! network. Both sit behind the same ports the live adapters implement.

use crate::ports::llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient};
use crate::ports::workspace::{EntryKind, TreeNode, Workspace};

/// An in-memory file-tree node.
#[derive(Debug, Clone)]
pub enum MemoryNode {
    /// A file with fixed content.
    File {
        /// Entry name.
        name: String,
        /// Raw content bytes.
        content: Vec<u8>,
    },
    /// A file whose reads always fail, for exercising absorbed errors.
    UnreadableFile {
        /// Entry name.
        name: String,
    },
    /// A directory with child nodes.
    Dir {
        /// Entry name.
        name: String,
        /// Children in listing order.
        children: Vec<MemoryNode>,
    },
}

impl MemoryNode {
    /// Creates a file node.
    #[must_use]
    pub fn file(name: &str, content: Vec<u8>) -> Self {
        Self::File { name: name.to_string(), content }
    }

    /// Creates a file node whose reads fail.
    #[must_use]
    pub fn unreadable_file(name: &str) -> Self {
        Self::UnreadableFile { name: name.to_string() }
    }

    /// Creates a directory node.
    #[must_use]
    pub fn dir(name: &str, children: Vec<MemoryNode>) -> Self {
        Self::Dir { name: name.to_string(), children }
    }
}

impl TreeNode for MemoryNode {
    fn kind(&self) -> EntryKind {
        match self {
            Self::File { .. } | Self::UnreadableFile { .. } => EntryKind::File,
            Self::Dir { .. } => EntryKind::Directory,
        }
    }

    fn name(&self) -> String {
        match self {
            Self::File { name, .. } | Self::UnreadableFile { name } | Self::Dir { name, .. } => {
                name.clone()
            }
        }
    }

    fn children(&self) -> Result<Vec<Box<dyn TreeNode>>, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Self::Dir { children, .. } => Ok(children
                .iter()
                .cloned()
                .map(|child| Box::new(child) as Box<dyn TreeNode>)
                .collect()),
            Self::File { .. } | Self::UnreadableFile { .. } => {
                Err("not a directory".into())
            }
        }
    }

    fn read(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Self::File { content, .. } => Ok(content.clone()),
            Self::UnreadableFile { name } => Err(format!("permission denied: {name}").into()),
            Self::Dir { .. } => Err("is a directory".into()),
        }
    }
}

/// In-memory workspace; `None` simulates a dismissed picker.
pub struct MemoryWorkspace {
    root: Option<MemoryNode>,
}

impl MemoryWorkspace {
    /// Creates a workspace that yields the given root.
    #[must_use]
    pub fn new(root: MemoryNode) -> Self {
        Self { root: Some(root) }
    }

    /// Creates a workspace that behaves as a cancelled picker.
    #[must_use]
    pub fn cancelled() -> Self {
        Self { root: None }
    }
}

impl Workspace for MemoryWorkspace {
    fn pick_root(
        &self,
    ) -> Result<Option<Box<dyn TreeNode>>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.root.clone().map(|node| Box::new(node) as Box<dyn TreeNode>))
    }
}

/// Stub LLM client returning a canned response (or a canned failure).
pub struct StubLlmClient {
    response: Result<String, String>,
}

impl StubLlmClient {
    /// Creates a stub that always succeeds with the given text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self { response: Ok(text.to_string()) }
    }

    /// Creates a stub that always fails with the given message.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self { response: Err(message.to_string()) }
    }
}

impl LlmClient for StubLlmClient {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        let response = self.response.clone();
        Box::pin(async move {
            match response {
                Ok(text) => Ok(CompletionResponse { text, prompt_tokens: 0, completion_tokens: 0 }),
                Err(message) => Err(message.into()),
            }
        })
    }
}
