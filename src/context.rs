//! Service context bundling the port trait objects.

use std::path::PathBuf;

use crate::adapters::live::llm::GeminiClient;
use crate::adapters::live::workspace::DiskWorkspace;
use crate::config::Config;
use crate::ports::llm::LlmClient;
use crate::ports::workspace::{TreeNode, Workspace};

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. The live
/// constructor wires real adapters; tests build contexts from memory
/// adapters via [`ServiceContext::with_parts`].
pub struct ServiceContext {
    /// Folder picking and tree traversal.
    pub workspace: Box<dyn Workspace>,
    /// LLM client for completion calls.
    pub llm: Box<dyn LlmClient>,
}

impl ServiceContext {
    /// Creates a live context.
    ///
    /// `root` is the folder supplied on the command line, when the command
    /// takes one. Without an API key the LLM port is a stub whose calls
    /// fail with the not-configured cause.
    #[must_use]
    pub fn live(config: &Config, root: Option<PathBuf>) -> Self {
        let workspace: Box<dyn Workspace> = match root {
            Some(path) => Box::new(DiskWorkspace::new(path)),
            None => Box::new(NoFolderWorkspace),
        };
        let llm: Box<dyn LlmClient> = match config.api_key.clone() {
            Some(key) => Box::new(GeminiClient::new(key)),
            None => Box::new(NotConfiguredLlm),
        };
        Self { workspace, llm }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn with_parts(workspace: Box<dyn Workspace>, llm: Box<dyn LlmClient>) -> Self {
        Self { workspace, llm }
    }
}

// --- Stub adapters for boundaries a command did not wire ---

/// Workspace stub for commands that take no folder argument.
struct NoFolderWorkspace;

impl Workspace for NoFolderWorkspace {
    fn pick_root(
        &self,
    ) -> Result<Option<Box<dyn TreeNode>>, Box<dyn std::error::Error + Send + Sync>> {
        Err("no folder was supplied for this command".into())
    }
}

/// LLM stub used when no API key is configured.
struct NotConfiguredLlm;

impl LlmClient for NotConfiguredLlm {
    fn complete(
        &self,
        _request: &crate::ports::llm::CompletionRequest,
    ) -> crate::ports::llm::CompletionFuture<'_> {
        Box::pin(async {
            Err(format!(
                "AI suggestions are not configured: set {} in the environment or a .env file",
                crate::config::API_KEY_VAR
            )
            .into())
        })
    }
}
