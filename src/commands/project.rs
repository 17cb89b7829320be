//! `otto project` command: scan a project folder, suggest DevOps automations.

use crate::commands::{print_report, request_suggestions};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::scan;
use crate::suggest::prompt::compose_project_prompt;

/// File names whose content is captured during a project scan.
const KEY_FILES: [&str; 10] = [
    "readme.md",
    "package.json",
    "cargo.toml",
    "pyproject.toml",
    "requirements.txt",
    "makefile",
    "dockerfile",
    "docker-compose.yml",
    ".gitlab-ci.yml",
    "justfile",
];

/// Returns `true` for files worth reading during a project scan.
fn is_key_file(name: &str) -> bool {
    KEY_FILES.contains(&name.to_lowercase().as_str())
}

/// Execute the `project` command.
///
/// A cancelled folder pick prints a notice and succeeds; a blank scan is an
/// error.
///
/// # Errors
///
/// Returns an error string if configuration, folder access, the AI call, or
/// response parsing fails.
pub async fn run(ctx: &ServiceContext, config: &Config, max_depth: usize) -> Result<(), String> {
    config.require_api_key()?;

    let Some(root) =
        ctx.workspace.pick_root().map_err(|e| format!("cannot scan folder: {e}"))?
    else {
        println!("No folder selected.");
        return Ok(());
    };

    let summary = scan::summarize(root.as_ref(), is_key_file, max_depth);
    if summary.is_blank() {
        return Err("the selected folder appears empty or unreadable".to_string());
    }
    println!("Scanned '{}' ({} entries).\n", summary.root_name, summary.tree.len());

    let prompt = compose_project_prompt(&summary.render());
    let suggestions = request_suggestions(ctx, config, prompt).await?;
    print_report(&suggestions);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_key_file, run};
    use crate::adapters::memory::{MemoryNode, MemoryWorkspace, StubLlmClient};
    use crate::config::Config;
    use crate::context::ServiceContext;

    fn configured() -> Config {
        Config { api_key: Some("test-key".into()), model: "stub".into() }
    }

    fn suggestions_json() -> &'static str {
        r#"{"suggestions": [{"area": "ci", "tool": "github actions",
            "benefit": "Saves 2 hours per week", "steps": ["add workflow file"]}]}"#
    }

    #[test]
    fn key_file_matching_ignores_case() {
        assert!(is_key_file("README.md"));
        assert!(is_key_file("Dockerfile"));
        assert!(!is_key_file("main.rs"));
    }

    #[tokio::test]
    async fn cancelled_pick_is_a_silent_no_op() {
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::cancelled()),
            Box::new(StubLlmClient::with_text(suggestions_json())),
        );
        assert!(run(&ctx, &configured(), 3).await.is_ok());
    }

    #[tokio::test]
    async fn blank_folder_is_an_error() {
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::new(MemoryNode::dir("empty", vec![]))),
            Box::new(StubLlmClient::with_text(suggestions_json())),
        );
        let err = run(&ctx, &configured(), 3).await.unwrap_err();
        assert!(err.contains("empty or unreadable"));
    }

    #[tokio::test]
    async fn scans_and_reports_suggestions() {
        let root = MemoryNode::dir(
            "repo",
            vec![
                MemoryNode::file("README.md", b"# demo".to_vec()),
                MemoryNode::dir("src", vec![MemoryNode::file("main.rs", b"fn main() {}".to_vec())]),
            ],
        );
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::new(root)),
            Box::new(StubLlmClient::with_text(suggestions_json())),
        );
        assert!(run(&ctx, &configured(), 3).await.is_ok());
    }
}
