//! `otto learn` command: scan learning materials, suggest study automations.

use crate::commands::{print_report, request_suggestions};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::scan;
use crate::suggest::prompt::compose_learning_prompt;

/// Extensions of learning materials worth capturing or listing.
///
/// `.pdf` and `.epub` match as key files but the summarizer records their
/// presence without reading them.
const KEY_EXTENSIONS: [&str; 4] = [".md", ".txt", ".pdf", ".epub"];

/// Returns `true` for files that look like learning materials.
fn is_key_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    KEY_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Execute the `learn` command.
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

    let prompt = compose_learning_prompt(&summary.render());
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

    #[test]
    fn matches_notes_and_documents() {
        assert!(is_key_file("lecture-01.md"));
        assert!(is_key_file("syllabus.txt"));
        assert!(is_key_file("Textbook.PDF"));
        assert!(!is_key_file("photo.jpg"));
    }

    #[tokio::test]
    async fn scans_materials_and_reports() {
        let root = MemoryNode::dir(
            "course",
            vec![
                MemoryNode::file("week1.md", b"# intro".to_vec()),
                MemoryNode::file("book.pdf", b"%PDF".to_vec()),
            ],
        );
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::new(root)),
            Box::new(StubLlmClient::with_text(
                r#"{"suggestions": [{"area": "flashcards", "tool": "anki",
                    "benefit": "Saves 30 minutes daily", "steps": ["export notes"]}]}"#,
            )),
        );
        let config = Config { api_key: Some("test-key".into()), model: "stub".into() };
        assert!(run(&ctx, &config, 3).await.is_ok());
    }
}
