//! `otto task` command: automations for a described repetitive task.

use crate::commands::{print_report, request_suggestions};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::suggest::prompt::compose_task_prompt;

/// Execute the `task` command.
///
/// # Errors
///
/// Returns an error string if the AI service is not configured, the call
/// fails, or the response cannot be parsed.
pub async fn run(ctx: &ServiceContext, config: &Config, description: &str) -> Result<(), String> {
    config.require_api_key()?;

    let prompt = compose_task_prompt(description);
    let suggestions = request_suggestions(ctx, config, prompt).await?;
    print_report(&suggestions);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::adapters::memory::{MemoryWorkspace, StubLlmClient};
    use crate::config::Config;
    use crate::context::ServiceContext;

    fn configured() -> Config {
        Config { api_key: Some("test-key".into()), model: "stub".into() }
    }

    #[tokio::test]
    async fn reports_not_configured_without_api_key() {
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::cancelled()),
            Box::new(StubLlmClient::with_text("{}")),
        );
        let config = Config { api_key: None, model: "stub".into() };
        let err = run(&ctx, &config, "sort invoices").await.unwrap_err();
        assert!(err.contains("not configured"));
    }

    #[tokio::test]
    async fn succeeds_on_well_formed_response() {
        let response = r#"{"suggestions": [{"area": "invoices", "tool": "ocr",
            "benefit": "Saves 1 hour per day", "steps": ["scan", "extract"]}]}"#;
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::cancelled()),
            Box::new(StubLlmClient::with_text(response)),
        );
        assert!(run(&ctx, &configured(), "sort invoices").await.is_ok());
    }

    #[tokio::test]
    async fn malformed_response_is_a_suggestion_failure() {
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::cancelled()),
            Box::new(StubLlmClient::with_text("sorry, no JSON today")),
        );
        let err = run(&ctx, &configured(), "sort invoices").await.unwrap_err();
        assert!(err.contains("failed to get suggestions"));
    }

    #[tokio::test]
    async fn llm_failure_is_surfaced() {
        let ctx = ServiceContext::with_parts(
            Box::new(MemoryWorkspace::cancelled()),
            Box::new(StubLlmClient::failing("rate limited")),
        );
        let err = run(&ctx, &configured(), "sort invoices").await.unwrap_err();
        assert!(err.contains("rate limited"));
    }
}
