//! Command dispatch and handlers.

pub mod learn;
pub mod project;
pub mod task;

use crate::chart;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::ports::llm::CompletionRequest;
use crate::suggest::prompt::{parse_suggestions, suggestion_schema};
use crate::suggest::{rank, Suggestion};

/// Maximum tokens requested for suggestion responses.
const MAX_TOKENS: u32 = 4096;

/// Dispatch a parsed command to its handler.
///
/// Builds the live service context and a current-thread async runtime; each
/// handler runs to completion on it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let mut config = Config::from_env();
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    match &cli.command {
        Command::Task { description } => {
            let ctx = ServiceContext::live(&config, None);
            runtime.block_on(task::run(&ctx, &config, description))
        }
        Command::Project { path, max_depth } => {
            let ctx = ServiceContext::live(&config, Some(path.clone()));
            runtime.block_on(project::run(&ctx, &config, *max_depth))
        }
        Command::Learn { path, max_depth } => {
            let ctx = ServiceContext::live(&config, Some(path.clone()));
            runtime.block_on(learn::run(&ctx, &config, *max_depth))
        }
    }
}

/// Sends a composed prompt to the LLM and parses the suggestion list.
pub(crate) async fn request_suggestions(
    ctx: &ServiceContext,
    config: &Config,
    prompt: String,
) -> Result<Vec<Suggestion>, String> {
    let request = CompletionRequest {
        model: config.model.clone(),
        prompt,
        max_tokens: MAX_TOKENS,
        response_schema: Some(suggestion_schema()),
    };

    let response = ctx
        .llm
        .complete(&request)
        .await
        .map_err(|e| format!("failed to get suggestions: {e}"))?;

    parse_suggestions(&response.text)
}

/// Prints the suggestion list and, when anything ranked, the hours chart.
pub(crate) fn print_report(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("No suggestions returned.");
        return;
    }

    for (index, suggestion) in suggestions.iter().enumerate() {
        println!("{}. {} (tool: {})", index + 1, suggestion.area, suggestion.tool);
        println!("   {}", suggestion.benefit);
        for (step_index, step) in suggestion.steps.iter().enumerate() {
            println!("   {}) {step}", step_index + 1);
        }
        println!();
    }

    let records = rank(suggestions);
    if !records.is_empty() {
        println!("Estimated hours saved per week:");
        print!("{}", chart::render(&records));
    }
}
