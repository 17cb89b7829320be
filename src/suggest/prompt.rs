//! Prompt templates and parsing of the AI service's structured response.
//!
//! All three prompts ask for the same JSON shape: an object with a
//! `suggestions` array of `{area, tool, benefit, steps[]}` records. The
//! response schema from [`suggestion_schema`] constrains the model output;
//! the prompt text repeats the shape so the instruction survives providers
//! that ignore schema configuration.

use serde::Deserialize;
use serde_json::json;

use crate::suggest::Suggestion;

/// The JSON shape reminder appended to every prompt.
const RESPONSE_FORMAT: &str = "Respond with JSON only, no markdown fences, in the form:\n\
    {\"suggestions\": [{\"area\": \"...\", \"tool\": \"...\", \"benefit\": \"...\", \
    \"steps\": [\"...\"]}]}\n\
    Phrase each benefit with a number and a time unit, e.g. \"Saves 2 hours per week\" \
    or \"Saves 30 minutes daily\".";

/// Builds the prompt for automating a described repetitive task.
#[must_use]
pub fn compose_task_prompt(task: &str) -> String {
    format!(
        "You are an automation consultant. A user performs this repetitive task:\n\n\
         {task}\n\n\
         Suggest 3 to 5 concrete ways to automate it. For each suggestion give the \
         area of the task being automated, one specific tool or service, the \
         estimated time saved, and short ordered setup steps.\n\n\
         {RESPONSE_FORMAT}"
    )
}

/// Builds the prompt for project/DevOps automation from a folder summary.
#[must_use]
pub fn compose_project_prompt(summary: &str) -> String {
    format!(
        "You are a DevOps and developer-productivity consultant. Here is a summary \
         of a software project, including its folder structure and key files:\n\n\
         {summary}\n\n\
         Suggest 3 to 5 automations for building, testing, deploying, or maintaining \
         this project. For each suggestion give the area being automated, one \
         specific tool or service, the estimated time saved, and short ordered \
         setup steps.\n\n\
         {RESPONSE_FORMAT}"
    )
}

/// Builds the prompt for study automation from a learning-materials summary.
#[must_use]
pub fn compose_learning_prompt(summary: &str) -> String {
    format!(
        "You are a learning coach. Here is a summary of a folder of learning \
         materials (notes, readings, exercises):\n\n\
         {summary}\n\n\
         Suggest 3 to 5 ways to automate studying this material, such as flashcard \
         generation, summarization, or spaced-repetition scheduling. For each \
         suggestion give the area being automated, one specific tool or service, \
         the estimated time saved, and short ordered setup steps.\n\n\
         {RESPONSE_FORMAT}"
    )
}

/// Returns the response schema for the suggestions payload.
///
/// Uses the uppercase type names of the Gemini `responseSchema` dialect.
#[must_use]
pub fn suggestion_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "area": { "type": "STRING" },
                        "tool": { "type": "STRING" },
                        "benefit": { "type": "STRING" },
                        "steps": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["area", "tool", "benefit", "steps"]
                }
            }
        },
        "required": ["suggestions"]
    })
}

/// Parses the AI response text into the suggestion list.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or the `suggestions`
/// field is missing or malformed.
pub fn parse_suggestions(text: &str) -> Result<Vec<Suggestion>, String> {
    #[derive(Deserialize)]
    struct Envelope {
        suggestions: Vec<Suggestion>,
    }

    let envelope: Envelope = serde_json::from_str(text)
        .map_err(|e| format!("failed to get suggestions: unexpected response shape: {e}"))?;
    Ok(envelope.suggestions)
}
