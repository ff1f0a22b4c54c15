// CV labeling prompt template.
// The template text lives in `prompts/cv_label.txt` so it can be revised without
// touching handler code.

use crate::cv::schema::{cv_output_schema, cv_schema, CATEGORY_FIELDS, NAME_FIELDS};
use crate::llm_client::CompletionRequest;

pub const CV_LABEL_PROMPT: &str = include_str!("../../prompts/cv_label.txt");

/// Renders the labeling prompt. `{cv_text}` is substituted last so that text
/// inside the CV is never itself treated as a placeholder.
pub fn build_cv_prompt(cv_text: &str) -> String {
    let categories = NAME_FIELDS
        .iter()
        .chain(CATEGORY_FIELDS.iter())
        .map(|field| format!("- {field}"))
        .collect::<Vec<_>>()
        .join("\n");
    let schema = serde_json::to_string_pretty(&cv_schema()).unwrap_or_default();

    CV_LABEL_PROMPT
        .replace("{categories}", &categories)
        .replace("{schema}", &schema)
        .replace("{cv_text}", cv_text)
}

/// The full completion request for one uploaded CV.
pub fn build_cv_request(cv_text: &str) -> CompletionRequest {
    CompletionRequest {
        prompt: build_cv_prompt(cv_text),
        output_schema: Some(cv_output_schema()),
    }
}
