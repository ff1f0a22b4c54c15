//! CV category taxonomy and the JSON schema declared to the model.
//!
//! The schema is only ever sent outward. Nothing in this crate parses model
//! output against it.

use serde_json::{json, Map, Value};

use crate::llm_client::OutputSchema;

/// Single-string biographical fields.
pub const NAME_FIELDS: [&str; 3] = ["first_name", "middle_name", "last_name"];

/// List-of-string CV sections, in the order they are presented to the model.
pub const CATEGORY_FIELDS: [&str; 15] = [
    "journal_publication",
    "grant_research",
    "career_items",
    "education",
    "certification_license",
    "award",
    "speaking_engagement",
    "book_publication",
    "research_clinical_experience",
    "peer_review_publication",
    "teaching_lecture_course",
    "committee_association_board_chair_investigator",
    "community_service",
    "leadership_activities",
    "reviewer_role",
];

pub const SCHEMA_NAME: &str = "cv";

/// Builds the strict JSON schema: every field required, no extras.
pub fn cv_schema() -> Value {
    let mut properties = Map::new();
    for field in NAME_FIELDS {
        properties.insert(field.to_string(), json!({ "type": "string" }));
    }
    for field in CATEGORY_FIELDS {
        properties.insert(
            field.to_string(),
            json!({ "type": "array", "items": { "type": "string" } }),
        );
    }

    let required: Vec<&str> = NAME_FIELDS.iter().chain(CATEGORY_FIELDS.iter()).copied().collect();

    json!({
        "title": "CV",
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false
    })
}

pub fn cv_output_schema() -> OutputSchema {
    OutputSchema {
        name: SCHEMA_NAME,
        schema: cv_schema(),
    }
}
