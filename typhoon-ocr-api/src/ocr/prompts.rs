//! Prompt templates for the Typhoon OCR engine
//!
//! Typhoon is instructed to answer with a JSON object holding a single
//! `natural_text` key; the client unwraps that key from the completion.

use crate::models::TaskType;

/// Prompt for the `default` task: a plain markdown reading of the page.
pub fn default_prompt() -> &'static str {
    r#"Below is an image of a document page. Simply return the markdown representation of this document, presenting tables in markdown format as they naturally appear.
If the document contains images, use a placeholder like dummy.png for each image.
Your final output must be in JSON format with a single key `natural_text` containing the response."#
}

/// Prompt for the `structure` task: a layout-preserving reading that keeps
/// tables and figures machine-readable.
pub fn structure_prompt() -> &'static str {
    r#"Below is an image of a document page. Carefully reconstruct the document, considering both its layout and its text.
Return tables in HTML format. Return figures as markdown images with a brief description in the alt text. Preserve checkboxes and form fields.
Your final output must be in JSON format with a single key `natural_text` containing the response."#
}

/// Select the engine prompt for a task type.
///
/// # Example
/// ```
/// use typhoon_ocr_api::models::TaskType;
/// use typhoon_ocr_api::ocr::prompts::prompt_for;
///
/// assert!(prompt_for(TaskType::Default).contains("natural_text"));
/// ```
pub fn prompt_for(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::Default => default_prompt(),
        TaskType::Structure => structure_prompt(),
    }
}
