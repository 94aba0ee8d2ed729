//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the small rendering
//! engine for `{{variable}}` substitution.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    /// Uses a simple {{variable}} syntax for substitution.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// `{{variable}}` is replaced with the value of `variable`, verbatim
    /// and without validation. Placeholders left unmatched (optional
    /// arguments the caller omitted) are removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(clean_unmatched_placeholders(&result))
    }
}

/// Remove any unmatched placeholder variables.
fn clean_unmatched_placeholders(template: &str) -> String {
    let mut result = template.to_string();

    while let Some(start) = result.find("{{") {
        match result[start..].find("}}") {
            Some(end) => {
                result = format!("{}{}", &result[..start], &result[start + end + 2..]);
            }
            None => break,
        }
    }

    result
}
