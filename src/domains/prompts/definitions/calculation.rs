//! Calculation prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// A prompt asking for a mathematical expression to be evaluated.
///
/// The expression is embedded verbatim; validation happens only when the
/// expression is later passed to the `calculate` tool.
pub struct CalculationPrompt;

impl PromptDefinition for CalculationPrompt {
    const NAME: &'static str = "calculation_prompt";
    const DESCRIPTION: &'static str = "Create a prompt for calculating a mathematical expression";

    fn template() -> &'static str {
        r#"Please evaluate this mathematical expression: {{expression}}

You can use the calculator tools if needed.
"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "expression".to_string(),
            title: None,
            description: Some("The mathematical expression to evaluate".to_string()),
            required: Some(true),
        }]
    }
}
