//! Calculator help resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Help text describing every calculator operation, with usage examples.
///
/// The text is generated per read; it carries no external state, so every
/// read returns the same content.
pub struct CalculatorHelpResource;

impl ResourceDefinition for CalculatorHelpResource {
    const URI: &'static str = "calculator://help";
    const NAME: &'static str = "Calculator Help";
    const DESCRIPTION: &'static str = "Help information about the calculator operations";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Generated(help_text)
    }
}

fn help_text() -> String {
    "Calculator MCP Server

This server provides basic mathematical operations:

- add(a, b) - Add two numbers
- subtract(a, b) - Subtract b from a
- multiply(a, b) - Multiply two numbers
- divide(a, b) - Divide a by b (b cannot be zero)
- power(base, exponent) - Calculate base raised to the power of exponent
- calculate(expression) - Evaluate a mathematical expression

Examples:
  add(5, 3) -> 8
  subtract(10, 4) -> 6
  multiply(2.5, 4) -> 10
  divide(10, 2) -> 5
  power(2, 3) -> 8
  calculate(\"10 + 5 * 2\") -> 20
"
    .to_string()
}
