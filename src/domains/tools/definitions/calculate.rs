//! Expression evaluation tool definition.
//!
//! Delegates to the restricted evaluator in `eval/`. The evaluator accepts
//! numeric literals, `+ - * /`, exponentiation, parentheses, and the
//! whitelisted functions abs, max, min, pow, round - nothing else.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::eval;
use crate::domains::tools::{ToolDescriptor, ToolError};

/// Parameters for the calculate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateParams {
    /// A mathematical expression string, e.g. "10 + 5 * 2" or "max(3, 7)"
    pub expression: String,
}

/// Expression evaluation tool - evaluates a mathematical expression.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Evaluate a mathematical expression. Supports +, -, *, /, exponentiation \
         (** or ^), parentheses, and the functions abs, max, min, pow, round.";

    /// Execute the tool logic.
    pub fn execute(params: &CalculateParams) -> Result<f64, ToolError> {
        eval::evaluate(&params.expression)
            .map_err(|e| ToolError::invalid_expression(e.to_string()))
    }

    /// Typed entry point used by the registry dispatch.
    fn handler(arguments: JsonObject) -> Result<f64, ToolError> {
        let params: CalculateParams = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::execute(&params)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CalculateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create the registry descriptor for this tool.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::to_tool(), Self::handler)
    }
}
