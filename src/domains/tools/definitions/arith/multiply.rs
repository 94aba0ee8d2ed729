//! Multiplication tool definition.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::{ToolDescriptor, ToolError};

/// Parameters for the multiply tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MultiplyParams {
    /// First number
    pub a: f64,

    /// Second number
    pub b: f64,
}

/// Multiplication tool - multiplies two numbers.
pub struct MultiplyTool;

impl MultiplyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "multiply";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Multiply two numbers. Returns the product of a and b.";

    /// Execute the tool logic. Never fails.
    pub fn execute(params: &MultiplyParams) -> f64 {
        params.a * params.b
    }

    /// Typed entry point used by the registry dispatch.
    fn handler(arguments: JsonObject) -> Result<f64, ToolError> {
        let params: MultiplyParams = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(&params))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MultiplyParams>(),
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
