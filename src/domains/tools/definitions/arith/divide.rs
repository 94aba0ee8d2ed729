//! Division tool definition.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::{ToolDescriptor, ToolError};

/// Parameters for the divide tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DivideParams {
    /// Numerator
    pub a: f64,

    /// Denominator (must not be zero)
    pub b: f64,
}

/// Division tool - divides a by b.
pub struct DivideTool;

impl DivideTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "divide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Divide a by b. Returns the result of a / b. Fails when b is zero.";

    /// Execute the tool logic.
    pub fn execute(params: &DivideParams) -> Result<f64, ToolError> {
        if params.b == 0.0 {
            return Err(ToolError::DivisionByZero);
        }
        Ok(params.a / params.b)
    }

    /// Typed entry point used by the registry dispatch.
    fn handler(arguments: JsonObject) -> Result<f64, ToolError> {
        let params: DivideParams = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::execute(&params)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DivideParams>(),
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
