//! Exponentiation tool definition.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::{ToolDescriptor, ToolError};

/// Parameters for the power tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PowerParams {
    /// The base number
    pub base: f64,

    /// The exponent
    pub exponent: f64,
}

/// Exponentiation tool - raises base to the power of exponent.
pub struct PowerTool;

impl PowerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "power";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Calculate base raised to the power of exponent. Fails when the result \
         is not a finite real number.";

    /// Execute the tool logic.
    ///
    /// A negative base with a fractional exponent has no real result and
    /// `powf` yields NaN; overflow yields an infinity. Both are rejected.
    pub fn execute(params: &PowerParams) -> Result<f64, ToolError> {
        let result = params.base.powf(params.exponent);
        if !result.is_finite() {
            return Err(ToolError::invalid_arguments(format!(
                "{} ^ {} is not a finite real number",
                params.base, params.exponent
            )));
        }
        Ok(result)
    }

    /// Typed entry point used by the registry dispatch.
    fn handler(arguments: JsonObject) -> Result<f64, ToolError> {
        let params: PowerParams = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::execute(&params)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PowerParams>(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_execute() {
        let params = PowerParams {
            base: 2.0,
            exponent: 3.0,
        };
        assert_eq!(PowerTool::execute(&params).unwrap(), 8.0);
    }

    #[test]
    fn test_power_fractional_exponent() {
        let params = PowerParams {
            base: 2.0,
            exponent: 0.5,
        };
        let result = PowerTool::execute(&params).unwrap();
        assert!((result - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_power_negative_base_fractional_exponent() {
        let params = PowerParams {
            base: -2.0,
            exponent: 0.5,
        };
        assert!(matches!(
            PowerTool::execute(&params),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_power_overflow() {
        let params = PowerParams {
            base: 10.0,
            exponent: 400.0,
        };
        assert!(matches!(
            PowerTool::execute(&params),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_power_zero_exponent() {
        let params = PowerParams {
            base: 7.0,
            exponent: 0.0,
        };
        assert_eq!(PowerTool::execute(&params).unwrap(), 1.0);
    }

    #[test]
    fn test_power_descriptor_dispatch() {
        let descriptor = PowerTool::descriptor();
        let args = serde_json::json!({ "base": 2, "exponent": 3 });
        let result = descriptor.call(args.as_object().unwrap().clone()).unwrap();
        assert_eq!(result, 8.0);
    }
}
