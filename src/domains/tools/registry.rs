//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is the single source of truth for the available tools. It
//! is populated exactly once at startup from the definitions in
//! `definitions/` and never mutated afterwards, so it can be shared behind
//! an `Arc` and read concurrently without locking.
//!
//! Dispatch also lives here: `invoke` resolves a call request against the
//! registry, validates the arguments through the tool's typed handler, and
//! normalizes the outcome into a `CallToolResult`. The tool router used by
//! the transports is built from this registry, so every transport shares
//! the same dispatch path.

use std::collections::HashMap;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{info, warn};

use super::definitions::{
    AddTool, CalculateTool, DivideTool, MultiplyTool, PowerTool, SubtractTool,
};
use super::error::ToolError;

/// Signature shared by every tool handler: validated JSON arguments in,
/// a finite numeric value or a typed error out.
pub type ToolHandlerFn = fn(JsonObject) -> Result<f64, ToolError>;

/// A registered tool: protocol metadata plus its handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    tool: Tool,
    handler: ToolHandlerFn,
}

impl ToolDescriptor {
    /// Create a descriptor from tool metadata and a handler.
    pub fn new(tool: Tool, handler: ToolHandlerFn) -> Self {
        Self { tool, handler }
    }

    /// The tool's registered name.
    pub fn name(&self) -> &str {
        self.tool.name.as_ref()
    }

    /// The tool's protocol metadata.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Validate the arguments and execute the handler.
    pub fn call(&self, arguments: JsonObject) -> Result<f64, ToolError> {
        (self.handler)(arguments)
    }
}

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    tools: HashMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry populated with the calculator tools.
    ///
    /// A duplicate name here is a programming error; the caller is expected
    /// to treat it as fatal and abort startup.
    pub fn with_builtin_tools() -> Result<Self, ToolError> {
        let mut registry = Self::new();

        registry.register(AddTool::descriptor())?;
        registry.register(SubtractTool::descriptor())?;
        registry.register(MultiplyTool::descriptor())?;
        registry.register(DivideTool::descriptor())?;
        registry.register(PowerTool::descriptor())?;
        registry.register(CalculateTool::descriptor())?;

        info!("Registered {} tools", registry.tools.len());

        Ok(registry)
    }

    /// Register a tool descriptor.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        let name = descriptor.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(ToolError::duplicate(name));
        }
        self.tools.insert(name, descriptor);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.tools.get(name).ok_or_else(|| ToolError::unknown(name))
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.values().map(|d| d.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.values().map(|d| d.tool().clone()).collect()
    }

    /// Dispatch a call request: look up the tool, validate arguments,
    /// execute, and normalize the outcome.
    ///
    /// Per-call failures are returned as error results; they never escape
    /// as panics or protocol-level faults, so the service stays ready for
    /// the next call.
    pub fn invoke(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        let descriptor = match self.lookup(name) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!("Tool call rejected: {}", e);
                return CallToolResult::error(vec![Content::text(e.to_string())]);
            }
        };

        match descriptor.call(arguments) {
            Ok(value) => CallToolResult::success(vec![Content::text(value.to_string())]),
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let names = registry.tool_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"add"));
        assert!(names.contains(&"subtract"));
        assert!(names.contains(&"multiply"));
        assert!(names.contains(&"divide"));
        assert!(names.contains(&"power"));
        assert!(names.contains(&"calculate"));
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = ToolRegistry::with_builtin_tools().unwrap();
        let result = registry.register(AddTool::descriptor());
        assert!(matches!(result, Err(ToolError::DuplicateTool(_))));
    }

    #[test]
    fn test_lookup_unknown_tool() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        assert!(matches!(
            registry.lookup("unknownOp"),
            Err(ToolError::UnknownTool(_))
        ));
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let first = registry.lookup("add").unwrap().tool().clone();
        let second = registry.lookup("add").unwrap().tool().clone();
        assert_eq!(first.name, second.name);
        assert_eq!(first.input_schema, second.input_schema);
    }

    #[test]
    fn test_invoke_success() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let args = serde_json::json!({ "a": 5, "b": 3 });
        let result = registry.invoke("add", args.as_object().unwrap().clone());
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(result_text(&result), "8");
    }

    #[test]
    fn test_invoke_unknown_tool() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let result = registry.invoke("unknown", serde_json::Map::new());
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Unknown tool"));
    }

    #[test]
    fn test_invoke_invalid_arguments() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let args = serde_json::json!({ "a": 5 });
        let result = registry.invoke("add", args.as_object().unwrap().clone());
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Invalid arguments"));
    }

    #[test]
    fn test_invoke_division_by_zero() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let args = serde_json::json!({ "a": 10, "b": 0 });
        let result = registry.invoke("divide", args.as_object().unwrap().clone());
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("divide by zero"));
    }

    #[test]
    fn test_invoke_calculate() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let args = serde_json::json!({ "expression": "max(3, 7) - min(1, 2)" });
        let result = registry.invoke("calculate", args.as_object().unwrap().clone());
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(result_text(&result), "6");
    }
}
