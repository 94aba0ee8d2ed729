//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool with the same name was registered twice. Startup-only and
    /// fatal: it indicates a programming error, not a runtime condition.
    #[error("Duplicate tool registration: {0}")]
    DuplicateTool(String),

    /// Missing or wrong-typed arguments, or a mathematically undefined
    /// real-number operation.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Division with a zero divisor.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The expression could not be parsed or evaluated.
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid expression" error.
    pub fn invalid_expression(msg: impl Into<String>) -> Self {
        Self::InvalidExpression(msg.into())
    }
}
