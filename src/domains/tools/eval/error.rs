//! Evaluator-specific error types.

use thiserror::Error;

/// Errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The input could not be tokenized or parsed.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// An identifier outside the function whitelist was referenced.
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// A whitelisted function was called with the wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    Arity {
        function: String,
        expected: &'static str,
        actual: usize,
    },

    /// An argument value a function cannot work with.
    #[error("Invalid argument for {function}: {reason}")]
    InvalidArgument { function: String, reason: String },

    /// Division with a zero divisor inside the expression.
    #[error("Division by zero")]
    DivisionByZero,

    /// The computed value is not representable as a finite real number.
    #[error("Result is not a finite number")]
    NonFinite,
}

impl EvalError {
    /// Create a new syntax error.
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    /// Create a new unknown-identifier error.
    pub fn unknown_identifier(name: impl Into<String>) -> Self {
        Self::UnknownIdentifier(name.into())
    }

    /// Create a new arity error.
    pub fn arity(function: impl Into<String>, expected: &'static str, actual: usize) -> Self {
        Self::Arity {
            function: function.into(),
            expected,
            actual,
        }
    }

    /// Create a new invalid-argument error.
    pub fn invalid_argument(function: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function: function.into(),
            reason: reason.into(),
        }
    }
}
