//! Calculator MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a
//! fixed set of calculator operations, a help resource, and a calculation
//! prompt, organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Calculator operations and the restricted expression evaluator
//!   - **resources**: The `calculator://help` resource
//!   - **prompts**: The `calculation_prompt` template
//!
//! # Example
//!
//! ```rust,no_run
//! use calculator_mcp_server::core::{CalculatorServer, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = CalculatorServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CalculatorServer, Config, Error, Result};
