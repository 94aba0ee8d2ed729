//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to
//! perform specific computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `eval/` - Restricted expression evaluator used by the `calculate` tool
//! - `registry.rs` - Central tool registry, lookup, and dispatch
//! - `router.rs` - ToolRouter builder for the rmcp transports
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, execute(), and descriptor()
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `ToolRegistry::with_builtin_tools`
//!
//! The router is built from the registry, so nothing else changes.

pub mod definitions;
mod error;
pub mod eval;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::{ToolDescriptor, ToolHandlerFn, ToolRegistry};
pub use router::build_tool_router;
