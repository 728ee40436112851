//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `handler.rs` - The `ToolHandler` contract every tool implements
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Name-keyed registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolHandler`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `build_tool_registry()`

pub mod definitions;
mod error;
mod handler;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ToolError;
pub use handler::ToolHandler;
pub use registry::{ToolRegistry, build_tool_registry};
