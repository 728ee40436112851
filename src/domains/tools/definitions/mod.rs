//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod products;

pub use products::{
    CreateProductTool, GetProductDetailTool, GetProductsTool, TestApiConnectionTool,
};
