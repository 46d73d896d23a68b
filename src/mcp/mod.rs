//! MCP server module
//!
//! Exposes the conversion and scaling tools over the Model Context Protocol.

pub mod server;

pub use server::RsmService;
