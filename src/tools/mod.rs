//! RSM Tools module
//!
//! MCP tool implementations for the Recipe Scaling Manager.

pub mod conversions;
pub mod scaling;
pub mod status;
