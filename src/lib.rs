//! Recipe Scaling Manager (RSM) Library
//!
//! Cooking unit conversion, density-aware weight/volume conversion, and
//! recipe scaling.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod measure;
pub mod models;
pub mod scaling;
pub mod tools;
