//! Recipe Scaling Manager (RSM)
//!
//! An MCP server for cooking unit conversion and recipe scaling.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use rsm::build_info;
use rsm::config::Config;
use rsm::mcp::RsmService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rsm=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env();
    if let Some(path) = &config.density_path {
        eprintln!("Density overrides: {}", path.display());
    }

    let engine = config.engine()?;
    tracing::info!("Density table ready with {} entries", engine.densities().len());

    let service = RsmService::new(engine, config.density_path.clone());

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
