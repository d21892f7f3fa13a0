//! Web server command.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shopgraph_core::ShopError;
use shopgraph_graph::LoadOptions;
use shopgraph_web::state::AppState;
use tracing::info;

use super::ConnectionArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// IP address to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Run ETL triggers as a single all-or-nothing transaction
    #[arg(long)]
    pub atomic_etl: bool,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (used with --log)
    #[arg(long, default_value = "logs/shopgraph.log")]
    pub log_file: PathBuf,
}

impl ServeArgs {
    fn addr(&self) -> Result<SocketAddr, ShopError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ShopError::config(format!("invalid bind address '{}:{}': {}", self.host, self.port, e)))
    }
}

pub async fn execute(args: ServeArgs, conn: &ConnectionArgs) -> Result<()> {
    let addr = args.addr()?;
    let source = conn.source_pool()?;
    let graph = conn.graph_client().await?;
    let state = AppState::new(source, graph, LoadOptions { atomic: args.atomic_etl });

    println!();
    println!("  {} {}", "shopgraph".cyan().bold(), "Query Service".bold());
    println!();
    println!("  {}    http://{}/health", "Health".green(), addr);
    println!("  {}       POST http://{}/etl/run", "ETL".green(), addr);
    println!("  {}      http://{}/recs/{{customer_id}}?limit=5", "Recs".green(), addr);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    info!(%addr, atomic_etl = args.atomic_etl, neo4j = %conn.neo4j_uri, "Starting query service");
    shopgraph_web::run_server(state, addr).await?;

    Ok(())
}
