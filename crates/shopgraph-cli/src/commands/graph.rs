//! Graph inspection commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::ConnectionArgs;

#[derive(Subcommand)]
pub enum GraphCommands {
    /// Show node and relationship counts
    Status,
}

pub async fn execute(cmd: GraphCommands, conn: &ConnectionArgs) -> Result<()> {
    let client = conn.graph_client().await?;

    match cmd {
        GraphCommands::Status => cmd_status(&client).await,
    }
}

/// Show graph status (node/relationship counts per label).
async fn cmd_status(client: &shopgraph_graph::GraphClient) -> Result<()> {
    println!("{}", "Graph Status".bold());
    println!("{}", "─".repeat(40));

    let counts = client.get_counts().await?;
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());
    println!();
    for (label, count) in &counts.by_label {
        println!("  {:<14} {}", format!("{}:", label), count.to_string().cyan());
    }

    println!("{}", "─".repeat(40));

    Ok(())
}
