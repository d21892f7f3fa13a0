//! One-shot ETL command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shopgraph_graph::LoadOptions;
use tracing::info;

use super::ConnectionArgs;
use crate::output;

#[derive(Args)]
pub struct EtlArgs {
    /// Run the wipe and reload in one transaction
    #[arg(long)]
    pub atomic: bool,

    /// Print the load report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: EtlArgs, conn: &ConnectionArgs) -> Result<()> {
    let source = conn.source_pool()?;
    let graph = conn.graph_client().await?;

    if !args.json {
        println!("{}", "Reloading graph from PostgreSQL...".bold());
    }

    let result = shopgraph_graph::run_etl(&source, &graph, LoadOptions { atomic: args.atomic }).await;
    source.close().await;
    let report = result?;
    info!(
        rows = report.loaded.total(),
        skipped_events = report.skipped_events,
        atomic = args.atomic,
        "ETL command finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_load_report(&report);
    }

    Ok(())
}
