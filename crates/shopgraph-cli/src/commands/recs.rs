//! Recommendation lookup command.

use anyhow::Result;
use clap::Args;
use shopgraph_graph::DEFAULT_LIMIT;

use super::ConnectionArgs;
use crate::output;

#[derive(Args)]
pub struct RecsArgs {
    /// Customer id
    pub customer_id: i64,

    /// Maximum number of recommendations
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: RecsArgs, conn: &ConnectionArgs) -> Result<()> {
    let graph = conn.graph_client().await?;
    let recs = shopgraph_graph::recommend(&graph, args.customer_id, args.limit).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
    } else {
        output::print_recommendations(&recs);
    }

    Ok(())
}
