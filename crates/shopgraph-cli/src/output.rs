//! Terminal output formatting.

use colored::Colorize;
use shopgraph_core::{LoadReport, RecommendationList};

/// Print the per-table counts of an ETL run.
pub fn print_load_report(report: &LoadReport) {
    let loaded = &report.loaded;

    println!("\n{}", "Load complete:".green().bold());
    for (table, count) in [
        ("customers", loaded.customers),
        ("categories", loaded.categories),
        ("products", loaded.products),
        ("orders", loaded.orders),
        ("order_items", loaded.order_items),
        ("events", loaded.events),
    ] {
        println!("  {:<12} {}", table, count.to_string().cyan());
    }

    if report.skipped_events > 0 {
        println!(
            "\n  {} {} events with unknown event_type",
            "Skipped".yellow(),
            report.skipped_events
        );
    }
}

/// Print ranked recommendations.
pub fn print_recommendations(list: &RecommendationList) {
    println!("{} {}", "Recommendations for customer".bold(), list.customer.to_string().yellow());
    println!("{}", "─".repeat(50));

    if list.is_empty() {
        println!("{}", "No recommendations.".dimmed());
        return;
    }

    println!("{:<4} {:<10} {:<28} {:>6}", "#", "Product", "Name", "Score");
    for (i, rec) in list.recommendations.iter().enumerate() {
        println!(
            "{:<4} {:<10} {:<28} {:>6}",
            (i + 1).to_string().dimmed(),
            rec.product_id,
            rec.name,
            rec.score.to_string().cyan()
        );
    }
}
