use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use receipt_processor::{validate_receipt, PointsBreakdown, RawReceipt};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "score" {
        run_score(Path::new(&args[2]))?;
    } else {
        print_usage();
    }

    Ok(())
}

fn print_usage() {
    println!("🧾 Receipt Processor v{}", receipt_processor::VERSION);
    println!();
    println!("Usage:");
    println!("   receipt-processor score <receipt.json>   Score a receipt file");
    println!("   receipt-server                           Start the HTTP API");
}

fn run_score(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;
    let raw: RawReceipt =
        serde_json::from_str(&content).context("Failed to parse receipt JSON")?;

    let validated = match validate_receipt(&raw) {
        Ok(validated) => validated,
        Err(e) => {
            log::debug!("Validation failed on field {}", e.field());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let breakdown = PointsBreakdown::for_receipt(&validated);

    println!("🧾 {} ({})", validated.retailer, validated.purchased_at);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Items:  {}", validated.items.len());
    println!("   Total:  ${}", validated.total);
    println!();
    println!("   Retailer name          {:>6}", breakdown.retailer_name);
    println!("   Round dollar total     {:>6}", breakdown.round_dollar_total);
    println!("   Quarter multiple total {:>6}", breakdown.quarter_multiple_total);
    println!("   Item pairs             {:>6}", breakdown.item_pairs);
    println!("   Item descriptions      {:>6}", breakdown.item_descriptions);
    println!("   Odd purchase day       {:>6}", breakdown.odd_purchase_day);
    println!("   Afternoon purchase     {:>6}", breakdown.afternoon_purchase);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ {} points", breakdown.total());

    Ok(())
}
