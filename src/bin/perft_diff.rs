use anyhow::{Context, Result};
use clap::Parser;
use pioneer_tools::{diff, listing};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "perft_diff", about = "Compare two perft listings and report every mismatched count")]
struct Args {
    /// Listing from the engine under test
    #[arg(value_name = "MINE", default_value = "m.txt")]
    mine: PathBuf,

    /// Listing from the reference engine
    #[arg(value_name = "STOCK", default_value = "s.txt")]
    stock: PathBuf,

    /// Also write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mine = listing::read_listing(&args.mine)?;
    let stock = listing::read_listing(&args.stock)?;
    let report = diff::diff(&mine, &stock);

    for line in report.lines() {
        println!("{line}");
    }
    if let Some(path) = args.json.as_deref() {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }
    log::info!(
        "{} tokens compared, {} matching, {} discrepancies",
        report.total,
        report.matching,
        report.discrepancies.len()
    );
    Ok(())
}
