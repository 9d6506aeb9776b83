use anyhow::{Context, Result};
use clap::Parser;
use pioneer_tools::harness::EngineHarness;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "perft_capture", about = "Run the engine's perft and capture its per-move node counts")]
struct Args {
    /// Engine executable to drive
    #[arg(value_name = "ENGINE", default_value = "build/pioneerV4.exe")]
    engine: String,

    /// Perft depth
    #[arg(long, default_value_t = 6)]
    depth: u32,

    /// Write records here instead of stdout (e.g. m.txt)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Give up if the engine stays silent this long; default is to wait forever
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut engine = EngineHarness::spawn(&args.engine)?;
    engine.set_timeout(args.timeout_ms.map(Duration::from_millis));
    engine.wait_for_prompt()?;
    let records = engine.capture_perft(args.depth)?;
    let status = engine.quit()?;
    log::info!("captured {} records, engine exit status: {status}", records.len());

    match args.out.as_deref() {
        Some(path) => {
            let mut w = BufWriter::new(
                File::create(path).with_context(|| format!("creating {}", path.display()))?,
            );
            for line in &records {
                writeln!(w, "{line}")?;
            }
            w.flush()?;
        }
        None => {
            for line in &records {
                println!("{line}");
            }
        }
    }
    Ok(())
}
