mod collector;
mod config;
mod keys;
mod log_file;
mod record;

use crate::collector::Collector;
use crate::config::PollConfig;
use crate::keys::{AsyncKeyState, ScanCodeNames};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = PollConfig::default();

    if !keys::is_supported() {
        eprintln!("[keys] Keyboard polling is only available on Windows; nothing will be recorded");
    }

    let mut collector = Collector::new(config, AsyncKeyState, ScanCodeNames);

    println!(
        "key-collector v{} started, logging to {}",
        env!("CARGO_PKG_VERSION"),
        collector.config().log_path.display()
    );

    // The loop never returns; Ctrl+C is the only way out.
    collector.run_until(tokio::signal::ctrl_c()).await;

    let totals = collector.totals();
    println!(
        "Shutting down ({} recorded, {} unnamed, {} dropped)",
        totals.recorded, totals.unnamed, totals.dropped
    );
}
