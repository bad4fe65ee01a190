//! Minimal host shim: wires configuration and the dispatcher, then
//! analyzes thoughts read line by line from stdin.

use anyhow::Context;
use neurolens_core::{config::AppConfig, DispatcherHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    let dispatcher = DispatcherHandle::from_config(&config);

    println!("Type a thought and press Enter (Ctrl-D to exit).");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match dispatcher.analyze(text.to_string()).await {
            Ok(report) => {
                println!("{}", report.headline());
                println!("{}", report.poetic_line);
                println!("{}", report.bias_summary());
            }
            Err(e) => tracing::error!("analysis failed: {e}"),
        }
    }

    let chart = dispatcher.emotion_chart().await?;
    println!(
        "Session tally: Hopeful {}, Heavy {}, Mixed {}",
        chart.values[0], chart.values[1], chart.values[2]
    );

    dispatcher.shutdown().await;
    Ok(())
}
