// Debug tool: fetch mixnodes from the explorer API and print them without the TUI

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use mixnode_explorer::core::AppConfig;
use mixnode_explorer::store::{ExplorerApiClient, MixnodeId, MixnodeRecord, MixnodeSource};
use mixnode_explorer::ui::{mixnode_cells, COLUMNS};

#[derive(Parser, Debug)]
#[command(name = "mixnode-dump", about = "Print mixnodes from the explorer API")]
struct Args {
    /// Identity key of a single mixnode; lists every mixnode when omitted
    id: Option<String>,

    /// Explorer API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let defaults = AppConfig::default();

    let base_url = args.api_url.unwrap_or_else(|| defaults.api.base_url.clone());
    let timeout = args
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| defaults.request_timeout());
    let client = ExplorerApiClient::new(&base_url, timeout)?;

    let records = match args.id {
        Some(id) => {
            let id = MixnodeId::new(id);
            match client.fetch_mixnode(&id).await? {
                Some(record) => vec![record],
                None => bail!("mixnode {} not found at {}", id, client.base_url()),
            }
        }
        None => client.fetch_mixnodes().await?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_table(&records);
    }

    Ok(())
}

fn print_table(records: &[MixnodeRecord]) {
    let rows: Vec<[String; 6]> = records.iter().map(mixnode_cells).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(COLUMNS.to_vec()));
    for row in &rows {
        println!("{}", line(row.iter().map(String::as_str).collect()));
    }
    println!();
    println!("{} mixnode(s)", rows.len());
}
