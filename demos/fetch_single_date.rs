use anyhow::{bail, Context};
use b3_ajustes::{export, util, AjustesService, BmfScraper, Config};
use std::path::PathBuf;
use std::sync::Arc;

// cargo run --example fetch_single_date -- 31/10/2025 --csv out/ajustes.csv --json
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(date) = args.first() else {
        bail!("Usage: fetch_single_date <date (DD/MM/YYYY)> [--csv OUT] [--json]");
    };
    let out_csv = args
        .iter()
        .position(|a| a == "--csv")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);
    let print_json = args.iter().any(|a| a == "--json");

    util::parse_date(date).context("date must be in DD/MM/YYYY format")?;

    let config = Config::new();
    let service = AjustesService::new(config.clone(), Arc::new(BmfScraper::new(&config)?));

    let mut records = match service.scrape_date(date).await? {
        Some(records) if !records.is_empty() => records,
        _ => bail!("No data returned for {}", date),
    };
    for record in records.iter_mut() {
        record.set_date(date);
    }

    if print_json {
        println!("{}", export::to_json(&records)?);
    }

    if let Some(path) = out_csv {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        export::save_csv(&records, &path)?;
        println!("Saved CSV to {}", path.display());
    }

    Ok(())
}
