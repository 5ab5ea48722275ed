use b3_ajustes::config::Config;
use b3_ajustes::export;
use b3_ajustes::scrapers::bmf::BmfScraper;
use b3_ajustes::services::ajustes_service::AjustesService;
use b3_ajustes::util;

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("b3_ajustes")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scrape BMF Bovespa settlement prices for a given date")
        .arg(
            Arg::with_name("date")
                .help("Starting date in DD/MM/YYYY format")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Output CSV file path")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Number of business days to process")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("delay")
                .long("delay")
                .value_name("SECONDS")
                .help("Delay between requests in seconds")
                .takes_value(true)
                .default_value("1.0"),
        )
        .arg(
            Arg::with_name("backward")
                .short('b')
                .long("backward")
                .help("Process dates backward from the start date (default: forward)")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("json")
                .short('j')
                .long("json")
                .help("Output JSON to stdout")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("HTTP request timeout in seconds")
                .takes_value(true)
                .default_value("30"),
        )
        .arg(
            Arg::with_name("endpoint")
                .long("endpoint")
                .value_name("URL")
                .help("Override the settlement page URL")
                .takes_value(true),
        )
        .get_matches();

    match run(&matches).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn parse_seconds(matches: &ArgMatches, name: &str) -> Result<Duration, Box<dyn Error>> {
    let raw = matches.value_of(name).unwrap_or("0");
    let seconds = raw
        .parse::<f64>()
        .map_err(|_| format!("--{} must be a number of seconds, got '{}'", name, raw))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("--{} must be a non-negative number, got '{}'", name, raw).into());
    }
    Ok(Duration::from_secs_f64(seconds))
}

async fn run(matches: &ArgMatches) -> Result<ExitCode, Box<dyn Error>> {
    let date_arg = matches.value_of("date").unwrap_or_default();
    let start_date = util::parse_date(date_arg)
        .map_err(|_| "Date must be in DD/MM/YYYY format")?;

    let days_arg = matches.value_of("days").unwrap_or("1");
    let days = days_arg
        .parse::<usize>()
        .map_err(|_| format!("--days must be a positive integer, got '{}'", days_arg))?;

    let mut config = Config::new()
        .with_days(days)
        .with_backward(matches.is_present("backward"))
        .with_request_delay(parse_seconds(matches, "delay")?)
        .with_request_timeout(parse_seconds(matches, "timeout")?);
    if let Some(endpoint) = matches.value_of("endpoint") {
        config = config.with_endpoint(endpoint);
    }

    let scraper = Arc::new(BmfScraper::new(&config)?);
    let service = AjustesService::new(config, scraper);

    let records = service.collect(&start_date).await?;
    if records.is_empty() {
        error!("No data was found for any of the requested dates.");
        return Ok(ExitCode::FAILURE);
    }

    if matches.is_present("json") {
        println!("{}", export::to_json(&records)?);
    }

    if let Some(file) = matches.value_of("file") {
        if let Err(e) = export::save_csv(&records, Path::new(file)) {
            error!("Error saving to CSV file: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        info!("Data saved to CSV file: {}", file);
    }

    Ok(ExitCode::SUCCESS)
}
