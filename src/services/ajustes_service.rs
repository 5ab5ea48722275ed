use crate::config::Config;
use crate::errors::Result;
use crate::models::settlement::SettlementRecord;
use crate::parsing::{extract_table, normalize};
use crate::scrapers::base::AjustesScraper;
use crate::util;
use chrono::NaiveDate;
use log::{error, info, warn};
use std::sync::Arc;

/// Runs the fetch, extract and normalize pipeline over one or more trading dates
pub struct AjustesService {
    config: Config,
    scraper: Arc<dyn AjustesScraper + Send + Sync>,
}

impl AjustesService {
    pub fn new(config: Config, scraper: Arc<dyn AjustesScraper + Send + Sync>) -> Self {
        Self { config, scraper }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scrape a single date.
    ///
    /// `Ok(None)` when the page has no settlement table for that date;
    /// transport failures come back as `Err`.
    pub async fn scrape_date(&self, date_str: &str) -> Result<Option<Vec<SettlementRecord>>> {
        let raw = self.scraper.fetch_page(date_str).await?;

        let table = match extract_table(&raw, &self.config.table_id)? {
            Some(table) => table,
            None => {
                info!("Table '{}' not found for date {}", self.config.table_id, date_str);
                return Ok(None);
            }
        };

        let records = normalize(&table.rows);
        info!(
            "Scraped {} records from {} for {}",
            records.len(),
            self.scraper.source_name(),
            date_str
        );
        Ok(Some(records))
    }

    /// Walk business days from `start` until `config.days` of them returned data.
    ///
    /// Each record gets a `Data` column with the date it was scraped for.
    /// A failing date is logged and skipped.
    pub async fn collect(&self, start: &NaiveDate) -> Result<Vec<SettlementRecord>> {
        let mut all_records = Vec::new();
        let mut current = *start;
        let mut days_processed = 0usize;
        let mut empty_streak = 0usize;

        while days_processed < self.config.days {
            if util::is_business_day(&current) {
                let date_str = util::format_date(&current);
                info!("Processing date: {}", date_str);

                match self.scrape_date(&date_str).await {
                    Ok(Some(mut records)) if !records.is_empty() => {
                        for record in records.iter_mut() {
                            record.set_date(&date_str);
                        }
                        all_records.extend(records);
                        days_processed += 1;
                        empty_streak = 0;
                    }
                    Ok(_) => empty_streak += 1,
                    Err(e) => {
                        error!("{}", e);
                        empty_streak += 1;
                    }
                }

                if self.config.max_empty_days > 0 && empty_streak >= self.config.max_empty_days {
                    warn!(
                        "Giving up after {} consecutive business days without data",
                        empty_streak
                    );
                    break;
                }

                if days_processed < self.config.days && !self.config.request_delay.is_zero() {
                    tokio::time::sleep(self.config.request_delay).await;
                }
            }

            current = if self.config.backward {
                util::previous_business_day(&current)
            } else {
                util::next_business_day(&current)
            };
        }

        info!(
            "Collected {} records over {} dates",
            all_records.len(),
            days_processed
        );
        Ok(all_records)
    }
}
