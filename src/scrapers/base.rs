use crate::errors::Result;
use async_trait::async_trait;

/// Source of the raw settlement page for one trading date
#[async_trait]
pub trait AjustesScraper {
    /// Short name used in log lines
    fn source_name(&self) -> &'static str;

    /// Fetch the undecoded page body for `date_str` (DD/MM/YYYY, passed through as is)
    async fn fetch_page(&self, date_str: &str) -> Result<Vec<u8>>;
}
