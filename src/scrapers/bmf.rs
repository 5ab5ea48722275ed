use crate::config::Config;
use crate::errors::{AjustesError, Result};
use crate::scrapers::base::AjustesScraper;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

/// BM&F "ajustes do pregão" page scraper
pub struct BmfScraper {
    client: Client,
    endpoint: String,
    date_field: String,
}

impl BmfScraper {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(build_headers(config)?)
            .build()
            .map_err(|e| AjustesError::Network {
                url: config.endpoint.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            date_field: config.date_field.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn network_error(&self, source: reqwest::Error) -> AjustesError {
        AjustesError::Network {
            url: self.endpoint.clone(),
            source,
        }
    }
}

fn build_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in config.request_headers() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AjustesError::Config(format!("invalid header name {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AjustesError::Config(format!("invalid value for header {}: {}", name, e)))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait]
impl AjustesScraper for BmfScraper {
    fn source_name(&self) -> &'static str {
        "BMF"
    }

    async fn fetch_page(&self, date_str: &str) -> Result<Vec<u8>> {
        info!("Requesting settlement prices for {}", date_str);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[(self.date_field.as_str(), date_str)])
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(AjustesError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.network_error(e))?;
        debug!("Received {} bytes for {}", bytes.len(), date_str);
        Ok(bytes.to_vec())
    }
}
