pub mod models;
pub mod errors;
pub mod parsing;
pub mod scrapers;
pub mod services;
pub mod export;
pub mod config;
pub mod util;

pub use models::settlement::{SettlementRecord, Row};
pub use errors::{Result, AjustesError};
pub use config::Config;
pub use scrapers::base::AjustesScraper;
pub use scrapers::bmf::BmfScraper;
pub use services::ajustes_service::AjustesService;
