use crate::errors::{AjustesError, Result};
use crate::models::settlement::{SettlementRecord, DATA, TICKER};
use crate::util::latin1;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// `Data` and `Ticker` first, then the first record's columns in page order.
pub fn csv_columns(records: &[SettlementRecord]) -> Vec<String> {
    let mut columns = vec![DATA.to_string(), TICKER.to_string()];
    if let Some(first) = records.first() {
        columns.extend(
            first
                .columns()
                .filter(|c| *c != DATA && *c != TICKER)
                .map(str::to_string),
        );
    }
    columns
}

/// Write `;`-separated, ISO-8859-1 encoded CSV.
pub fn write_csv<W: Write>(records: &[SettlementRecord], mut writer: W) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let columns = csv_columns(records);
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    csv_writer.write_record(&columns)?;
    for (index, record) in records.iter().enumerate() {
        if let Some(extra) = record.columns().find(|c| !columns.iter().any(|col| col.as_str() == *c)) {
            return Err(AjustesError::Data(format!(
                "record {} has column '{}' missing from the CSV header",
                index, extra
            )));
        }
        csv_writer.write_record(columns.iter().map(|c| record.get(c).unwrap_or_default()))?;
    }

    let buffer = csv_writer
        .into_inner()
        .map_err(|e| AjustesError::Io(e.into_error()))?;
    let text = String::from_utf8(buffer).map_err(|e| AjustesError::Encoding(e.to_string()))?;
    writer.write_all(&latin1::encode(&text)?)?;
    writer.flush()?;
    Ok(())
}

pub fn save_csv(records: &[SettlementRecord], path: &Path) -> Result<()> {
    info!("Saving {} records to {}", records.len(), path.display());
    let file = File::create(path)?;
    write_csv(records, file)
}

/// Pretty-printed JSON array, UTF-8, accents kept literal.
pub fn to_json(records: &[SettlementRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
