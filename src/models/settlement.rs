use indexmap::IndexMap;
use serde::Serialize;

pub const MERCADORIA: &str = "Mercadoria";
pub const VENCIMENTO: &str = "Vencimento";
pub const TICKER: &str = "Ticker";
pub const DATA: &str = "Data";

/// One table row keyed by the headers the page declared, in document order.
pub type Row = IndexMap<String, String>;

/// Settlement data for one contract maturity on one trading date.
///
/// Column set is whatever the table declared for that date plus `Ticker`,
/// and `Data` once the caller stamps the requested date on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SettlementRecord {
    fields: IndexMap<String, String>,
}

impl SettlementRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn mercadoria(&self) -> &str {
        self.get(MERCADORIA).unwrap_or_default()
    }

    pub fn vencimento(&self) -> &str {
        self.get(VENCIMENTO).unwrap_or_default()
    }

    pub fn ticker(&self) -> &str {
        self.get(TICKER).unwrap_or_default()
    }

    pub fn date(&self) -> Option<&str> {
        self.get(DATA)
    }

    pub fn set_date(&mut self, date_str: &str) {
        self.fields.insert(DATA.to_string(), date_str.to_string());
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.fields
    }
}

impl From<Row> for SettlementRecord {
    fn from(fields: Row) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SettlementRecord {
        let mut row = Row::new();
        row.insert(MERCADORIA.to_string(), "DOL - Dólar comercial".to_string());
        row.insert(VENCIMENTO.to_string(), "Z25".to_string());
        row.insert(TICKER.to_string(), "DOLZ25".to_string());
        SettlementRecord::from(row)
    }

    #[test]
    fn accessors_read_well_known_columns() {
        let record = sample();
        assert_eq!(record.mercadoria(), "DOL - Dólar comercial");
        assert_eq!(record.vencimento(), "Z25");
        assert_eq!(record.ticker(), "DOLZ25");
        assert_eq!(record.date(), None);
    }

    #[test]
    fn set_date_appends_column() {
        let mut record = sample();
        record.set_date("03/11/2025");
        assert_eq!(record.date(), Some("03/11/2025"));
        assert_eq!(
            record.columns().collect::<Vec<_>>(),
            vec![MERCADORIA, VENCIMENTO, TICKER, DATA]
        );
    }

    #[test]
    fn serializes_as_ordered_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Mercadoria":"DOL - Dólar comercial","Vencimento":"Z25","Ticker":"DOLZ25"}"#
        );
    }
}
