use crate::models::settlement::{Row, SettlementRecord, MERCADORIA, TICKER, VENCIMENTO};

/// Fill blank `Mercadoria` cells from the row above and derive `Ticker`.
///
/// The page only prints the commodity on the first maturity of each group,
/// so the carried value has to walk the rows in document order.
pub fn normalize(rows: &[Row]) -> Vec<SettlementRecord> {
    rows.iter()
        .scan(String::new(), |last_commodity, row| {
            Some(normalize_row(row, last_commodity))
        })
        .collect()
}

fn normalize_row(row: &Row, last_commodity: &mut String) -> SettlementRecord {
    let mut fields = row.clone();

    let commodity = fields.get(MERCADORIA).cloned().unwrap_or_default();
    if commodity.is_empty() {
        fields.insert(MERCADORIA.to_string(), last_commodity.clone());
    } else {
        *last_commodity = commodity;
    }

    let commodity = fields.get(MERCADORIA).map(String::as_str).unwrap_or_default();
    let maturity = fields.get(VENCIMENTO).map(String::as_str).unwrap_or_default();
    let ticker = derive_ticker(commodity, maturity);
    fields.insert(TICKER.to_string(), ticker);

    SettlementRecord::from(fields)
}

/// `"DOL - DOLAR FUTURO"` + `"DEZ25"` -> `"DOLDEZ25"`.
///
/// Only the first `-` splits the commodity.
pub fn derive_ticker(commodity: &str, maturity: &str) -> String {
    let prefix = commodity
        .split_once('-')
        .map_or(commodity, |(head, _)| head)
        .trim();
    prefix
        .chars()
        .chain(maturity.chars())
        .filter(|c| !c.is_whitespace())
        .collect()
}
