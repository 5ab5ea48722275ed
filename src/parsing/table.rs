use crate::errors::{AjustesError, Result};
use crate::models::settlement::Row;
use crate::util::latin1;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Header names and header-aligned data rows of the settlement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AjustesError::Config(format!("invalid selector {}: {:?}", css, e)))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Decode an ISO-8859-1 page and pull out the table with id `table_id`.
///
/// `Ok(None)` means the page has no such table, which is how the exchange
/// answers for dates without a session.
pub fn extract_table(raw: &[u8], table_id: &str) -> Result<Option<ExtractedTable>> {
    let html = latin1::decode(raw);
    extract_table_from_html(&html, table_id)
}

pub fn extract_table_from_html(html: &str, table_id: &str) -> Result<Option<ExtractedTable>> {
    let table_sel = selector("table")?;
    let tr_sel = selector("tr")?;
    let th_sel = selector("th")?;
    let td_sel = selector("td")?;

    let document = Html::parse_document(html);
    let table = match document
        .select(&table_sel)
        .find(|t| t.value().id() == Some(table_id))
    {
        Some(table) => table,
        None => return Ok(None),
    };

    let mut tr_iter = table.select(&tr_sel);
    let headers: Vec<String> = match tr_iter.next() {
        Some(header_row) => header_row.select(&th_sel).map(cell_text).collect(),
        None => Vec::new(),
    };

    if headers.is_empty() {
        debug!("Table {} has no header cells", table_id);
        return Ok(Some(ExtractedTable { headers, rows: Vec::new() }));
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for tr in tr_iter {
        let cells: Vec<ElementRef<'_>> = tr.select(&td_sel).collect();
        if cells.len() != headers.len() {
            skipped += 1;
            continue;
        }
        let row: Row = headers
            .iter()
            .cloned()
            .zip(cells.into_iter().map(cell_text))
            .collect();
        rows.push(row);
    }

    debug!(
        "Extracted {} rows with {} columns from {} ({} rows skipped)",
        rows.len(),
        headers.len(),
        table_id,
        skipped
    );
    Ok(Some(ExtractedTable { headers, rows }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_ID: &str = "tblDadosAjustes";

    fn page(body: &str) -> String {
        format!("<html><head><title>Ajustes</title></head><body>{}</body></html>", body)
    }

    #[test]
    fn missing_table_is_none() {
        let html = page(r#"<p>Não há dados para a data consultada.</p><table id="outra"><tr><th>X</th></tr></table>"#);
        assert_eq!(extract_table_from_html(&html, TABLE_ID).unwrap(), None);
    }

    #[test]
    fn headers_come_from_first_row_trimmed() {
        let html = page(
            r#"<table id="tblDadosAjustes">
                <thead><tr><th> Mercadoria </th><th>Vencimento</th><th>Preço de ajuste atual</th></tr></thead>
                <tbody><tr><td>DOL - Dólar comercial</td><td>Z25</td><td>5.400,000</td></tr></tbody>
            </table>"#,
        );
        let table = extract_table_from_html(&html, TABLE_ID).unwrap().unwrap();
        assert_eq!(table.headers, vec!["Mercadoria", "Vencimento", "Preço de ajuste atual"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0]["Preço de ajuste atual"], "5.400,000");
    }

    #[test]
    fn rows_with_wrong_cell_count_are_dropped() {
        let html = page(
            r#"<table id="tblDadosAjustes">
                <tr><th>Mercadoria</th><th>Vencimento</th></tr>
                <tr><td colspan="2">Agropecuárias</td></tr>
                <tr><td>BGI - Boi gordo</td><td>X25</td></tr>
                <tr><td>a</td><td>b</td><td>c</td></tr>
                <tr><td></td><td>F26</td></tr>
            </table>"#,
        );
        let table = extract_table_from_html(&html, TABLE_ID).unwrap().unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["Mercadoria"], "BGI - Boi gordo");
        assert_eq!(table.rows[1]["Mercadoria"], "");
        assert_eq!(table.rows[1]["Vencimento"], "F26");
    }

    #[test]
    fn cell_text_joins_nested_markup() {
        let html = page(
            r#"<table id="tblDadosAjustes">
                <tr><th>Mercadoria</th><th>Vencimento</th></tr>
                <tr><td><b>IND</b> - <span>Ibovespa</span></td><td>
                    Z25
                </td></tr>
            </table>"#,
        );
        let table = extract_table_from_html(&html, TABLE_ID).unwrap().unwrap();
        assert_eq!(table.rows[0]["Mercadoria"], "IND - Ibovespa");
        assert_eq!(table.rows[0]["Vencimento"], "Z25");
    }

    #[test]
    fn table_without_header_cells_yields_no_rows() {
        let html = page(r#"<table id="tblDadosAjustes"><tr><td>x</td></tr><tr><td>y</td></tr></table>"#);
        let table = extract_table_from_html(&html, TABLE_ID).unwrap().unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn decodes_latin1_bytes() {
        let mut raw = br#"<html><body><table id="tblDadosAjustes"><tr><th>Mercadoria</th><th>Vencimento</th></tr><tr><td>ICF - CAF"#.to_vec();
        raw.push(0xC9);
        raw.extend_from_slice(b" ar\xE1bica</td><td>H26</td></tr></table></body></html>");

        let table = extract_table(&raw, TABLE_ID).unwrap().unwrap();
        assert_eq!(table.rows[0]["Mercadoria"], "ICF - CAFÉ arábica");
    }

    #[test]
    fn preserves_document_order() {
        let html = page(
            r#"<table id="tblDadosAjustes">
                <tr><th>Mercadoria</th><th>Vencimento</th></tr>
                <tr><td>A</td><td>1</td></tr>
                <tr><td>B</td><td>2</td></tr>
                <tr><td>C</td><td>3</td></tr>
            </table>"#,
        );
        let table = extract_table_from_html(&html, TABLE_ID).unwrap().unwrap();
        let order: Vec<&str> = table.rows.iter().map(|r| r["Vencimento"].as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
    }
}
