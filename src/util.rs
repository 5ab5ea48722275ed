use chrono::{Datelike, Duration, NaiveDate, Weekday};
use crate::errors::Result;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

// Dates travel as DD/MM/YYYY, the format the exchange form expects.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)?)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Monday through Friday. Exchange holidays are not modelled.
pub fn is_business_day(date: &NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn next_business_day(date: &NaiveDate) -> NaiveDate {
    step_business_day(date, Duration::days(1))
}

pub fn previous_business_day(date: &NaiveDate) -> NaiveDate {
    step_business_day(date, Duration::days(-1))
}

fn step_business_day(date: &NaiveDate, step: Duration) -> NaiveDate {
    let mut day = *date + step;
    while !is_business_day(&day) {
        day = day + step;
    }
    day
}

// The exchange serves and expects ISO-8859-1.
pub mod latin1 {
    use crate::errors::{AjustesError, Result};

    /// Every byte is the code point of the same value.
    pub fn decode(bytes: &[u8]) -> String {
        bytes.iter().map(|&b| char::from(b)).collect()
    }

    pub fn encode(text: &str) -> Result<Vec<u8>> {
        text.chars()
            .map(|c| {
                u8::try_from(u32::from(c)).map_err(|_| {
                    AjustesError::Encoding(format!(
                        "character {:?} (U+{:04X}) cannot be represented in ISO-8859-1",
                        c,
                        u32::from(c)
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_and_formats_brazilian_dates() {
        let parsed = parse_date("03/11/2025").unwrap();
        assert_eq!(parsed, date(2025, 11, 3));
        assert_eq!(format_date(&parsed), "03/11/2025");
    }

    #[rstest]
    #[case("2025-11-03")]
    #[case("31/02/2025")]
    #[case("")]
    #[case("03/11")]
    fn rejects_malformed_dates(#[case] input: &str) {
        assert!(parse_date(input).is_err());
    }

    #[rstest]
    #[case(date(2025, 10, 31), true)] // Friday
    #[case(date(2025, 11, 1), false)]
    #[case(date(2025, 11, 2), false)]
    #[case(date(2025, 11, 3), true)]
    fn business_days_are_weekdays(#[case] day: NaiveDate, #[case] expected: bool) {
        assert_eq!(is_business_day(&day), expected);
    }

    #[test]
    fn next_business_day_skips_weekend() {
        assert_eq!(next_business_day(&date(2025, 10, 31)), date(2025, 11, 3));
        assert_eq!(next_business_day(&date(2025, 11, 1)), date(2025, 11, 3));
        assert_eq!(next_business_day(&date(2025, 11, 3)), date(2025, 11, 4));
    }

    #[test]
    fn previous_business_day_skips_weekend() {
        assert_eq!(previous_business_day(&date(2025, 11, 3)), date(2025, 10, 31));
        assert_eq!(previous_business_day(&date(2025, 11, 2)), date(2025, 10, 31));
        assert_eq!(previous_business_day(&date(2025, 11, 4)), date(2025, 11, 3));
    }

    #[test]
    fn latin1_decodes_accented_bytes() {
        assert_eq!(latin1::decode(b"CAF\xC9"), "CAFÉ");
        assert_eq!(latin1::decode(b"A\xE7\xFAcar"), "Açúcar");
    }

    #[test]
    fn latin1_encode_roundtrips_western_text() {
        assert_eq!(latin1::encode("Dólar").unwrap(), b"D\xF3lar".to_vec());
    }

    #[test]
    fn latin1_encode_rejects_wide_characters() {
        let err = latin1::encode("R€").unwrap_err();
        assert!(err.to_string().contains("U+20AC"));
    }
}
