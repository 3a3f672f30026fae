pub mod schema;
pub mod member_repo;
pub mod order_repo;

use chrono::NaiveDateTime;

use crate::error::{ShopError, ShopResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub(crate) fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn parse_timestamp(s: &str) -> ShopResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| ShopError::Other(format!("Invalid timestamp '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_keeps_subsecond_precision() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 15, 123_456)
            .unwrap();
        assert_eq!(parse_timestamp(&format_timestamp(at)).unwrap(), at);
    }

    #[test]
    fn sqlite_datetime_text_parses() {
        assert!(parse_timestamp("2024-03-01 09:30:15").is_ok());
    }

    #[test]
    fn garbage_timestamp_is_an_error() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
