//! 时间工具函数
//!
//! 日期字符串的解析统一在 API handler 层完成，
//! repository 层只接收已规范化的 `YYYY-MM-DD` 键。

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// 当前 Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert!(parse_date("2026-08-03").is_ok());
        assert!(parse_date("03/08/2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
