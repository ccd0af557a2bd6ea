//! Parsing helpers for text fields arriving through multipart forms, where
//! every value is a string and "absent" is frequently sent as `""`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Trimmed value, or `None` when blank.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn optional_date(field: &str, raw: &str) -> Result<Option<NaiveDate>> {
    let Some(value) = optional_text(raw) else {
        return Ok(None);
    };
    // browsers send either a bare date or a full ISO timestamp
    let date_part = value.split('T').next().unwrap_or(&value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| Error::BadRequest(format!("{} must be a date in YYYY-MM-DD format", field)))
}

pub fn optional_decimal(field: &str, raw: &str) -> Result<Option<Decimal>> {
    let Some(value) = optional_text(raw) else {
        return Ok(None);
    };
    let normalized: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    Decimal::from_str(&normalized)
        .map(Some)
        .map_err(|_| Error::BadRequest(format!("{} must be a number", field)))
}

pub fn optional_id(field: &str, raw: &str) -> Result<Option<i32>> {
    let Some(value) = optional_text(raw) else {
        return Ok(None);
    };
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| Error::BadRequest(format!("{} must be an integer id", field)))
}

/// Accepts a JSON array (`["Rust","SQL"]`) or a comma separated list.
pub fn skill_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return clean(items);
        }
    }
    clean(trimmed.split(',').map(str::to_string).collect())
}

fn clean(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|s| s.eq_ignore_ascii_case(item)) {
            out.push(item.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text("undefined"), None);
        assert_eq!(optional_text(" Almaty "), Some("Almaty".to_string()));
    }

    #[test]
    fn dates_accept_plain_and_iso_forms() {
        let expected = NaiveDate::from_ymd_opt(1995, 4, 12);
        assert_eq!(optional_date("birth_date", "1995-04-12").unwrap(), expected);
        assert_eq!(
            optional_date("birth_date", "1995-04-12T00:00:00.000Z").unwrap(),
            expected
        );
        assert_eq!(optional_date("birth_date", "").unwrap(), None);
        assert!(optional_date("birth_date", "12/04/1995").is_err());
    }

    #[test]
    fn salary_stays_exact() {
        let salary = optional_decimal("salary", "100 000.50").unwrap().unwrap();
        assert_eq!(salary.to_string(), "100000.50");
        assert!(optional_decimal("salary", "lots").is_err());
    }

    #[test]
    fn skills_from_json_or_csv() {
        assert_eq!(skill_list(r#"["Rust", "SQL", "rust"]"#), vec!["Rust", "SQL"]);
        assert_eq!(skill_list("Figma, Typography,,"), vec!["Figma", "Typography"]);
        assert!(skill_list("").is_empty());
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(optional_id("profession_id", "3").unwrap(), Some(3));
        assert_eq!(optional_id("profession_id", "").unwrap(), None);
        assert!(optional_id("profession_id", "abc").is_err());
    }
}
