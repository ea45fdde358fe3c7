//! Raw API payload → display record normalization.
//!
//! Raw records are loosely typed JSON objects whose key casing and value
//! shapes differ between endpoints. Normalization is total: every raw record
//! yields exactly one [`DisplayRecord`], and any value that cannot be read is
//! replaced by [`Cell::Missing`] without affecting the rest of the batch.

use crate::model::{Cell, DisplayRecord, Field, TableKind, ValueKind};
use crate::source::RawRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

/// Share of the account value shown as reinsured on the policy grid.
pub const REINSURED_SHARE: f64 = 0.25;

/// Naive timestamp layouts accepted after RFC 3339 and plain dates.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Normalize a batch of raw records of one table kind.
///
/// Output has the same length and order as `raw`.
pub fn normalize(kind: TableKind, raw: &[RawRecord]) -> Vec<DisplayRecord> {
    raw.iter()
        .enumerate()
        .map(|(index, record)| normalize_record(kind, index, record))
        .collect()
}

/// Normalize a single raw record.
///
/// `index` is only used for diagnostics.
pub fn normalize_record(kind: TableKind, index: usize, raw: &RawRecord) -> DisplayRecord {
    let Some(object) = raw.as_object() else {
        debug!(
            table = kind.key(),
            index,
            "Raw record is not an object, using placeholders"
        );
        return DisplayRecord::missing(kind);
    };

    DisplayRecord::build(kind, |field| match field {
        Field::ReinsuredAccountValue => lookup(object, Field::AccountValue)
            .and_then(parse_number)
            .map(|value| Cell::Currency(value * REINSURED_SHARE))
            .unwrap_or(Cell::Missing),
        _ => {
            let cell = normalize_value(field, lookup(object, field));
            if cell.is_missing() {
                debug!(table = kind.key(), index, field = field.name(), "Missing or unparseable value");
            }
            cell
        }
    })
}

/// Convert one raw value according to the field's [`ValueKind`].
///
/// `None` and JSON `null` become [`Cell::Missing`], as does any value the
/// field's parser rejects.
pub fn normalize_value(field: Field, value: Option<&Value>) -> Cell {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Cell::Missing;
    };

    let cell = match field.value_kind() {
        ValueKind::Text => text_value(value).map(Cell::Text),
        ValueKind::Integer => parse_integer(value).map(Cell::Integer),
        ValueKind::Currency => parse_number(value).map(Cell::Currency),
        ValueKind::Percent => parse_number(value).map(Cell::Percent),
        ValueKind::Date => parse_date(value).map(Cell::Date),
    };

    cell.unwrap_or(Cell::Missing)
}

// ===== Key lookup =====

/// Find the raw value for `field`.
///
/// Explicit source keys win; otherwise any key equal to the canonical name
/// once case, `_` and `-` are ignored.
fn lookup<'a>(object: &'a Map<String, Value>, field: Field) -> Option<&'a Value> {
    if let Some(value) = field.source_keys().iter().find_map(|key| object.get(*key)) {
        return Some(value);
    }

    let wanted = fold_key(field.name());
    object
        .iter()
        .find(|(key, _)| fold_key(key) == wanted)
        .map(|(_, value)| value)
}

fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

// ===== Value parsers =====

/// Text form of a raw value. Float numbers print in shortest form, so an
/// integral `100234.0` reads `100234`.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(float) if n.is_f64() => float.to_string(),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a finite number from a JSON number or a numeric string.
///
/// Strings may carry surrounding whitespace, `$`, `,` and `%`.
pub fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
                .collect();
            cleaned.parse::<f64>().ok()
        }
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn parse_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let number = parse_number(value)?;
    (number.fract() == 0.0 && number.abs() <= i64::MAX as f64).then_some(number as i64)
}

/// Parse a calendar date.
///
/// Accepts RFC 3339 timestamps (converted to UTC first), `YYYY-MM-DD`,
/// naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]` and integer epoch milliseconds.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_of(record: &DisplayRecord, field: Field) -> String {
        record.get(field).map(|c| c.to_string()).unwrap_or_default()
    }

    #[test]
    fn policy_landing_payload_normalizes_to_display_shape() {
        let raw = vec![json!({
            "POLICY_NUMBER": 100234,
            "PRODUCT_NAME": "Secure Term MVA Fixed Annuity II",
            "RF_FIRM_NAME": "Northwestern Mutual",
            "ENDING_AV": "123400",
            "RRCF_DATE_ADDED": "2024-01-15T13:45:00.000Z"
        })];

        let records = normalize(TableKind::Policies, &raw);

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(field_of(r, Field::PolicyNumber), "100234");
        assert_eq!(field_of(r, Field::ProductName), "Secure Term MVA Fixed Annuity II");
        assert_eq!(field_of(r, Field::FirmName), "Northwestern Mutual");
        assert_eq!(field_of(r, Field::ApplicationSignDate), "2024-01-15");
        assert_eq!(field_of(r, Field::AccountValue), "$123,400.00");
        assert_eq!(field_of(r, Field::ReinsuredAccountValue), "$30,850.00");
    }

    #[test]
    fn null_date_becomes_sentinel() {
        let raw = vec![json!({ "POLICY_NUMBER": 1, "RRCF_DATE_ADDED": null })];
        let records = normalize(TableKind::Policies, &raw);
        assert_eq!(field_of(&records[0], Field::ApplicationSignDate), "N/A");
    }

    #[test]
    fn garbage_date_becomes_sentinel_not_invalid_date() {
        let raw = vec![json!({ "RRCF_DATE_ADDED": "not a date" })];
        let records = normalize(TableKind::Policies, &raw);
        let value = field_of(&records[0], Field::ApplicationSignDate);
        assert_eq!(value, "N/A");
        assert!(!value.contains("Invalid"));
    }

    #[test]
    fn unparseable_account_value_yields_sentinel_for_both_amounts() {
        let raw = vec![json!({ "ENDING_AV": "abc" })];
        let records = normalize(TableKind::Policies, &raw);
        assert_eq!(field_of(&records[0], Field::AccountValue), "N/A");
        assert_eq!(field_of(&records[0], Field::ReinsuredAccountValue), "N/A");
    }

    #[test]
    fn malformed_record_does_not_abort_batch() {
        let raw = vec![
            json!({ "POLICY_NUMBER": "A1", "ENDING_AV": "100" }),
            json!("just a string"),
            json!({ "POLICY_NUMBER": "A3", "ENDING_AV": { "nested": true } }),
        ];

        let records = normalize(TableKind::Policies, &raw);

        assert_eq!(records.len(), 3);
        assert_eq!(field_of(&records[0], Field::AccountValue), "$100.00");
        assert!(records[1].cells().all(Cell::is_missing));
        assert_eq!(field_of(&records[2], Field::PolicyNumber), "A3");
        assert_eq!(field_of(&records[2], Field::AccountValue), "N/A");
    }

    #[test]
    fn reinsured_share_rounds_half_cent_away_from_zero() {
        let raw = vec![
            json!({ "ENDING_AV": "100.50" }),
            json!({ "ENDING_AV": "2.5" }),
            json!({ "ENDING_AV": "0.125" }),
        ];

        let records = normalize(TableKind::Policies, &raw);

        assert_eq!(field_of(&records[0], Field::ReinsuredAccountValue), "$25.13");
        assert_eq!(field_of(&records[1], Field::ReinsuredAccountValue), "$0.63");
        assert_eq!(field_of(&records[2], Field::AccountValue), "$0.13");
    }

    #[test]
    fn integral_float_in_text_field_drops_fraction() {
        let raw = vec![
            json!({ "POLICY_NUMBER": 100234.0 }),
            json!({ "POLICY_NUMBER": 12.5 }),
            json!({ "POLICY_NUMBER": -7 }),
        ];

        let records = normalize(TableKind::Policies, &raw);

        assert_eq!(field_of(&records[0], Field::PolicyNumber), "100234");
        assert_eq!(field_of(&records[1], Field::PolicyNumber), "12.5");
        assert_eq!(field_of(&records[2], Field::PolicyNumber), "-7");
    }

    #[test]
    fn keys_match_regardless_of_casing() {
        let raw = vec![
            json!({ "POLICY_NUMBER": "P1", "PRODUCT_CODE": "LI001", "TENOR": 20, "FIRM_NAME": "Allstate" }),
            json!({ "policyNumber": "P2", "productCode": "AN001", "tenor": "15", "firmName": "MetLife" }),
        ];

        let records = normalize(TableKind::ReinsurerTransactions, &raw);

        assert_eq!(field_of(&records[0], Field::PolicyNumber), "P1");
        assert_eq!(field_of(&records[0], Field::Tenor), "20");
        assert_eq!(field_of(&records[0], Field::FirmName), "Allstate");
        assert_eq!(field_of(&records[1], Field::ProductCode), "AN001");
        assert_eq!(field_of(&records[1], Field::Tenor), "15");
        assert_eq!(field_of(&records[1], Field::FirmName), "MetLife");
    }

    #[test]
    fn missing_string_field_becomes_sentinel() {
        let raw = vec![json!({ "POLICY_NUMBER": "P1" })];
        let records = normalize(TableKind::ReinsurerTransactions, &raw);
        assert_eq!(field_of(&records[0], Field::ProductName), "N/A");
    }

    #[test]
    fn percentages_get_two_decimals_and_suffix() {
        let raw = vec![json!({
            "REINSURER_NAME": "Global Reinsurance Partners",
            "TREATY_ID": "TR001",
            "QUOTA_SHARE": 35,
            "CEDING_ALLOWANCE": "2.5",
            "EXPENSE_ALLOWANCE": "1.25%",
            "EFFECTIVE_DATE": "2024-01-01",
            "EXPIRY_DATE": "2024-12-31T00:00:00"
        })];

        let records = normalize(TableKind::Reinsurers, &raw);
        let r = &records[0];

        assert_eq!(field_of(r, Field::QuotaShare), "35.00%");
        assert_eq!(field_of(r, Field::CedingAllowance), "2.50%");
        assert_eq!(field_of(r, Field::ExpenseAllowance), "1.25%");
        assert_eq!(field_of(r, Field::EffectiveDate), "2024-01-01");
        assert_eq!(field_of(r, Field::ExpiryDate), "2024-12-31");
        assert_eq!(field_of(r, Field::ReinsurerId), "N/A");
    }

    #[test]
    fn currency_strings_with_symbols_are_reformatted() {
        let raw = vec![json!({
            "policyNumber": "POL003",
            "transactionID": "TXN003",
            "premium": "-$8,000.00",
            "netPremium": "$3,187.50"
        })];

        let records = normalize(TableKind::PolicyTransactions, &raw);

        assert_eq!(field_of(&records[0], Field::TransactionId), "TXN003");
        assert_eq!(field_of(&records[0], Field::Premium), "$-8,000.00");
        assert_eq!(field_of(&records[0], Field::NetPremium), "$3,187.50");
    }

    #[test]
    fn rfc3339_offsets_are_converted_to_utc_day() {
        let value = json!("2024-03-01T23:30:00-05:00");
        assert_eq!(
            parse_date(&value),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
    }

    #[test]
    fn naive_datetime_with_space_separator_parses() {
        let value = json!("2024-06-30 08:15:00");
        assert_eq!(parse_date(&value), NaiveDate::from_ymd_opt(2024, 6, 30));
    }

    #[test]
    fn epoch_millis_parse_as_date() {
        let value = json!(1_704_067_200_000_i64);
        assert_eq!(parse_date(&value), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn parse_number_rejects_non_finite_and_non_numeric() {
        assert_eq!(parse_number(&json!("NaN")), None);
        assert_eq!(parse_number(&json!("inf")), None);
        assert_eq!(parse_number(&json!("")), None);
        assert_eq!(parse_number(&json!(true)), None);
        assert_eq!(parse_number(&json!(" 1,250.75 ")), Some(1250.75));
    }

    #[test]
    fn tenor_rejects_fractional_years() {
        assert_eq!(normalize_value(Field::Tenor, Some(&json!(2.5))), Cell::Missing);
        assert_eq!(normalize_value(Field::Tenor, Some(&json!(30.0))), Cell::Integer(30));
    }

    #[test]
    fn text_field_keeps_empty_string_verbatim() {
        assert_eq!(
            normalize_value(Field::InsuredName, Some(&json!(""))),
            Cell::Text(String::new())
        );
    }

    #[test]
    fn explicit_source_key_wins_over_folded_match() {
        let raw = json!({ "FIRM_NAME": "Fallback", "RF_FIRM_NAME": "Preferred" });
        let records = normalize(TableKind::Policies, std::slice::from_ref(&raw));
        assert_eq!(field_of(&records[0], Field::FirmName), "Preferred");
    }
}
