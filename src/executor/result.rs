use chrono::DateTime;
use duckdb::types::{TimeUnit, ValueRef};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: String,
}

/// Tabular output of one executed statement: named columns and rows, in the
/// order the engine produced them. Ephemeral, rebuilt on every execution.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// One cell, folded down from the engine's value space. Integer-family
/// values that fit in i64 become `Int`, decimals become `Float`, temporal
/// values are formatted to text, anything exotic falls back to text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            CellValue::Null => "NULL".to_string(),
            CellValue::Bool(v) => v.to_string(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Text(v) => v.clone(),
        }
    }
}

impl From<ValueRef<'_>> for CellValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => CellValue::Null,
            ValueRef::Boolean(v) => CellValue::Bool(v),
            ValueRef::TinyInt(v) => CellValue::Int(v.into()),
            ValueRef::SmallInt(v) => CellValue::Int(v.into()),
            ValueRef::Int(v) => CellValue::Int(v.into()),
            ValueRef::BigInt(v) => CellValue::Int(v),
            ValueRef::HugeInt(v) => match i64::try_from(v) {
                Ok(v) => CellValue::Int(v),
                Err(_) => CellValue::Text(v.to_string()),
            },
            ValueRef::UTinyInt(v) => CellValue::Int(v.into()),
            ValueRef::USmallInt(v) => CellValue::Int(v.into()),
            ValueRef::UInt(v) => CellValue::Int(v.into()),
            ValueRef::UBigInt(v) => match i64::try_from(v) {
                Ok(v) => CellValue::Int(v),
                Err(_) => CellValue::Text(v.to_string()),
            },
            ValueRef::Float(v) => CellValue::Float(v.into()),
            ValueRef::Double(v) => CellValue::Float(v),
            ValueRef::Decimal(v) => match rust_decimal::Decimal::try_from(v).ok().and_then(|d| d.to_f64()) {
                Some(f) => CellValue::Float(f),
                None => CellValue::Text(v.to_string()),
            },
            ValueRef::Date32(days) => CellValue::Text(format_date32(days)),
            ValueRef::Time64(unit, v) => CellValue::Text(format_time64(unit, v)),
            ValueRef::Timestamp(unit, v) => CellValue::Text(format_timestamp(unit, v)),
            ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => CellValue::Text(format!("<blob {} bytes>", bytes.len())),
            other => CellValue::Text(format!("{other:?}")),
        }
    }
}

fn to_micros(unit: TimeUnit, value: i64) -> i64 {
    match unit {
        TimeUnit::Second => value.saturating_mul(1_000_000),
        TimeUnit::Millisecond => value.saturating_mul(1_000),
        TimeUnit::Microsecond => value,
        TimeUnit::Nanosecond => value / 1_000,
    }
}

fn format_date32(days: i32) -> String {
    let epoch = chrono::NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date");
    (epoch + chrono::Duration::days(i64::from(days))).to_string()
}

fn format_timestamp(unit: TimeUnit, value: i64) -> String {
    let micros = to_micros(unit, value);
    DateTime::from_timestamp_micros(micros)
        .map(|dt| dt.naive_utc().to_string())
        .unwrap_or_else(|| micros.to_string())
}

fn format_time64(unit: TimeUnit, value: i64) -> String {
    let micros = to_micros(unit, value);
    let seconds = micros.div_euclid(1_000_000);
    let nanos = micros.rem_euclid(1_000_000) * 1_000;
    chrono::NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, nanos as u32)
        .map(|t| t.to_string())
        .unwrap_or_else(|| micros.to_string())
}
