//! Row decoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rusqlite::types::ValueRef;
use serde_json::{Map, Number, Value};

/// One record: column name → value, in select order
pub type Row = Map<String, Value>;

/// Decode the current row using pre-fetched column names
pub(crate) fn decode_row(row: &rusqlite::Row<'_>, columns: &[String]) -> rusqlite::Result<Row> {
    let mut record = Map::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        record.insert(name.clone(), decode_value(row.get_ref(idx)?));
    }
    Ok(record)
}

fn decode_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        // JSON has no NaN/inf
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::String(STANDARD.encode(bytes)),
    }
}
