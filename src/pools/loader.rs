/// Pool record loading from indexer JSON
///
/// Accepts a bare array of pool rows or the GraphQL response envelope
/// `{"data": {"stakingPools": [...]}}`.
use std::path::Path;

use serde_json::Value;

use crate::errors::{ PoolScopeError, Result };
use crate::logger::{ self, LogTag };
use crate::pools::types::{ PoolRecord, RawPoolRecord };

const POOLS_FIELD: &str = "stakingPools";

/// What to do with a row that fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// First invalid row fails the whole load
    Strict,
    /// Invalid rows are logged and skipped
    Lenient,
}

/// Extract raw rows from a JSON document
pub fn parse_raw_records(json: &str) -> Result<Vec<RawPoolRecord>> {
    let document: Value = serde_json::from_str(json)?;

    let rows = match document {
        Value::Array(rows) => Value::Array(rows),
        Value::Object(mut map) => {
            let data = map
                .remove("data")
                .and_then(|mut data| data.get_mut(POOLS_FIELD).map(Value::take));
            match data {
                Some(rows) => rows,
                None => {
                    return Err(
                        PoolScopeError::invalid_input(
                            format!("expected an array or a data.{} envelope", POOLS_FIELD)
                        )
                    );
                }
            }
        }
        other => {
            return Err(
                PoolScopeError::invalid_input(format!("expected pool rows, got {}", json_kind(&other)))
            );
        }
    };

    Ok(serde_json::from_value(rows)?)
}

/// Validate raw rows into engine records
pub fn validate_records(raw: Vec<RawPoolRecord>, mode: ValidationMode) -> Result<Vec<PoolRecord>> {
    let total = raw.len();
    let mut records = Vec::with_capacity(total);

    for row in raw {
        match PoolRecord::try_from(row) {
            Ok(record) => {
                logger::verbose(LogTag::Input, &format!("Validated pool {}", record.id));
                records.push(record);
            }
            Err(e) if mode == ValidationMode::Lenient => {
                logger::warning(LogTag::Input, &format!("Skipping pool: {}", e));
            }
            Err(e) => {
                return Err(e);
            }
        }
    }

    if records.len() < total {
        logger::info(LogTag::Input, &format!("Loaded {} of {} pools", records.len(), total));
    } else {
        logger::debug(LogTag::Input, &format!("Loaded {} pools", total));
    }
    Ok(records)
}

/// Parse and validate a JSON document
pub fn load_records_from_str(json: &str, mode: ValidationMode) -> Result<Vec<PoolRecord>> {
    validate_records(parse_raw_records(json)?, mode)
}

/// Read, parse and validate a JSON file
pub fn load_records_from_path(path: impl AsRef<Path>, mode: ValidationMode) -> Result<Vec<PoolRecord>> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_records_from_str(&contents, mode)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
