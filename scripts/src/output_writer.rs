//! The deployment record, a JSON file listing what a single run put on chain

use std::{fmt::LowerHex, fs, path::Path};

use json::JsonValue;

use crate::errors::ScriptError;

/// Location of a value in the deployment record
pub enum OutputKeys<'a> {
    /// Address of a deployed contract
    Deployment {
        /// Contract key
        key: &'a str,
    },
    /// Hash of a transaction sent to a deployed contract
    Tx {
        /// Contract key
        key: &'a str,
        /// Method name
        tx_key: &'a str,
    },
}

impl OutputKeys<'_> {
    /// The entry this key points at
    fn entry<'r>(&self, record: &'r JsonValue) -> &'r JsonValue {
        match self {
            OutputKeys::Deployment { key } => &record[*key]["deploy"],
            OutputKeys::Tx { key, tx_key } => &record[*key]["txs"][*tx_key],
        }
    }

    /// The entry this key points at, created when missing
    fn entry_mut<'r>(&self, record: &'r mut JsonValue) -> &'r mut JsonValue {
        match self {
            OutputKeys::Deployment { key } => &mut record[*key]["deploy"],
            OutputKeys::Tx { key, tx_key } => &mut record[*key]["txs"][*tx_key],
        }
    }
}

/// Start an empty record, discarding whatever a previous run left there
pub fn reset_output_file(file_path: &Path) -> Result<(), ScriptError> {
    store_record(file_path, JsonValue::new_object())
}

/// Read a value from the deployment record
pub fn read_output_file(file_path: &Path, key: OutputKeys) -> Result<String, ScriptError> {
    let record = load_record(file_path)?;

    key.entry(&record)
        .as_str()
        .map(String::from)
        .ok_or_else(|| ScriptError::JsonOutputError(String::from("Key not found in output file")))
}

/// Writes the given address or hash into the deployment record
pub fn write_output_file<T: LowerHex>(
    file_path: &Path,
    key: OutputKeys,
    value: T,
) -> Result<(), ScriptError> {
    let mut record = if file_path.exists() {
        load_record(file_path)?
    } else {
        JsonValue::new_object()
    };

    *key.entry_mut(&mut record) = JsonValue::String(format!("{value:#x}"));

    store_record(file_path, record)
}

/// Pretty printed content of the deployment record
pub fn dump_output_file(file_path: &Path) -> Result<String, ScriptError> {
    Ok(json::stringify_pretty(load_record(file_path)?, 4))
}

/// Parses the record at the given path
fn load_record(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let contents = fs::read_to_string(file_path).map_err(|e| {
        ScriptError::JsonOutputError(format!("{}: {}", file_path.display(), e))
    })?;

    json::parse(&contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}

/// Overwrites the record at the given path
fn store_record(file_path: &Path, record: JsonValue) -> Result<(), ScriptError> {
    fs::write(file_path, json::stringify_pretty(record, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}
