//! Output formatting

use anyhow::Result;
use serde::Serialize;

/// Serialize a value as compact or pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
