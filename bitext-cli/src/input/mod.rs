//! Command-line input handling

use crate::error::CliError;
use std::io::Read;

/// Parse the Chinese sentence list from its JSON-array argument
pub fn parse_chinese_sentences(json: &str) -> Result<Vec<String>, CliError> {
    serde_json::from_str(json).map_err(|e| CliError::InvalidChineseJson(e.to_string()))
}

/// Resolve the English paragraph argument; `-` reads it from `reader`
pub fn read_english<R: Read>(arg: &str, mut reader: R) -> Result<String, CliError> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| CliError::InputError(format!("failed to read stdin: {e}")))?;
    Ok(text)
}
