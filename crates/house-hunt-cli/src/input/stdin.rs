use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise piped stdin into `T`.
///
/// Returns None for an interactive terminal or empty input so the caller can
/// fall back to flags.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Ok(None);
    }

    let parsed = serde_json::from_str(buffer.trim())
        .map_err(|e| format!("Failed to parse stdin: {e}"))?;
    Ok(Some(parsed))
}
