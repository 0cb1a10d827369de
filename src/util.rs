use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Write a value to disk as pretty-printed JSON.
pub fn write_serialized<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    fs::write(path, json)
}
