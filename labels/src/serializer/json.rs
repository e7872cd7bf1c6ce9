//! JSON serializer for label maps.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::LabelMap;

/// Converts a label map into a JSON value, keeping key order.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn to_json_value(map: &LabelMap) -> Result<Value> {
    Ok(serde_json::to_value(map)?)
}

/// Writes any serializable mapping to `path`, overwriting an existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written, or
/// [`Error::Json`] if serialization fails.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path, pretty: bool) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Writes the final label map.
///
/// # Errors
///
/// See [`write_json`].
pub fn write_label_map(map: &LabelMap, path: &Path, pretty: bool) -> Result<()> {
    write_json(map, path, pretty)?;
    info!(path = %path.display(), entries = map.len(), "wrote label map");
    Ok(())
}
