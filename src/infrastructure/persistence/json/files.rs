use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::invoice::StoreError;

/// Reads a whole JSON document from disk. `None` if it does not exist yet.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
  let raw = match fs::read_to_string(path) {
    Ok(raw) => raw,
    Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
    Err(error) => {
      return Err(StoreError::Unavailable(format!(
        "failed to read {}: {}",
        path.display(),
        error
      )));
    }
  };

  let value = serde_json::from_str(&raw).map_err(|error| {
    StoreError::Malformed(format!("{}: {}", path.display(), error))
  })?;

  Ok(Some(value))
}

/// Replaces a whole JSON document through a temp file and a rename, so a
/// failed write never leaves a half-updated collection behind.
pub(crate) fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(|error| {
      StoreError::Unavailable(format!(
        "failed to prepare {}: {}",
        parent.display(),
        error
      ))
    })?;
  }

  let payload = serde_json::to_vec_pretty(value).map_err(|error| {
    StoreError::Unavailable(format!("failed to encode {}: {}", path.display(), error))
  })?;

  let temp_path = path.with_extension("json.tmp");
  fs::write(&temp_path, payload).map_err(|error| {
    StoreError::Unavailable(format!(
      "failed to write {}: {}",
      temp_path.display(),
      error
    ))
  })?;

  fs::rename(&temp_path, path).map_err(|error| {
    StoreError::Unavailable(format!(
      "failed to finalize {}: {}",
      path.display(),
      error
    ))
  })
}
