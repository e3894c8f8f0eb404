use thiserror::Error;
use uuid::Uuid;

use super::value_objects::ValueObjectError;

/// Failures surfaced by the record store.
///
/// A missing record is not an error; lookups signal absence with `None`.
#[derive(Debug, Error)]
pub enum StoreError {
  /// The persistence medium could not be read or written. A failed save
  /// never leaves the collection in a mixed old/new state.
  #[error("Storage unavailable: {0}")]
  Unavailable(String),

  /// A stored value no longer parses into the expected shape.
  #[error("Malformed record: {0}")]
  Malformed(String),
}

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Invoice not found: {0}")]
  NotFound(Uuid),

  #[error("Invalid date '{0}': expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("An invoice needs at least one line item")]
  NoItems,

  #[error("Document rendering failed: {0}")]
  RenderFailed(String),

  #[error(transparent)]
  Store(#[from] StoreError),
}
