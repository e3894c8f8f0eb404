use uuid::Uuid;

use super::entities::{Invoice, Party};
use super::errors::{InvoiceError, StoreError};

/// Durable store for invoice records, keyed by id.
///
/// Mutations are whole-record overwrites; callers that want to change one
/// field read the record, modify it, and save it back. Calls are
/// synchronous and complete before returning.
pub trait InvoiceStore: Send + Sync {
  /// Upserts by id and refreshes `updated_at`. Returns the record as
  /// stored. There are no partial/merge semantics.
  fn save(&self, invoice: Invoice) -> Result<Invoice, StoreError>;

  /// All records in insertion order. Callers re-sort for display.
  fn list(&self) -> Result<Vec<Invoice>, StoreError>;

  /// Absence is signalled with `None`, never an error.
  fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, StoreError>;

  /// Removes the record if present; deleting an unknown id is a no-op.
  fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Single-slot store for the default sender profile.
pub trait CompanyProfileStore: Send + Sync {
  fn get(&self) -> Result<Option<Party>, StoreError>;

  /// Unconditional overwrite; the last saved profile wins.
  fn set(&self, party: &Party) -> Result<(), StoreError>;
}

/// A downloadable artifact produced from one invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
  pub filename: String,
  pub content_type: &'static str,
  pub body: String,
}

/// Renders an invoice into a fixed-layout printable document.
///
/// Must be deterministic and stateless: identical invoices produce
/// identical output. Where the bytes end up is the caller's concern.
pub trait InvoiceRenderer: Send + Sync {
  fn render(&self, invoice: &Invoice) -> Result<RenderedDocument, InvoiceError>;
}
