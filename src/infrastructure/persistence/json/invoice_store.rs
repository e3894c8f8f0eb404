use std::path::PathBuf;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceStore, StoreError};

use super::files::{read_document, write_document};

/// Invoice collection persisted as one JSON array under a fixed file name.
///
/// Every mutation reads the whole collection, applies the change and writes
/// the whole collection back; there are no partial updates. A second
/// process sharing the same file races last-write-wins, which is accepted
/// for a single-user local setup.
pub struct JsonInvoiceStore {
  path: PathBuf,
}

impl JsonInvoiceStore {
  pub const FILE_NAME: &'static str = "invoices.json";

  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self {
      path: data_dir.into().join(Self::FILE_NAME),
    }
  }

  /// Loads every stored record. An entry that no longer parses is logged
  /// and skipped rather than failing the whole read.
  fn load(&self) -> Result<Vec<Invoice>, StoreError> {
    let Some(raw) = read_document::<Vec<Value>>(&self.path)? else {
      return Ok(Vec::new());
    };

    let mut invoices = Vec::with_capacity(raw.len());
    for value in raw {
      match serde_json::from_value::<Invoice>(value) {
        Ok(invoice) => invoices.push(invoice),
        Err(error) => {
          tracing::warn!(
            path = %self.path.display(),
            %error,
            "skipping malformed invoice record"
          );
        }
      }
    }

    Ok(invoices)
  }
}

impl InvoiceStore for JsonInvoiceStore {
  fn save(&self, mut invoice: Invoice) -> Result<Invoice, StoreError> {
    invoice.updated_at = Utc::now();

    let mut invoices = self.load()?;
    match invoices.iter_mut().find(|stored| stored.id == invoice.id) {
      Some(stored) => *stored = invoice.clone(),
      None => invoices.push(invoice.clone()),
    }

    write_document(&self.path, &invoices)?;
    Ok(invoice)
  }

  fn list(&self) -> Result<Vec<Invoice>, StoreError> {
    self.load()
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, StoreError> {
    Ok(self.load()?.into_iter().find(|invoice| invoice.id == id))
  }

  fn delete(&self, id: Uuid) -> Result<(), StoreError> {
    let mut invoices = self.load()?;
    let count_before = invoices.len();
    invoices.retain(|invoice| invoice.id != id);

    if invoices.len() != count_before {
      write_document(&self.path, &invoices)?;
    }

    Ok(())
  }
}
