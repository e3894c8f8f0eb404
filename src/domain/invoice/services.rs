use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Invoice, Party};
use super::errors::InvoiceError;
use super::ports::{CompanyProfileStore, InvoiceRenderer, InvoiceStore, RenderedDocument};
use super::value_objects::InvoiceStatus;

pub struct InvoiceService {
  invoice_store: Arc<dyn InvoiceStore>,
  profile_store: Arc<dyn CompanyProfileStore>,
  renderer: Arc<dyn InvoiceRenderer>,
}

impl InvoiceService {
  pub fn new(
    invoice_store: Arc<dyn InvoiceStore>,
    profile_store: Arc<dyn CompanyProfileStore>,
    renderer: Arc<dyn InvoiceRenderer>,
  ) -> Self {
    Self {
      invoice_store,
      profile_store,
      renderer,
    }
  }

  /// Persists a freshly assembled invoice and remembers its company block
  /// as the default sender for future invoices (last write wins).
  pub fn create_invoice(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    self.profile_store.set(&invoice.company)?;

    let saved = self.invoice_store.save(invoice)?;
    tracing::info!(
      invoice_id = %saved.id,
      invoice_number = %saved.invoice_number,
      total = %saved.total,
      "invoice created"
    );
    Ok(saved)
  }

  pub fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
    Ok(self.invoice_store.list()?)
  }

  pub fn get_invoice(&self, invoice_id: Uuid) -> Result<Invoice, InvoiceError> {
    self
      .invoice_store
      .find_by_id(invoice_id)?
      .ok_or(InvoiceError::NotFound(invoice_id))
  }

  /// Status changes are ordinary whole-record saves. There is no separate
  /// transition operation and no automatic "overdue" trigger.
  pub fn change_status(
    &self,
    invoice_id: Uuid,
    status: InvoiceStatus,
  ) -> Result<Invoice, InvoiceError> {
    let mut invoice = self.get_invoice(invoice_id)?;
    invoice.set_status(status);

    let saved = self.invoice_store.save(invoice)?;
    tracing::info!(invoice_id = %saved.id, status = %saved.status, "invoice status changed");
    Ok(saved)
  }

  pub fn delete_invoice(&self, invoice_id: Uuid) -> Result<(), InvoiceError> {
    self.invoice_store.delete(invoice_id)?;
    tracing::info!(%invoice_id, "invoice deleted");
    Ok(())
  }

  pub fn export_invoice(&self, invoice_id: Uuid) -> Result<RenderedDocument, InvoiceError> {
    let invoice = self.get_invoice(invoice_id)?;
    self.renderer.render(&invoice)
  }

  pub fn company_profile(&self) -> Result<Option<Party>, InvoiceError> {
    Ok(self.profile_store.get()?)
  }
}
