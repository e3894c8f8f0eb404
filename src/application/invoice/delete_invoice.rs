use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

pub struct DeleteInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl DeleteInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  /// Deleting an id that no longer exists is a successful no-op.
  pub fn execute(&self, invoice_id: Uuid) -> Result<(), InvoiceError> {
    self.invoice_service.delete_invoice(invoice_id)
  }
}
