use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceService};

pub struct GetInvoiceDetailsUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceDetailsUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  /// Returns the full stored record; the UI renders it as-is.
  pub fn execute(&self, invoice_id: Uuid) -> Result<Invoice, InvoiceError> {
    self.invoice_service.get_invoice(invoice_id)
  }
}
