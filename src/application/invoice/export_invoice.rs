use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService, RenderedDocument};

pub struct ExportInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ExportInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  /// Produces the downloadable document for one invoice. Writing the bytes
  /// somewhere is the caller's job.
  pub fn execute(&self, invoice_id: Uuid) -> Result<RenderedDocument, InvoiceError> {
    self.invoice_service.export_invoice(invoice_id)
  }
}
