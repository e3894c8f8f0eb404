use std::sync::Arc;

use crate::domain::invoice::{InvoiceError, InvoiceService, Party};

pub struct GetCompanyProfileUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetCompanyProfileUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  /// The most recently saved sender profile, used to prefill the company
  /// block of a new invoice form. `None` until the first invoice is saved.
  pub fn execute(&self) -> Result<Option<Party>, InvoiceError> {
    self.invoice_service.company_profile()
  }
}
