use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService, InvoiceStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInvoiceStatusCommand {
  pub invoice_id: Uuid,
  pub new_status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInvoiceStatusResponse {
  pub invoice_id: Uuid,
  pub status: String,
}

pub struct ChangeInvoiceStatusUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ChangeInvoiceStatusUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(
    &self,
    command: ChangeInvoiceStatusCommand,
  ) -> Result<ChangeInvoiceStatusResponse, InvoiceError> {
    let new_status = InvoiceStatus::from_str(&command.new_status)?;

    let invoice = self
      .invoice_service
      .change_status(command.invoice_id, new_status)?;

    Ok(ChangeInvoiceStatusResponse {
      invoice_id: invoice.id,
      status: invoice.status.as_str().to_string(),
    })
  }
}
