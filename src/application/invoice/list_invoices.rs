use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceService, InvoiceStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListItemDto {
  pub invoice_id: Uuid,
  pub invoice_number: String,
  pub client_name: String,
  pub date: NaiveDate,
  pub due_date: NaiveDate,
  pub total: Decimal,
  pub status: InvoiceStatus,
  pub created_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceListItemDto {
  fn from(invoice: Invoice) -> Self {
    Self {
      invoice_id: invoice.id,
      invoice_number: invoice.invoice_number.into_inner(),
      client_name: invoice.client.name,
      date: invoice.date,
      due_date: invoice.due_date,
      total: invoice.total,
      status: invoice.status,
      created_at: invoice.created_at,
    }
  }
}

pub struct ListInvoicesUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  /// Lists every stored invoice, most recently created first.
  pub fn execute(&self) -> Result<Vec<InvoiceListItemDto>, InvoiceError> {
    let mut invoices = self.invoice_service.list_invoices()?;
    invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(invoices.into_iter().map(InvoiceListItemDto::from).collect())
  }
}
