use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::invoice::{
  Invoice, InvoiceError, InvoiceItem, InvoiceNumber, InvoiceService, Party, TaxRate,
};

/// Contact block as submitted by the form, shared by "from" and "bill to".
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartyDto {
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,

  #[validate(email(message = "Invalid email address"))]
  pub email: String,

  #[validate(length(min = 1, message = "Address is required"))]
  pub address: String,

  #[validate(length(min = 1, message = "City is required"))]
  pub city: String,

  #[validate(length(min = 1, message = "State is required"))]
  pub state: String,

  #[validate(length(min = 1, message = "ZIP code is required"))]
  pub zip_code: String,

  #[validate(length(min = 1, message = "Country is required"))]
  pub country: String,

  #[serde(default)]
  pub phone: Option<String>,

  #[serde(default)]
  pub website: Option<String>,
}

impl From<PartyDto> for Party {
  fn from(dto: PartyDto) -> Self {
    Party {
      name: dto.name,
      email: dto.email,
      address: dto.address,
      city: dto.city,
      state: dto.state,
      zip_code: dto.zip_code,
      country: dto.country,
      phone: dto.phone.filter(|value| !value.trim().is_empty()),
      website: dto.website.filter(|value| !value.trim().is_empty()),
    }
  }
}

/// One line of the items table. Carries no amount on purpose: amounts are
/// always recomputed from quantity and rate.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceItemDto {
  pub id: String,

  #[validate(length(min = 1, message = "Description is required"))]
  pub description: String,

  #[validate(custom(function = validate_positive, message = "Quantity must be greater than 0"))]
  pub quantity: Decimal,

  #[validate(custom(function = validate_positive, message = "Rate must be greater than 0"))]
  pub rate: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceCommand {
  #[validate(length(min = 1, message = "Invoice number is required"))]
  pub invoice_number: String,

  /// Issue date as a date-only string, `YYYY-MM-DD`.
  pub date: String,

  /// Due date as a date-only string, `YYYY-MM-DD`.
  pub due_date: String,

  #[validate(nested)]
  pub company: PartyDto,

  #[validate(nested)]
  pub client: PartyDto,

  #[validate(length(min = 1, message = "At least one item is required"))]
  #[validate(nested)]
  pub items: Vec<CreateInvoiceItemDto>,

  #[validate(custom(function = validate_tax_rate, message = "Tax rate must be between 0 and 100"))]
  pub tax_rate: Decimal,

  #[serde(default)]
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceResponse {
  pub invoice_id: Uuid,
  pub invoice_number: String,
  pub total: Decimal,
  pub created_at: DateTime<Utc>,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(
    &self,
    command: CreateInvoiceCommand,
  ) -> Result<CreateInvoiceResponse, InvoiceError> {
    let invoice_number = InvoiceNumber::new(command.invoice_number)?;
    let date = parse_date(&command.date)?;
    let due_date = parse_date(&command.due_date)?;
    let tax_rate = TaxRate::new(command.tax_rate)?;

    let items: Vec<InvoiceItem> = command
      .items
      .into_iter()
      .map(|item| InvoiceItem::new(item.id, item.description, item.quantity, item.rate))
      .collect();

    let notes = command.notes.filter(|notes| !notes.trim().is_empty());

    let invoice = Invoice::new(
      invoice_number,
      date,
      due_date,
      command.company.into(),
      command.client.into(),
      items,
      tax_rate,
      notes,
    )?;

    let saved = self.invoice_service.create_invoice(invoice)?;

    Ok(CreateInvoiceResponse {
      invoice_id: saved.id,
      invoice_number: saved.invoice_number.into_inner(),
      total: saved.total,
      created_at: saved.created_at,
    })
  }
}

fn parse_date(value: &str) -> Result<NaiveDate, InvoiceError> {
  NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
    .map_err(|_| InvoiceError::InvalidDate(value.to_string()))
}

fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
  if *value > Decimal::ZERO {
    Ok(())
  } else {
    Err(ValidationError::new("positive"))
  }
}

fn validate_tax_rate(value: &Decimal) -> Result<(), ValidationError> {
  if *value >= Decimal::ZERO && *value <= Decimal::from(100) {
    Ok(())
  } else {
    Err(ValidationError::new("tax_rate_range"))
  }
}
