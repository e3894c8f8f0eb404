use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::InvoiceError;
use super::totals::{self, InvoiceTotals};
use super::value_objects::{InvoiceNumber, InvoiceStatus, TaxRate};

// Party - shared contact shape for the sender ("from") and the client
// ("bill to"). Required-field presence is the validation layer's job; the
// core stores what it is handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
  pub name: String,
  pub email: String,
  pub address: String,
  pub city: String,
  pub state: String,
  pub zip_code: String,
  pub country: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub website: Option<String>,
}

// Invoice line item. `amount` is derived from quantity and rate and is
// never authoritative on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
  pub id: String,
  pub description: String,
  pub quantity: Decimal,
  pub rate: Decimal,
  pub amount: Decimal,
}

impl InvoiceItem {
  /// Builds a line item, computing `amount` from quantity and rate.
  pub fn new(id: String, description: String, quantity: Decimal, rate: Decimal) -> Self {
    let amount = totals::line_amount(quantity, rate);
    Self {
      id,
      description,
      quantity,
      rate,
      amount,
    }
  }
}

// Invoice - the persisted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
  pub id: Uuid,
  pub invoice_number: InvoiceNumber,
  pub date: NaiveDate,
  pub due_date: NaiveDate,
  pub company: Party,
  pub client: Party,
  pub items: Vec<InvoiceItem>,
  pub subtotal: Decimal,
  pub tax_rate: TaxRate,
  pub tax_amount: Decimal,
  pub total: Decimal,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
  pub status: InvoiceStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Invoice {
  /// Assembles a new invoice from validated form data.
  ///
  /// Every item's amount and the subtotal/tax/total triple are recomputed
  /// here from quantity, rate and the tax rate; derived values carried in
  /// from the caller are never trusted. Persisting the result is a
  /// separate, explicit step on the store.
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    invoice_number: InvoiceNumber,
    date: NaiveDate,
    due_date: NaiveDate,
    company: Party,
    client: Party,
    items: Vec<InvoiceItem>,
    tax_rate: TaxRate,
    notes: Option<String>,
  ) -> Result<Self, InvoiceError> {
    if items.is_empty() {
      return Err(InvoiceError::NoItems);
    }

    let items: Vec<InvoiceItem> = items
      .into_iter()
      .map(|item| InvoiceItem::new(item.id, item.description, item.quantity, item.rate))
      .collect();

    let totals = InvoiceTotals::calculate(&items, tax_rate.value());
    let now = Utc::now();

    Ok(Self {
      id: Uuid::new_v4(),
      invoice_number,
      date,
      due_date,
      company,
      client,
      items,
      subtotal: totals.subtotal,
      tax_rate,
      tax_amount: totals.tax_amount,
      total: totals.total,
      notes,
      status: InvoiceStatus::Draft,
      created_at: now,
      updated_at: now,
    })
  }

  /// Overwrites the status. The change only becomes durable once the whole
  /// record is passed back through the store's save path.
  pub fn set_status(&mut self, status: InvoiceStatus) {
    self.status = status;
    self.updated_at = Utc::now();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn party(name: &str) -> Party {
    Party {
      name: name.to_string(),
      email: format!("{}@example.com", name.to_lowercase()),
      address: "1 Main St".to_string(),
      city: "Springfield".to_string(),
      state: "IL".to_string(),
      zip_code: "62701".to_string(),
      country: "USA".to_string(),
      phone: None,
      website: None,
    }
  }

  fn build_invoice(items: Vec<InvoiceItem>, tax_rate: Decimal) -> Result<Invoice, InvoiceError> {
    Invoice::new(
      InvoiceNumber::new("INV-20260215-001".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
      NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
      party("Acme"),
      party("Globex"),
      items,
      TaxRate::new(tax_rate).unwrap(),
      None,
    )
  }

  #[test]
  fn test_item_amount_is_derived() {
    let item = InvoiceItem::new("1".to_string(), "Design".to_string(), dec!(2), dec!(50));
    assert_eq!(item.amount, dec!(100.00));
  }

  #[test]
  fn test_new_invoice_starts_as_draft_with_derived_totals() {
    let items = vec![
      InvoiceItem::new("1".to_string(), "Design".to_string(), dec!(2), dec!(50)),
      InvoiceItem::new("2".to_string(), "Hosting".to_string(), dec!(1), dec!(30)),
    ];
    let invoice = build_invoice(items, dec!(10)).unwrap();

    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.subtotal, dec!(130.00));
    assert_eq!(invoice.tax_amount, dec!(13.00));
    assert_eq!(invoice.total, dec!(143.00));
    assert_eq!(invoice.created_at, invoice.updated_at);
  }

  #[test]
  fn test_new_invoice_ignores_caller_supplied_amounts() {
    let mut item = InvoiceItem::new("1".to_string(), "Design".to_string(), dec!(2), dec!(50));
    item.amount = dec!(999999);

    let invoice = build_invoice(vec![item], dec!(0)).unwrap();
    assert_eq!(invoice.items[0].amount, dec!(100.00));
    assert_eq!(invoice.subtotal, dec!(100.00));
  }

  #[test]
  fn test_new_invoice_rejects_empty_items() {
    assert!(matches!(
      build_invoice(Vec::new(), dec!(0)),
      Err(InvoiceError::NoItems)
    ));
  }

  #[test]
  fn test_invoices_get_distinct_ids() {
    let items = || vec![InvoiceItem::new("1".to_string(), "Work".to_string(), dec!(1), dec!(10))];
    let a = build_invoice(items(), dec!(0)).unwrap();
    let b = build_invoice(items(), dec!(0)).unwrap();
    assert_ne!(a.id, b.id);
  }

  #[test]
  fn test_set_status_touches_updated_at() {
    let items = vec![InvoiceItem::new("1".to_string(), "Work".to_string(), dec!(1), dec!(10))];
    let mut invoice = build_invoice(items, dec!(0)).unwrap();
    let created_at = invoice.created_at;

    invoice.set_status(InvoiceStatus::Sent);

    assert_eq!(invoice.status, InvoiceStatus::Sent);
    assert_eq!(invoice.created_at, created_at);
    assert!(invoice.updated_at >= created_at);
  }

  #[test]
  fn test_invoice_serializes_with_camel_case_keys() {
    let items = vec![InvoiceItem::new("1".to_string(), "Work".to_string(), dec!(1), dec!(10))];
    let invoice = build_invoice(items, dec!(8.25)).unwrap();

    let json = serde_json::to_value(&invoice).unwrap();
    assert!(json.get("invoiceNumber").is_some());
    assert!(json.get("dueDate").is_some());
    assert!(json.get("taxRate").is_some());
    assert!(json.get("createdAt").is_some());
    assert!(json["company"].get("zipCode").is_some());
  }
}
