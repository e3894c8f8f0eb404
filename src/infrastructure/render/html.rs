use lazy_static::lazy_static;
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceRenderer, Party, RenderedDocument};

use super::format::{format_currency, format_date, format_number, sanitize_filename};

const TEMPLATE_NAME: &str = "invoice.html.tera";

lazy_static! {
  static ref TEMPLATES: Tera = {
    let mut tera = Tera::default();
    tera
      .add_raw_template(
        TEMPLATE_NAME,
        include_str!("../../../templates/invoice.html.tera"),
      )
      .expect("invoice template must parse");
    tera.autoescape_on(vec![".html.tera", ".html"]);
    tera
  };
}

#[derive(Debug, Serialize)]
struct PartyBlock {
  name: String,
  email: String,
  address: String,
  city_line: String,
  country: String,
  phone: Option<String>,
  website: Option<String>,
}

impl PartyBlock {
  fn from_party(party: &Party) -> Self {
    Self {
      name: party.name.clone(),
      email: party.email.clone(),
      address: party.address.clone(),
      city_line: format!("{}, {} {}", party.city, party.state, party.zip_code),
      country: party.country.clone(),
      phone: party.phone.clone(),
      website: party.website.clone(),
    }
  }
}

#[derive(Debug, Serialize)]
struct ItemRow {
  description: String,
  quantity: String,
  rate: String,
  amount: String,
}

/// Everything the template needs, pre-formatted. Keeping formatting out of
/// the template makes the output trivially deterministic.
#[derive(Debug, Serialize)]
struct DocumentContext {
  invoice_number: String,
  date: String,
  due_date: String,
  company: PartyBlock,
  client: PartyBlock,
  items: Vec<ItemRow>,
  subtotal: String,
  show_tax: bool,
  tax_rate: String,
  tax_amount: String,
  total: String,
  notes: Option<String>,
}

impl DocumentContext {
  fn from_invoice(invoice: &Invoice) -> Self {
    let items = invoice
      .items
      .iter()
      .map(|item| ItemRow {
        description: item.description.clone(),
        quantity: format_number(item.quantity),
        rate: format_currency(item.rate),
        amount: format_currency(item.amount),
      })
      .collect();

    Self {
      invoice_number: invoice.invoice_number.value().to_string(),
      date: format_date(invoice.date),
      due_date: format_date(invoice.due_date),
      company: PartyBlock::from_party(&invoice.company),
      client: PartyBlock::from_party(&invoice.client),
      items,
      subtotal: format_currency(invoice.subtotal),
      show_tax: invoice.tax_rate.value() > rust_decimal::Decimal::ZERO,
      tax_rate: format_number(invoice.tax_rate.value()),
      tax_amount: format_currency(invoice.tax_amount),
      total: format_currency(invoice.total),
      notes: invoice.notes.clone(),
    }
  }
}

/// Renders invoices into the fixed-layout printable document that mirrors
/// the on-screen preview.
pub struct HtmlInvoiceRenderer;

impl HtmlInvoiceRenderer {
  pub fn new() -> Self {
    Self
  }
}

impl Default for HtmlInvoiceRenderer {
  fn default() -> Self {
    Self::new()
  }
}

impl InvoiceRenderer for HtmlInvoiceRenderer {
  fn render(&self, invoice: &Invoice) -> Result<RenderedDocument, InvoiceError> {
    let document = DocumentContext::from_invoice(invoice);
    let context = Context::from_serialize(&document)
      .map_err(|error| InvoiceError::RenderFailed(error.to_string()))?;

    let body = TEMPLATES
      .render(TEMPLATE_NAME, &context)
      .map_err(|error| InvoiceError::RenderFailed(error.to_string()))?;

    Ok(RenderedDocument {
      filename: format!(
        "invoice-{}.html",
        sanitize_filename(invoice.invoice_number.value())
      ),
      content_type: "text/html",
      body,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;
  use rust_decimal_macros::dec;

  use crate::domain::invoice::{InvoiceItem, InvoiceNumber, TaxRate};

  fn party(name: &str) -> Party {
    Party {
      name: name.to_string(),
      email: format!("{}@example.com", name.to_lowercase()),
      address: "1 Main St".to_string(),
      city: "Springfield".to_string(),
      state: "IL".to_string(),
      zip_code: "62701".to_string(),
      country: "USA".to_string(),
      phone: Some("555-0100".to_string()),
      website: None,
    }
  }

  fn invoice(tax_rate: rust_decimal::Decimal) -> Invoice {
    Invoice::new(
      InvoiceNumber::new("INV-20260215-001".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
      NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
      party("Acme"),
      party("Globex"),
      vec![
        InvoiceItem::new("1".to_string(), "Design work".to_string(), dec!(2), dec!(50)),
        InvoiceItem::new("2".to_string(), "Hosting".to_string(), dec!(1), dec!(30)),
      ],
      TaxRate::new(tax_rate).unwrap(),
      Some("Thank you!".to_string()),
    )
    .unwrap()
  }

  #[test]
  fn test_render_contains_the_preview_sections() {
    let rendered = HtmlInvoiceRenderer::new().render(&invoice(dec!(10))).unwrap();

    assert_eq!(rendered.content_type, "text/html");
    assert_eq!(rendered.filename, "invoice-INV-20260215-001.html");
    assert!(rendered.body.contains("INV-20260215-001"));
    assert!(rendered.body.contains("February 15, 2026"));
    assert!(rendered.body.contains("March 17, 2026"));
    assert!(rendered.body.contains("Acme"));
    assert!(rendered.body.contains("Globex"));
    assert!(rendered.body.contains("Design work"));
    assert!(rendered.body.contains("$130.00"));
    assert!(rendered.body.contains("Tax (10%)"));
    assert!(rendered.body.contains("$13.00"));
    assert!(rendered.body.contains("$143.00"));
    assert!(rendered.body.contains("Thank you!"));
  }

  #[test]
  fn test_render_omits_tax_line_at_zero_rate() {
    let rendered = HtmlInvoiceRenderer::new().render(&invoice(dec!(0))).unwrap();

    assert!(!rendered.body.contains("Tax ("));
    assert!(rendered.body.contains("$130.00"));
  }

  #[test]
  fn test_render_is_deterministic() {
    let invoice = invoice(dec!(8.25));
    let renderer = HtmlInvoiceRenderer::new();

    let first = renderer.render(&invoice).unwrap();
    let second = renderer.render(&invoice).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_render_escapes_html_in_user_content() {
    let mut invoice = invoice(dec!(0));
    invoice.items[0].description = "<script>alert(1)</script>".to_string();

    let rendered = HtmlInvoiceRenderer::new().render(&invoice).unwrap();
    assert!(!rendered.body.contains("<script>alert(1)</script>"));
  }
}
