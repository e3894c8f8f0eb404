use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::entities::InvoiceItem;

/// Round half away from zero to two decimal places.
///
/// Applied to every derived value, not only the final total, so the
/// displayed line amounts always sum exactly to the displayed subtotal.
pub fn round2(value: Decimal) -> Decimal {
  value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Amount for a single line: `round2(quantity * rate)`.
///
/// Negative inputs are coerced to zero instead of failing; live
/// recalculation feeds raw in-progress form values straight through here.
pub fn line_amount(quantity: Decimal, rate: Decimal) -> Decimal {
  let quantity = quantity.max(Decimal::ZERO);
  let rate = rate.max(Decimal::ZERO);
  round2(quantity * rate)
}

/// Sum of line amounts; an empty list yields zero.
pub fn subtotal(items: &[InvoiceItem]) -> Decimal {
  round2(items.iter().map(|item| item.amount).sum())
}

/// Tax on a subtotal at a percentage rate. Computes for any input;
/// range-checking the rate belongs to the validation layer.
pub fn tax_amount(subtotal: Decimal, tax_rate_percent: Decimal) -> Decimal {
  round2(subtotal * tax_rate_percent / Decimal::ONE_HUNDRED)
}

pub fn total(subtotal: Decimal, tax_amount: Decimal) -> Decimal {
  round2(subtotal + tax_amount)
}

// Invoice Totals - Calculated on demand, never stored without recomputing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

impl InvoiceTotals {
  /// The live `(subtotal, tax, total)` triple the UI shows while the user
  /// edits a draft. Deterministic in the items and rate alone.
  pub fn calculate(items: &[InvoiceItem], tax_rate_percent: Decimal) -> Self {
    let subtotal = subtotal(items);
    let tax_amount = tax_amount(subtotal, tax_rate_percent);
    let total = total(subtotal, tax_amount);

    Self {
      subtotal,
      tax_amount,
      total,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn item(quantity: Decimal, rate: Decimal) -> InvoiceItem {
    InvoiceItem::new("1".to_string(), "Work".to_string(), quantity, rate)
  }

  #[test]
  fn test_round2_half_away_from_zero() {
    assert_eq!(round2(dec!(1.005)), dec!(1.01));
    assert_eq!(round2(dec!(1.004)), dec!(1.00));
    assert_eq!(round2(dec!(-1.005)), dec!(-1.01));
    assert_eq!(round2(dec!(2.675)), dec!(2.68));
  }

  #[test]
  fn test_line_amount() {
    assert_eq!(line_amount(dec!(2), dec!(50)), dec!(100.00));
    assert_eq!(line_amount(dec!(3), dec!(0.333)), dec!(1.00));
    assert_eq!(line_amount(dec!(1.5), dec!(99.99)), dec!(149.99));
  }

  #[test]
  fn test_line_amount_coerces_invalid_input_to_zero() {
    assert_eq!(line_amount(dec!(0), dec!(5)), dec!(0));
    assert_eq!(line_amount(dec!(-1), dec!(5)), dec!(0));
    assert_eq!(line_amount(dec!(5), dec!(-1)), dec!(0));
  }

  #[test]
  fn test_subtotal_sums_line_amounts() {
    let items = vec![item(dec!(2), dec!(50)), item(dec!(1), dec!(30))];
    assert_eq!(subtotal(&items), dec!(130.00));
    assert_eq!(subtotal(&[]), dec!(0));
  }

  #[test]
  fn test_tax_amount() {
    assert_eq!(tax_amount(dec!(100.00), dec!(8.25)), dec!(8.25));
    assert_eq!(tax_amount(dec!(130.00), dec!(10)), dec!(13.00));
    assert_eq!(tax_amount(dec!(99.99), dec!(0)), dec!(0.00));
    // Out-of-range rates still compute; clamping is the caller's concern.
    assert_eq!(tax_amount(dec!(100), dec!(200)), dec!(200.00));
  }

  #[test]
  fn test_total() {
    assert_eq!(total(dec!(130.00), dec!(13.00)), dec!(143.00));
  }

  #[test]
  fn test_calculate_scenario() {
    // items [{q:2, r:50}, {q:1, r:30}] at 10% tax
    let items = vec![item(dec!(2), dec!(50)), item(dec!(1), dec!(30))];
    let totals = InvoiceTotals::calculate(&items, dec!(10));
    assert_eq!(totals.subtotal, dec!(130.00));
    assert_eq!(totals.tax_amount, dec!(13.00));
    assert_eq!(totals.total, dec!(143.00));
  }

  #[test]
  fn test_calculate_is_idempotent() {
    let items = vec![item(dec!(3), dec!(33.33)), item(dec!(0.5), dec!(19.99))];
    let first = InvoiceTotals::calculate(&items, dec!(8.25));
    let second = InvoiceTotals::calculate(&items, dec!(8.25));
    assert_eq!(first, second);
  }

  #[test]
  fn test_line_amounts_add_up_to_subtotal() {
    // Per-line rounding keeps the displayed column consistent with the
    // displayed subtotal.
    let items = vec![
      item(dec!(1), dec!(10.005)),
      item(dec!(1), dec!(10.005)),
      item(dec!(1), dec!(10.005)),
    ];
    let summed: Decimal = items.iter().map(|i| i.amount).sum();
    assert_eq!(subtotal(&items), summed);
    assert_eq!(summed, dec!(30.03));
  }
}
