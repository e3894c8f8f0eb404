use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::invoice::totals::round2;

/// Fixed two-decimal currency string with comma thousands grouping and a
/// leading symbol, e.g. `$1,234.50`.
pub fn format_currency(value: Decimal) -> String {
  let raw = format!("{:.2}", round2(value));
  let (sign, digits) = match raw.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", raw.as_str()),
  };
  let (int_part, dec_part) = digits.split_once('.').unwrap_or((digits, "00"));

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (offset, ch) in int_part.chars().enumerate() {
    if offset > 0 && (int_part.len() - offset) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }

  format!("{}${}.{}", sign, grouped, dec_part)
}

/// The one human-readable date format used across the document,
/// e.g. `February 15, 2026`.
pub fn format_date(date: NaiveDate) -> String {
  date.format("%B %-d, %Y").to_string()
}

/// Quantities and tax rates print without trailing zeros: `2`, not `2.00`.
pub fn format_number(value: Decimal) -> String {
  value.normalize().to_string()
}

/// Keeps exported file names to a safe character set.
pub fn sanitize_filename(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.';
    out.push(if ok { ch } else { '_' });
  }
  let trimmed = out.trim_matches('_').to_string();
  if trimmed.is_empty() {
    "invoice".to_string()
  } else {
    trimmed
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_format_currency() {
    assert_eq!(format_currency(dec!(0)), "$0.00");
    assert_eq!(format_currency(dec!(5)), "$5.00");
    assert_eq!(format_currency(dec!(130)), "$130.00");
    assert_eq!(format_currency(dec!(1234.5)), "$1,234.50");
    assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    assert_eq!(format_currency(dec!(-42.5)), "-$42.50");
  }

  #[test]
  fn test_format_date() {
    let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
    assert_eq!(format_date(date), "February 3, 2026");
  }

  #[test]
  fn test_format_number_trims_trailing_zeros() {
    assert_eq!(format_number(dec!(2.00)), "2");
    assert_eq!(format_number(dec!(8.25)), "8.25");
    assert_eq!(format_number(dec!(0.50)), "0.5");
  }

  #[test]
  fn test_sanitize_filename() {
    assert_eq!(sanitize_filename("INV-20260215-001"), "INV-20260215-001");
    assert_eq!(sanitize_filename("inv / 2026 #1"), "inv___2026__1");
    assert_eq!(sanitize_filename("///"), "invoice");
  }
}
