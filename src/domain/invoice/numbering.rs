use chrono::Local;
use rand::Rng;

/// Default human-facing number for a new invoice: the current date plus a
/// short random suffix, e.g. `INV-20260215-417`.
///
/// Sortable by date and unique enough for a prefilled field the user may
/// overwrite before saving. Uniqueness against already-stored invoice
/// numbers is intentionally not checked here.
pub fn generate_invoice_number() -> String {
  let date = Local::now().format("%Y%m%d");
  let suffix: u32 = rand::thread_rng().gen_range(0..1000);
  format!("INV-{}-{:03}", date, suffix)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_number_shape() {
    let number = generate_invoice_number();
    // INV- + 8 date digits + - + 3 suffix digits
    assert_eq!(number.len(), 16);
    assert!(number.starts_with("INV-"));

    let parts: Vec<&str> = number.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), 3);
  }

  #[test]
  fn test_numbers_vary() {
    // 1000 possible suffixes; 20 draws colliding on every single one is
    // effectively impossible.
    let numbers: std::collections::HashSet<String> =
      (0..20).map(|_| generate_invoice_number()).collect();
    assert!(numbers.len() > 1);
  }
}
