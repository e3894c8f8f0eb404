pub mod json;

pub use json::{JsonCompanyProfileStore, JsonInvoiceStore};
