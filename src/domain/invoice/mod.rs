pub mod entities;
pub mod errors;
pub mod numbering;
pub mod ports;
pub mod services;
pub mod totals;
pub mod value_objects;

pub use entities::{Invoice, InvoiceItem, Party};
pub use errors::{InvoiceError, StoreError};
pub use numbering::generate_invoice_number;
pub use ports::{CompanyProfileStore, InvoiceRenderer, InvoiceStore, RenderedDocument};
pub use services::InvoiceService;
pub use totals::InvoiceTotals;
pub use value_objects::{InvoiceNumber, InvoiceStatus, TaxRate, ValueObjectError};
