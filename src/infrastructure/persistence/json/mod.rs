mod files;
pub mod invoice_store;
pub mod profile_store;

pub use invoice_store::JsonInvoiceStore;
pub use profile_store::JsonCompanyProfileStore;
