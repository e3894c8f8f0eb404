pub mod format;
pub mod html;

pub use html::HtmlInvoiceRenderer;
