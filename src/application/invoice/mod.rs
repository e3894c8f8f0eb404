pub mod change_invoice_status;
pub mod create_invoice;
pub mod delete_invoice;
pub mod export_invoice;
pub mod get_company_profile;
pub mod get_invoice_details;
pub mod list_invoices;

pub use change_invoice_status::{
  ChangeInvoiceStatusCommand, ChangeInvoiceStatusResponse, ChangeInvoiceStatusUseCase,
};
pub use create_invoice::{
  CreateInvoiceCommand, CreateInvoiceItemDto, CreateInvoiceResponse, CreateInvoiceUseCase, PartyDto,
};
pub use delete_invoice::DeleteInvoiceUseCase;
pub use export_invoice::ExportInvoiceUseCase;
pub use get_company_profile::GetCompanyProfileUseCase;
pub use get_invoice_details::GetInvoiceDetailsUseCase;
pub use list_invoices::{InvoiceListItemDto, ListInvoicesUseCase};
