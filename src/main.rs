use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quickbill::{
  adapters::cli::{self, CliDependencies},
  application::invoice::{
    ChangeInvoiceStatusUseCase, CreateInvoiceUseCase, DeleteInvoiceUseCase, ExportInvoiceUseCase,
    GetCompanyProfileUseCase, GetInvoiceDetailsUseCase, ListInvoicesUseCase,
  },
  domain::invoice::InvoiceService,
  infrastructure::{
    config::Config,
    persistence::json::{JsonCompanyProfileStore, JsonInvoiceStore},
    render::HtmlInvoiceRenderer,
  },
};

fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quickbill=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config =
    Config::load().map_err(|error| anyhow::anyhow!("failed to load configuration: {error}"))?;
  tracing::debug!(
    data_dir = %config.storage.data_dir.display(),
    export_dir = %config.export.output_dir.display(),
    "configuration loaded"
  );

  // Set up the local record store and the document renderer
  let invoice_store = Arc::new(JsonInvoiceStore::new(&config.storage.data_dir));
  let profile_store = Arc::new(JsonCompanyProfileStore::new(&config.storage.data_dir));
  let renderer = Arc::new(HtmlInvoiceRenderer::new());

  let invoice_service = Arc::new(InvoiceService::new(invoice_store, profile_store, renderer));

  let deps = CliDependencies {
    create_invoice: CreateInvoiceUseCase::new(invoice_service.clone()),
    list_invoices: ListInvoicesUseCase::new(invoice_service.clone()),
    get_invoice_details: GetInvoiceDetailsUseCase::new(invoice_service.clone()),
    change_invoice_status: ChangeInvoiceStatusUseCase::new(invoice_service.clone()),
    delete_invoice: DeleteInvoiceUseCase::new(invoice_service.clone()),
    export_invoice: ExportInvoiceUseCase::new(invoice_service.clone()),
    get_company_profile: GetCompanyProfileUseCase::new(invoice_service),
  };

  let args: Vec<String> = std::env::args().skip(1).collect();
  cli::run(&deps, &config, &args)
}
