//! Command-line surface.
//!
//! The thinnest possible stand-in for a UI layer: parse argv, hand a
//! command DTO to a use case, print the response. All messaging to the
//! user happens here; the core only returns result values.

use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow, bail};
use uuid::Uuid;
use validator::Validate;

use crate::application::invoice::{
  ChangeInvoiceStatusCommand, ChangeInvoiceStatusUseCase, CreateInvoiceCommand,
  CreateInvoiceUseCase, DeleteInvoiceUseCase, ExportInvoiceUseCase, GetCompanyProfileUseCase,
  GetInvoiceDetailsUseCase, ListInvoicesUseCase,
};
use crate::domain::invoice::generate_invoice_number;
use crate::infrastructure::config::Config;

pub struct CliDependencies {
  pub create_invoice: CreateInvoiceUseCase,
  pub list_invoices: ListInvoicesUseCase,
  pub get_invoice_details: GetInvoiceDetailsUseCase,
  pub change_invoice_status: ChangeInvoiceStatusUseCase,
  pub delete_invoice: DeleteInvoiceUseCase,
  pub export_invoice: ExportInvoiceUseCase,
  pub get_company_profile: GetCompanyProfileUseCase,
}

pub fn run(deps: &CliDependencies, config: &Config, args: &[String]) -> anyhow::Result<()> {
  match args {
    [command, rest @ ..] => match command.as_str() {
      "new" => new_invoice(deps, rest),
      "list" => list_invoices(deps),
      "show" => show_invoice(deps, rest),
      "status" => change_status(deps, rest),
      "delete" => delete_invoice(deps, rest),
      "export" => export_invoice(deps, config, rest),
      "profile" => show_profile(deps),
      "help" | "--help" | "-h" => {
        print_usage();
        Ok(())
      }
      other => {
        print_usage();
        bail!("unknown command: {other}");
      }
    },
    [] => {
      print_usage();
      Ok(())
    }
  }
}

fn print_usage() {
  println!("quickbill - local invoice manager");
  println!();
  println!("Usage:");
  println!("  quickbill new <form.json>         create an invoice from a form file");
  println!("  quickbill list                    list invoices, newest first");
  println!("  quickbill show <invoice-id>       print one invoice as JSON");
  println!("  quickbill status <invoice-id> <draft|sent|paid|overdue>");
  println!("  quickbill delete <invoice-id>     delete an invoice");
  println!("  quickbill export <invoice-id>     write the printable document");
  println!("  quickbill profile                 show the saved company profile");
}

fn new_invoice(deps: &CliDependencies, args: &[String]) -> anyhow::Result<()> {
  let [path] = args else {
    bail!("usage: quickbill new <form.json>");
  };

  let raw = fs::read_to_string(Path::new(path))
    .with_context(|| format!("failed to read form file {path}"))?;
  let mut command: CreateInvoiceCommand =
    serde_json::from_str(&raw).with_context(|| format!("failed to parse form file {path}"))?;

  // Prefill the number the same way the form would.
  if command.invoice_number.trim().is_empty() {
    command.invoice_number = generate_invoice_number();
  }

  command
    .validate()
    .map_err(|errors| anyhow!("invalid form input:\n{errors}"))?;

  let response = deps.create_invoice.execute(command)?;
  println!(
    "Saved invoice {} ({}) for {}",
    response.invoice_number, response.invoice_id, response.total
  );
  Ok(())
}

fn list_invoices(deps: &CliDependencies) -> anyhow::Result<()> {
  let invoices = deps.list_invoices.execute()?;
  if invoices.is_empty() {
    println!("No invoices yet.");
    return Ok(());
  }

  for invoice in invoices {
    println!(
      "{}  {:<20} {:<24} {:>12}  {}",
      invoice.invoice_id,
      invoice.invoice_number,
      invoice.client_name,
      invoice.total.to_string(),
      invoice.status
    );
  }
  Ok(())
}

fn show_invoice(deps: &CliDependencies, args: &[String]) -> anyhow::Result<()> {
  let invoice_id = parse_id(args, "show")?;
  let invoice = deps.get_invoice_details.execute(invoice_id)?;
  println!("{}", serde_json::to_string_pretty(&invoice)?);
  Ok(())
}

fn change_status(deps: &CliDependencies, args: &[String]) -> anyhow::Result<()> {
  let [id, status] = args else {
    bail!("usage: quickbill status <invoice-id> <draft|sent|paid|overdue>");
  };
  let invoice_id = Uuid::parse_str(id).with_context(|| format!("invalid invoice id {id}"))?;

  let response = deps.change_invoice_status.execute(ChangeInvoiceStatusCommand {
    invoice_id,
    new_status: status.clone(),
  })?;
  println!("Invoice {} marked as {}", response.invoice_id, response.status);
  Ok(())
}

fn delete_invoice(deps: &CliDependencies, args: &[String]) -> anyhow::Result<()> {
  let invoice_id = parse_id(args, "delete")?;
  deps.delete_invoice.execute(invoice_id)?;
  println!("Deleted invoice {invoice_id}");
  Ok(())
}

fn export_invoice(
  deps: &CliDependencies,
  config: &Config,
  args: &[String],
) -> anyhow::Result<()> {
  let invoice_id = parse_id(args, "export")?;
  let document = deps.export_invoice.execute(invoice_id)?;

  fs::create_dir_all(&config.export.output_dir).with_context(|| {
    format!(
      "failed to create export directory {}",
      config.export.output_dir.display()
    )
  })?;

  let target = config.export.output_dir.join(&document.filename);
  fs::write(&target, document.body.as_bytes())
    .with_context(|| format!("failed to write {}", target.display()))?;

  println!("Exported {}", target.display());
  Ok(())
}

fn show_profile(deps: &CliDependencies) -> anyhow::Result<()> {
  match deps.get_company_profile.execute()? {
    Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
    None => println!("No company profile saved yet."),
  }
  Ok(())
}

fn parse_id(args: &[String], command: &str) -> anyhow::Result<Uuid> {
  let [id] = args else {
    bail!("usage: quickbill {command} <invoice-id>");
  };
  Uuid::parse_str(id).with_context(|| format!("invalid invoice id {id}"))
}
