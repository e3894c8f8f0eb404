//! Application layer
//!
//! Use cases that orchestrate the domain to implement the application's
//! workflows. Each use case takes a command DTO, coordinates the invoice
//! service, and returns a response DTO for the caller to present.

pub mod invoice;
