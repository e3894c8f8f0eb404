use std::path::PathBuf;

use crate::domain::invoice::{CompanyProfileStore, Party, StoreError};

use super::files::{read_document, write_document};

/// Single-slot sender profile persisted as one JSON object.
///
/// Overwritten whenever an invoice is saved; no history is kept.
pub struct JsonCompanyProfileStore {
  path: PathBuf,
}

impl JsonCompanyProfileStore {
  pub const FILE_NAME: &'static str = "company_profile.json";

  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self {
      path: data_dir.into().join(Self::FILE_NAME),
    }
  }
}

impl CompanyProfileStore for JsonCompanyProfileStore {
  fn get(&self) -> Result<Option<Party>, StoreError> {
    read_document(&self.path)
  }

  fn set(&self, party: &Party) -> Result<(), StoreError> {
    write_document(&self.path, party)
  }
}
