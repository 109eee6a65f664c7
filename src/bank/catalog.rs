// src/bank/catalog.rs

use std::{collections::BTreeMap, fs, path::Path};

use crate::{
    bank::{QuestionBank, loader::load_bank_file},
    error::AppError,
};

/// All banks loaded at startup, keyed by bank id.
#[derive(Debug, Default, Clone)]
pub struct BankCatalog {
    banks: BTreeMap<String, QuestionBank>,
}

impl BankCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.json` file in `dir`, in file name order.
    pub fn load_dir(dir: &Path) -> Result<Self, AppError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| {
            AppError::InternalServerError(format!("Cannot read bank directory {}: {}", dir.display(), e))
        })? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut catalog = Self::new();
        for path in paths {
            let bank = load_bank_file(&path)?;
            tracing::info!(
                "Loaded bank '{}' ({} questions) from {}",
                bank.id(),
                bank.len(),
                path.display()
            );
            catalog.insert(bank)?;
        }

        if catalog.is_empty() {
            tracing::warn!("No question banks found in {}", dir.display());
        }

        Ok(catalog)
    }

    /// Adds a bank; ids must be unique across the catalog.
    pub fn insert(&mut self, bank: QuestionBank) -> Result<(), AppError> {
        if self.banks.contains_key(bank.id()) {
            return Err(AppError::Conflict(format!(
                "Bank '{}' is defined more than once",
                bank.id()
            )));
        }
        self.banks.insert(bank.id().to_string(), bank);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&QuestionBank> {
        self.banks.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionBank> {
        self.banks.values()
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}
