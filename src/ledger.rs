// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Category, CategoryKind, InvalidTransaction, Transaction, TxKind};
use crate::report::month_key;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("id.kasbuku", "Kasbuku", "kasbuku"));

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Transaction {0} not found")]
    UnknownTransaction(i64),
    #[error("Category '{0}' not found")]
    UnknownCategory(String),
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("Category '{0}' is still used by {1} transaction(s)")]
    CategoryInUse(String, usize),
}

/// The whole ledger as one JSON document: managed categories plus the
/// transaction collection, with monotonically increasing ids.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default = "first_id")]
    next_transaction_id: i64,
    #[serde(default = "first_id")]
    next_category_id: i64,
}

fn first_id() -> i64 {
    1
}

/// Optional constraints for [`Ledger::select`].
#[derive(Debug, Clone, Default)]
pub struct TxFilter {
    pub month: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TxKind>,
    pub limit: Option<usize>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger {
            categories: Vec::new(),
            transactions: Vec::new(),
            next_transaction_id: 1,
            next_category_id: 1,
        }
    }

    /// Fresh ledger seeded with the default category list.
    pub fn with_default_categories() -> Ledger {
        let mut ledger = Ledger::new();
        for (name, kind) in [
            ("PDAM", CategoryKind::Expense),
            ("INDIHOME", CategoryKind::Expense),
            ("Gaji", CategoryKind::Income),
            ("Bonus", CategoryKind::Income),
            ("Lainnya", CategoryKind::Both),
        ] {
            let id = ledger.next_category_id;
            ledger.next_category_id += 1;
            ledger.categories.push(Category {
                id,
                name: name.to_string(),
                kind,
            });
        }
        ledger
    }

    pub fn load(path: &Path) -> Result<Ledger> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Open ledger at {}", path.display()))?;
        let ledger: Ledger = serde_json::from_str(&raw)
            .with_context(|| format!("Parse ledger at {}", path.display()))?;
        ledger.check_unique_ids()?;
        Ok(ledger)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).with_context(|| format!("Write ledger at {}", path.display()))?;
        Ok(())
    }

    fn check_unique_ids(&self) -> Result<(), InvalidTransaction> {
        let mut seen = HashSet::new();
        for tx in &self.transactions {
            if !seen.insert(tx.id) {
                return Err(InvalidTransaction::DuplicateId(tx.id));
            }
        }
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        amount: Decimal,
        category: &str,
        description: Option<String>,
    ) -> i64 {
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        self.transactions.push(Transaction {
            id,
            date,
            amount,
            category: category.to_string(),
            description,
        });
        id
    }

    pub fn update_transaction(&mut self, id: i64, update: TxUpdate) -> Result<(), LedgerError> {
        let tx = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::UnknownTransaction(id))?;
        if let Some(date) = update.date {
            tx.date = date;
        }
        if let Some(amount) = update.amount {
            tx.amount = amount;
        }
        if let Some(category) = update.category {
            tx.category = category;
        }
        if let Some(description) = update.description {
            tx.description = Some(description);
        }
        Ok(())
    }

    pub fn remove_transaction(&mut self, id: i64) -> Result<(), LedgerError> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::UnknownTransaction(id))?;
        self.transactions.remove(pos);
        Ok(())
    }

    pub fn add_category(&mut self, name: &str, kind: CategoryKind) -> Result<i64, LedgerError> {
        if self.categories.iter().any(|c| c.name == name) {
            return Err(LedgerError::DuplicateCategory(name.to_string()));
        }
        let id = self.next_category_id;
        self.next_category_id += 1;
        self.categories.push(Category {
            id,
            name: name.to_string(),
            kind,
        });
        Ok(id)
    }

    /// Removes a category by name; refuses while any transaction still
    /// carries it.
    pub fn remove_category(&mut self, name: &str) -> Result<(), LedgerError> {
        let pos = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| LedgerError::UnknownCategory(name.to_string()))?;
        let used = self
            .transactions
            .iter()
            .filter(|t| t.category == name)
            .count();
        if used > 0 {
            return Err(LedgerError::CategoryInUse(name.to_string(), used));
        }
        self.categories.remove(pos);
        Ok(())
    }

    /// Filtered view of the collection, ordered date descending then id
    /// descending, optionally truncated.
    pub fn select(&self, filter: &TxFilter) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| {
                filter
                    .month
                    .as_deref()
                    .is_none_or(|m| month_key(t.date) == m)
            })
            .filter(|t| filter.category.as_deref().is_none_or(|c| t.category == c))
            .filter(|t| filter.kind.is_none_or(|k| t.kind() == k))
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        if let Some(limit) = filter.limit {
            rows.truncate(limit);
        }
        rows
    }
}

impl Default for Ledger {
    fn default() -> Ledger {
        Ledger::new()
    }
}

/// Field changes for [`Ledger::update_transaction`]; `None` leaves the
/// current value in place.
#[derive(Debug, Default)]
pub struct TxUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
}

pub fn ledger_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("kasbuku.json"))
}

/// Loads the ledger at `path`, or creates it with the default categories on
/// first use.
pub fn open_or_init(path: &Path) -> Result<Ledger> {
    if path.exists() {
        Ledger::load(path)
    } else {
        let ledger = Ledger::with_default_categories();
        ledger.save(path)?;
        Ok(ledger)
    }
}
