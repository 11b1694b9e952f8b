// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single recorded income or expense event.
///
/// The amount is signed: positive is income, negative is expense. Records
/// arriving in the unsigned-amount-plus-type convention are converted at the
/// boundary via [`TxKind::signed`] before a `Transaction` is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    pub fn kind(&self) -> TxKind {
        if self.amount > Decimal::ZERO {
            TxKind::Income
        } else {
            TxKind::Expense
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn parse(s: &str) -> Result<TxKind, InvalidTransaction> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(InvalidTransaction::Kind(other.to_string())),
        }
    }

    /// Applies the sign convention to an unsigned magnitude.
    pub fn signed(self, magnitude: Decimal) -> Decimal {
        match self {
            TxKind::Income => magnitude.abs(),
            TxKind::Expense => -magnitude.abs(),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
    Both,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Expense => write!(f, "expense"),
            CategoryKind::Income => write!(f, "income"),
            CategoryKind::Both => write!(f, "both"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: CategoryKind,
}

/// Rejected at the ingestion boundary; the aggregation engine itself only
/// ever sees fully constructed transactions.
#[derive(Debug, Error)]
pub enum InvalidTransaction {
    #[error("Invalid amount '{0}', expected a decimal number")]
    Amount(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    Date(String),
    #[error("Invalid transaction type '{0}', expected 'income' or 'expense'")]
    Kind(String),
    #[error("Duplicate transaction id {0}")]
    DuplicateId(i64),
}

/// Parses an amount string into a finite decimal. `NaN`, infinities and
/// non-numeric input all fail here, never inside the engine.
pub fn parse_amount(s: &str) -> Result<Decimal, InvalidTransaction> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| InvalidTransaction::Amount(s.trim().to_string()))
}

pub fn parse_tx_date(s: &str) -> Result<NaiveDate, InvalidTransaction> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| InvalidTransaction::Date(s.trim().to_string()))
}
