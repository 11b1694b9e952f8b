// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over in-memory transactions: global totals and the
//! per-month breakdown with category shares. No I/O, no state; every call
//! recomputes from the slice it is handed.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// One expense line inside a month's category breakdown, carrying the
/// absolute amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseDetail {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: Decimal,
    /// Share of the month's expense total as a fraction (1 == 100%).
    /// Zero when the month has no expenses.
    pub percent_of_expense: Decimal,
    /// Expense entries for this category, most recent date first; entries
    /// on the same date keep their input order.
    pub transactions: Vec<ExpenseDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub month_key: String,
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    /// Expense categories, largest summed amount first; equal amounts are
    /// ordered by category name.
    pub categories: Vec<CategoryBreakdown>,
}

/// `YYYY-MM` grouping key for a date, zero-padded so the lexicographic
/// order is the calendar order.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Sums income (positive amounts), expense (absolute value of the rest)
/// and the resulting balance over the whole collection.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for tx in transactions {
        if tx.amount > Decimal::ZERO {
            income += tx.amount;
        } else {
            expense += -tx.amount;
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Groups transactions by calendar month and produces one bucket per month,
/// most recent first, each with its own totals and expense-category
/// breakdown. Income transactions count toward the month's totals but never
/// appear in the category breakdown.
pub fn monthly_breakdown(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let mut groups: BTreeMap<(i32, u32), Vec<&Transaction>> = BTreeMap::new();
    for tx in transactions {
        groups
            .entry((tx.date.year(), tx.date.month()))
            .or_default()
            .push(tx);
    }

    let mut buckets = Vec::with_capacity(groups.len());
    for ((year, month), txs) in groups.into_iter().rev() {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        let mut by_category: BTreeMap<&str, (Decimal, Vec<ExpenseDetail>)> = BTreeMap::new();

        for tx in txs {
            if tx.amount > Decimal::ZERO {
                income += tx.amount;
                continue;
            }
            let magnitude = -tx.amount;
            expense += magnitude;
            let entry = by_category.entry(tx.category.as_str()).or_default();
            entry.0 += magnitude;
            entry.1.push(ExpenseDetail {
                id: tx.id,
                date: tx.date,
                amount: magnitude,
                description: tx.description.clone(),
            });
        }

        let mut categories: Vec<CategoryBreakdown> = by_category
            .into_iter()
            .map(|(name, (amount, mut details))| {
                details.sort_by(|a, b| b.date.cmp(&a.date));
                let percent_of_expense = if expense.is_zero() {
                    Decimal::ZERO
                } else {
                    amount / expense
                };
                CategoryBreakdown {
                    category: name.to_string(),
                    amount,
                    percent_of_expense,
                    transactions: details,
                }
            })
            .collect();
        // the BTreeMap already yields name order; the stable sort keeps it
        // as the tie-break between equal amounts
        categories.sort_by(|a, b| b.amount.cmp(&a.amount));

        buckets.push(MonthBucket {
            month_key: format!("{:04}-{:02}", year, month),
            year,
            month,
            income,
            expense,
            balance: income - expense,
            categories,
        });
    }
    buckets
}
