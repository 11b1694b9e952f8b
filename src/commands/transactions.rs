// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{Ledger, TxFilter, TxUpdate};
use crate::models::{parse_amount, parse_tx_date, TxKind};
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(book: &mut Ledger, path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(book, path, sub)?,
        Some(("list", sub)) => list(book, sub)?,
        Some(("edit", sub)) => edit(book, path, sub)?,
        Some(("rm", sub)) => rm(book, path, sub)?,
        _ => {}
    }
    Ok(())
}

/// Resolves the `--amount`/`--type` pair into the canonical signed amount.
fn signed_amount_arg(sub: &clap::ArgMatches) -> Result<Decimal> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    match sub.get_one::<String>("type") {
        Some(kind) => Ok(TxKind::parse(kind)?.signed(amount)),
        None => Ok(amount),
    }
}

fn add(book: &mut Ledger, path: &Path, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_tx_date(sub.get_one::<String>("date").unwrap())?;
    let amount = signed_amount_arg(sub)?;
    let category = sub.get_one::<String>("category").unwrap();
    let description = sub.get_one::<String>("description").map(|s| s.to_string());

    if !book.categories().iter().any(|c| c.name == *category) {
        println!("Note: category '{}' is not in the managed list", category);
    }
    let id = book.add_transaction(date, amount, category, description);
    book.save(path)?;
    println!("Recorded {} on {} in '{}' (id: {})", amount, date, category, id);
    Ok(())
}

fn list(book: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(book, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Type", "Amount", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit(book: &mut Ledger, path: &Path, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(raw) => Some(parse_tx_date(raw)?),
        None => None,
    };
    let amount = match sub.get_one::<String>("amount") {
        Some(raw) => {
            let amount = parse_amount(raw)?;
            match sub.get_one::<String>("type") {
                Some(kind) => Some(TxKind::parse(kind)?.signed(amount)),
                None => Some(amount),
            }
        }
        // --type without --amount re-signs the stored amount
        None => match sub.get_one::<String>("type") {
            Some(kind) => {
                let kind = TxKind::parse(kind)?;
                book.transaction(id).map(|tx| kind.signed(tx.amount))
            }
            None => None,
        },
    };
    let update = TxUpdate {
        date,
        amount,
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
    };
    book.update_transaction(id, update)?;
    book.save(path)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(book: &mut Ledger, path: &Path, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    book.remove_transaction(id)?;
    book.save(path)?;
    println!("Removed transaction {}", id);
    Ok(())
}

#[derive(Serialize, Debug)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
    pub description: String,
}

pub fn query_rows(book: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = TxFilter {
        month: match sub.get_one::<String>("month") {
            Some(m) => Some(parse_month(m)?),
            None => None,
        },
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
        kind: match sub.get_one::<String>("type") {
            Some(kind) => Some(TxKind::parse(kind)?),
            None => None,
        },
        limit: sub.get_one::<usize>("limit").copied(),
    };

    let data = book
        .select(&filter)
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            category: t.category.clone(),
            kind: t.kind().to_string(),
            amount: t.amount.to_string(),
            description: t.description.clone().unwrap_or_default(),
        })
        .collect();
    Ok(data)
}
