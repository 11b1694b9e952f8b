// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::ledger::Ledger;
use crate::models::{parse_amount, parse_tx_date, TxKind};

pub fn handle(book: &mut Ledger, path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(book, path, sub),
        _ => Ok(()),
    }
}

/// CSV columns: date, type, category, amount, description. An empty type
/// column means the amount is already signed; otherwise the amount is a
/// magnitude and the type decides the sign. Any bad row aborts the whole
/// import before the ledger is touched.
fn import_transactions(book: &mut Ledger, ledger_path: &Path, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut staged = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim().to_string();
        let kind_raw = rec.get(1).unwrap_or("").trim().to_string();
        let category = rec.get(2).context("category missing")?.trim().to_string();
        let amount_raw = rec.get(3).context("amount missing")?.trim().to_string();
        let description = rec
            .get(4)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let date = parse_tx_date(&date_raw)
            .with_context(|| format!("Invalid transaction date '{}'", date_raw))?;
        let amount = parse_amount(&amount_raw)
            .with_context(|| format!("Invalid amount '{}' for '{}'", amount_raw, category))?;
        let amount = if kind_raw.is_empty() {
            amount
        } else {
            TxKind::parse(&kind_raw)?.signed(amount)
        };
        staged.push((date, amount, category, description));
    }

    let count = staged.len();
    for (date, amount, category, description) in staged {
        book.add_transaction(date, amount, &category, description);
    }
    book.save(ledger_path)?;
    println!("Imported {} transaction(s) from {}", count, path);
    Ok(())
}
