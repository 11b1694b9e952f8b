// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use serde_json::json;

use crate::ledger::Ledger;
use crate::models::Transaction;

pub fn handle(book: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(book, sub),
        _ => Ok(()),
    }
}

fn export_transactions(book: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut rows: Vec<&Transaction> = book.transactions().iter().collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "type", "category", "amount", "description"])?;
            for t in rows {
                wtr.write_record([
                    t.date.to_string(),
                    t.kind().to_string(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.description.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in rows {
                items.push(json!({
                    "id": t.id,
                    "date": t.date.to_string(),
                    "type": t.kind().to_string(),
                    "category": t.category,
                    "amount": t.amount.to_string(),
                    "description": t.description,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
