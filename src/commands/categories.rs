// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{bail, Result};

use crate::ledger::Ledger;
use crate::models::CategoryKind;
use crate::utils::pretty_table;

pub fn handle(book: &mut Ledger, path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
            book.add_category(name, kind)?;
            book.save(path)?;
            println!("Added category '{}' ({})", name, kind);
        }
        Some(("list", _)) => {
            let data = book
                .categories()
                .iter()
                .map(|c| vec![c.name.clone(), c.kind.to_string()])
                .collect();
            println!("{}", pretty_table(&["Category", "Kind"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            book.remove_category(name)?;
            book.save(path)?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

fn parse_kind(s: &str) -> Result<CategoryKind> {
    match s.trim().to_ascii_lowercase().as_str() {
        "expense" => Ok(CategoryKind::Expense),
        "income" => Ok(CategoryKind::Income),
        "both" => Ok(CategoryKind::Both),
        other => bail!(
            "Invalid category kind '{}', expected expense|income|both",
            other
        ),
    }
}
