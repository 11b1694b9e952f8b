// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use kasbuku::{cli, commands, ledger};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("file") {
        Some(p) => PathBuf::from(p),
        None => ledger::ledger_path()?,
    };
    let mut book = ledger::open_or_init(&path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger initialized at {}", path.display());
        }
        Some(("category", sub)) => commands::categories::handle(&mut book, &path, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut book, &path, sub)?,
        Some(("report", sub)) => commands::reports::handle(&book, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut book, &path, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&book, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
