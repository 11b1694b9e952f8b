// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

use kasbuku::{cli, commands::exporter, ledger::Ledger};

fn run_export(book: &Ledger, args: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(book, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_streams_pretty_json() {
    let mut book = Ledger::with_default_categories();
    book.add_transaction(
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        Decimal::from(-12_345),
        "PDAM",
        Some("Tagihan air".to_string()),
    );

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &book,
        &[
            "kasbuku",
            "export",
            "transactions",
            "--format",
            "json",
            "--out",
            &out_str,
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 1,
                "date": "2025-01-02",
                "type": "expense",
                "category": "PDAM",
                "amount": "-12345",
                "description": "Tagihan air"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_in_date_order() {
    let mut book = Ledger::with_default_categories();
    book.add_transaction(
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        Decimal::from(-99),
        "INDIHOME",
        None,
    );
    book.add_transaction(
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        Decimal::from(5_000_000),
        "Gaji",
        None,
    );

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &book,
        &["kasbuku", "export", "transactions", "--out", &out_str],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "date,type,category,amount,description");
    assert_eq!(lines[1], "2025-01-05,income,Gaji,5000000,");
    assert_eq!(lines[2], "2025-02-01,expense,INDIHOME,-99,");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let book = Ledger::with_default_categories();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let err = run_export(
        &book,
        &[
            "kasbuku",
            "export",
            "transactions",
            "--format",
            "xml",
            "--out",
            &out_str,
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unknown format: xml"));
    assert!(!out_path.exists());
}
