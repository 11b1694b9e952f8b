// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::report::{compute_totals, monthly_breakdown, CategoryBreakdown};
use crate::utils::{fmt_rupiah, maybe_print_json, month_label, parse_month, pretty_table};

pub fn handle(book: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(book, sub)?,
        Some(("monthly", sub)) => monthly(book, sub)?,
        Some(("categories", sub)) => categories(book, sub)?,
        _ => {}
    }
    Ok(())
}

fn fmt_share(fraction: &Decimal) -> String {
    format!("{}%", (*fraction * Decimal::from(100)).round_dp(1))
}

fn summary(book: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let totals = compute_totals(book.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows = vec![vec![
            fmt_rupiah(&totals.income),
            fmt_rupiah(&totals.expense),
            fmt_rupiah(&totals.balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expense", "Balance"], rows));
    }
    Ok(())
}

fn monthly(book: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);

    let mut buckets = monthly_breakdown(book.transactions());
    buckets.truncate(months);
    if maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        return Ok(());
    }

    for bucket in &buckets {
        println!();
        println!(
            "{} ({})",
            month_label(bucket.year, bucket.month),
            bucket.month_key
        );
        println!("  Income : {}", fmt_rupiah(&bucket.income));
        println!("  Expense: {}", fmt_rupiah(&bucket.expense));
        println!("  Balance: {}", fmt_rupiah(&bucket.balance));
        if bucket.categories.is_empty() {
            continue;
        }
        let mut rows = Vec::new();
        for cat in &bucket.categories {
            rows.push(vec![
                cat.category.clone(),
                fmt_rupiah(&cat.amount),
                fmt_share(&cat.percent_of_expense),
            ]);
            for detail in &cat.transactions {
                let label = match &detail.description {
                    Some(desc) => format!("  {} - {}", detail.date, desc),
                    None => format!("  {}", detail.date),
                };
                rows.push(vec![label, fmt_rupiah(&detail.amount), String::new()]);
            }
        }
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

fn categories(book: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;

    let buckets = monthly_breakdown(book.transactions());
    let empty: Vec<CategoryBreakdown> = Vec::new();
    let breakdown = buckets
        .iter()
        .find(|b| b.month_key == month)
        .map(|b| &b.categories)
        .unwrap_or(&empty);

    if !maybe_print_json(json_flag, jsonl_flag, breakdown)? {
        if breakdown.is_empty() {
            println!("No expenses recorded in {}", month);
            return Ok(());
        }
        let rows = breakdown
            .iter()
            .map(|c| {
                vec![
                    c.category.clone(),
                    fmt_rupiah(&c.amount),
                    fmt_share(&c.percent_of_expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}
