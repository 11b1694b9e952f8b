// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use kasbuku::models::{parse_amount, parse_tx_date, InvalidTransaction, Transaction};
use kasbuku::report::{compute_totals, monthly_breakdown};

fn tx(id: i64, date: &str, amount: i64, category: &str) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: Decimal::from(amount),
        category: category.to_string(),
        description: None,
    }
}

#[test]
fn totals_and_breakdown_for_single_month() {
    let txs = vec![
        tx(1, "2024-01-05", 5_000_000, "Gaji"),
        tx(2, "2024-01-10", -150_000, "PDAM"),
        tx(3, "2024-01-12", -50_000, "PDAM"),
    ];

    let totals = compute_totals(&txs);
    assert_eq!(totals.income, Decimal::from(5_000_000));
    assert_eq!(totals.expense, Decimal::from(200_000));
    assert_eq!(totals.balance, Decimal::from(4_800_000));

    let buckets = monthly_breakdown(&txs);
    assert_eq!(buckets.len(), 1);
    let bucket = &buckets[0];
    assert_eq!(bucket.month_key, "2024-01");
    assert_eq!(bucket.year, 2024);
    assert_eq!(bucket.month, 1);
    assert_eq!(bucket.income, Decimal::from(5_000_000));
    assert_eq!(bucket.expense, Decimal::from(200_000));
    assert_eq!(bucket.balance, Decimal::from(4_800_000));

    assert_eq!(bucket.categories.len(), 1);
    let pdam = &bucket.categories[0];
    assert_eq!(pdam.category, "PDAM");
    assert_eq!(pdam.amount, Decimal::from(200_000));
    assert_eq!(pdam.percent_of_expense, Decimal::ONE);
    // detail entries carry absolute amounts, most recent date first
    let dates: Vec<String> = pdam.transactions.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-12", "2024-01-10"]);
    assert_eq!(pdam.transactions[0].amount, Decimal::from(50_000));
    assert_eq!(pdam.transactions[1].amount, Decimal::from(150_000));
}

#[test]
fn buckets_are_ordered_most_recent_month_first() {
    let txs = vec![
        tx(1, "2024-01-05", -100, "PDAM"),
        tx(2, "2024-02-05", -200, "PDAM"),
    ];
    let buckets = monthly_breakdown(&txs);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].month_key, "2024-02");
    assert_eq!(buckets[1].month_key, "2024-01");
}

#[test]
fn income_only_month_has_no_category_breakdown() {
    let txs = vec![
        tx(1, "2024-03-01", 1_000_000, "Gaji"),
        tx(2, "2024-03-15", 250_000, "Bonus"),
    ];
    let buckets = monthly_breakdown(&txs);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].expense, Decimal::ZERO);
    assert_eq!(buckets[0].income, Decimal::from(1_250_000));
    assert!(buckets[0].categories.is_empty());
}

#[test]
fn malformed_amounts_and_dates_are_rejected_at_the_boundary() {
    assert!(matches!(
        parse_amount("NaN"),
        Err(InvalidTransaction::Amount(_))
    ));
    assert!(matches!(
        parse_amount("abc"),
        Err(InvalidTransaction::Amount(_))
    ));
    assert!(matches!(
        parse_tx_date("2024-02-30"),
        Err(InvalidTransaction::Date(_))
    ));
    assert!(matches!(
        parse_tx_date("not-a-date"),
        Err(InvalidTransaction::Date(_))
    ));
}

#[test]
fn balance_is_additive_over_partitions() {
    let all = vec![
        tx(1, "2024-01-05", 5_000_000, "Gaji"),
        tx(2, "2024-01-10", -150_000, "PDAM"),
        tx(3, "2024-02-01", -320_000, "INDIHOME"),
        tx(4, "2024-02-14", 75_000, "Bonus"),
        tx(5, "2024-03-03", -99_000, "Lainnya"),
        tx(6, "2024-03-28", -1, "Lainnya"),
    ];
    for split in 0..=all.len() {
        let (a, b) = all.split_at(split);
        let whole = compute_totals(&all);
        assert_eq!(
            whole.balance,
            compute_totals(a).balance + compute_totals(b).balance
        );
    }
}

#[test]
fn empty_input_yields_zero_totals_and_no_buckets() {
    let totals = compute_totals(&[]);
    assert_eq!(totals.income, Decimal::ZERO);
    assert_eq!(totals.expense, Decimal::ZERO);
    assert_eq!(totals.balance, Decimal::ZERO);
    assert!(monthly_breakdown(&[]).is_empty());
}

#[test]
fn category_shares_sum_to_one() {
    // three equal categories force a non-terminating division
    let txs = vec![
        tx(1, "2024-05-01", -100, "PDAM"),
        tx(2, "2024-05-02", -100, "INDIHOME"),
        tx(3, "2024-05-03", -100, "Lainnya"),
    ];
    let buckets = monthly_breakdown(&txs);
    let sum: Decimal = buckets[0]
        .categories
        .iter()
        .map(|c| c.percent_of_expense)
        .sum();
    let tolerance = Decimal::new(1, 9); // 1e-9
    assert!((sum - Decimal::ONE).abs() < tolerance, "sum was {}", sum);
}

#[test]
fn ordering_is_fully_deterministic() {
    let txs = vec![
        tx(1, "2024-01-03", -500, "PDAM"),
        tx(2, "2024-01-20", -500, "PDAM"),
        tx(3, "2024-01-07", -2_000, "INDIHOME"),
        tx(4, "2024-02-02", -10, "Lainnya"),
        tx(5, "2024-02-09", 9_000, "Gaji"),
        tx(6, "2024-03-11", -40, "PDAM"),
    ];
    let buckets = monthly_breakdown(&txs);

    let keys: Vec<&str> = buckets.iter().map(|b| b.month_key.as_str()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.reverse();
    assert_eq!(keys, sorted);

    for bucket in &buckets {
        for pair in bucket.categories.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
        for cat in &bucket.categories {
            for pair in cat.transactions.windows(2) {
                assert!(pair[0].date >= pair[1].date);
            }
        }
    }
}

#[test]
fn equal_category_amounts_fall_back_to_name_order() {
    let txs = vec![
        tx(1, "2024-01-03", -500, "Listrik"),
        tx(2, "2024-01-04", -500, "Air"),
    ];
    let buckets = monthly_breakdown(&txs);
    let names: Vec<&str> = buckets[0]
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(names, vec!["Air", "Listrik"]);
}

#[test]
fn same_day_details_keep_input_order() {
    let txs = vec![
        tx(1, "2024-01-10", -100, "PDAM"),
        tx(2, "2024-01-10", -200, "PDAM"),
        tx(3, "2024-01-10", -300, "PDAM"),
    ];
    let buckets = monthly_breakdown(&txs);
    let ids: Vec<i64> = buckets[0].categories[0]
        .transactions
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn recomputing_from_the_same_input_is_identical() {
    let txs = vec![
        tx(1, "2024-01-05", 5_000_000, "Gaji"),
        tx(2, "2024-01-10", -150_000, "PDAM"),
        tx(3, "2024-02-12", -50_000, "INDIHOME"),
    ];
    assert_eq!(compute_totals(&txs), compute_totals(&txs));
    assert_eq!(monthly_breakdown(&txs), monthly_breakdown(&txs));
}
