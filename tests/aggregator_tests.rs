mod common;

use common::{write_csv, SAMPLE_CSV};
use pretty_assertions::assert_eq;
use sales_dashboard::aggregator::{
    group_by, revenue_by_region, summarize, to_long_format, Column, GroupKey, Measure,
};
use sales_dashboard::filter::{apply, FilterCriteria, FilteredDataset};
use sales_dashboard::loader::{load_transactions, Transaction, TransactionTable};
use sales_dashboard::utils::config::{QUANTITY, REGION, TOTAL_REVENUE};

fn example_table() -> TransactionTable {
    TransactionTable::from_records(vec![
        Transaction::new("c1", "A", 100.0, 1, 10.0),
        Transaction::new("c2", "B", 50.0, 1, 10.0),
        Transaction::new("c3", "A", 30.0, 1, 10.0),
    ])
}

#[test]
fn test_revenue_by_region_example() {
    let table = example_table();
    let view = revenue_by_region(&FilteredDataset::all(&table)).unwrap();

    let rows: Vec<(&str, f64)> = view
        .rows()
        .iter()
        .map(|r| (r.key.as_str(), r.values[0]))
        .collect();
    assert_eq!(rows, vec![("A", 130.0), ("B", 50.0)]);
}

#[test]
fn test_summarize_filtered_example() {
    let table = example_table();
    let criteria = FilterCriteria::new(["A"], 0.0, 100.0).unwrap();
    let metrics = summarize(&apply(&table, &criteria));

    assert_eq!(metrics.total_revenue, 130.0);
    assert_eq!(metrics.avg_ticket, 65.0);
}

#[test]
fn test_summarize_empty_selection_is_zero() {
    let table = example_table();
    let criteria = FilterCriteria::new(Vec::<String>::new(), 0.0, 100.0).unwrap();
    let metrics = summarize(&apply(&table, &criteria));

    for value in [
        metrics.total_revenue,
        metrics.avg_quantity,
        metrics.total_cost,
        metrics.net_revenue,
        metrics.avg_ticket,
    ] {
        assert_eq!(value, 0.0);
    }
    assert_eq!(metrics.transaction_count, 0);
}

#[test]
fn test_avg_ticket_matches_ratio() {
    let file = write_csv(SAMPLE_CSV);
    let table = load_transactions(file.path()).unwrap();
    let metrics = summarize(&FilteredDataset::all(&table));

    let expected = metrics.total_revenue / metrics.total_quantity as f64;
    assert!((metrics.avg_ticket - expected).abs() < 1e-9);
    assert_eq!(metrics.total_quantity, 19);
}

#[test]
fn test_avg_ticket_zero_only_when_no_quantity() {
    let file = write_csv(SAMPLE_CSV);
    let table = load_transactions(file.path()).unwrap();

    // the only Kite sale has quantity 0
    let kite_only = FilterCriteria::new(["South"], 99.0, 100.0).unwrap();
    let metrics = summarize(&apply(&table, &kite_only));
    assert_eq!(metrics.total_quantity, 0);
    assert_eq!(metrics.avg_ticket, 0.0);
    assert_eq!(metrics.total_revenue, 99.99);
}

#[test]
fn test_group_rows_match_distinct_keys_and_totals() {
    let file = write_csv(SAMPLE_CSV);
    let table = load_transactions(file.path()).unwrap();
    let dataset = FilteredDataset::all(&table);

    for key in [GroupKey::Region, GroupKey::Category] {
        let view = group_by(
            &dataset,
            key,
            &[Measure::sum(Column::TotalRevenue), Measure::sum(Column::Quantity)],
        )
        .unwrap();

        let expected_groups = match key {
            GroupKey::Region => table.regions().len(),
            GroupKey::Category => 3,
        };
        assert_eq!(view.len(), expected_groups);

        let revenue: f64 = table.records().iter().map(|r| r.total_revenue).sum();
        assert!((view.total(TOTAL_REVENUE).unwrap() - revenue).abs() < 1e-9);
        assert_eq!(view.total(QUANTITY).unwrap(), 19.0);
    }
}

#[test]
fn test_zero_revenue_groups_kept() {
    let table = TransactionTable::from_records(vec![
        Transaction::new("c1", "A", 0.0, 0, 0.0),
        Transaction::new("c2", "B", 10.0, 1, 20.0),
    ]);
    let view = group_by(
        &FilteredDataset::all(&table),
        GroupKey::Region,
        &[Measure::sum(Column::TotalRevenue), Measure::sum(Column::NetRevenue)],
    )
    .unwrap();

    assert_eq!(view.len(), 2);
    assert_eq!(view.value("A", TOTAL_REVENUE), Some(0.0));
    assert_eq!(view.value("B", "Net_Revenue"), Some(-10.0));
}

#[test]
fn test_long_format_row_major() {
    let table = example_table();
    let view = group_by(
        &FilteredDataset::all(&table),
        GroupKey::Region,
        &[
            Measure::sum(Column::TotalRevenue),
            Measure::sum(Column::Cost),
        ],
    )
    .unwrap();

    let long = to_long_format(&view, REGION, &["Cost", TOTAL_REVENUE]).unwrap();
    let triples: Vec<(&str, &str, f64)> = long
        .iter()
        .map(|r| (r.id.as_str(), r.variable.as_str(), r.value))
        .collect();

    assert_eq!(
        triples,
        vec![
            ("A", "Cost", 20.0),
            ("A", TOTAL_REVENUE, 130.0),
            ("B", "Cost", 10.0),
            ("B", TOTAL_REVENUE, 50.0),
        ]
    );
}
