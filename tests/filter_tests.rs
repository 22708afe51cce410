mod common;

use common::{write_csv, SAMPLE_CSV};
use sales_dashboard::filter::{apply, FilterCriteria};
use sales_dashboard::loader::{load_transactions, Transaction, TransactionTable};

fn example_table() -> TransactionTable {
    TransactionTable::from_records(vec![
        Transaction::new("c1", "A", 100.0, 1, 10.0),
        Transaction::new("c2", "B", 50.0, 1, 10.0),
        Transaction::new("c3", "A", 30.0, 1, 10.0),
    ])
}

#[test]
fn test_example_region_and_range() {
    let table = example_table();
    let criteria = FilterCriteria::new(["A"], 0.0, 100.0).unwrap();
    let filtered = apply(&table, &criteria);

    let rows: Vec<(&str, f64)> = filtered
        .iter()
        .map(|r| (r.region.as_str(), r.total_revenue))
        .collect();
    assert_eq!(rows, vec![("A", 100.0), ("A", 30.0)]);
}

#[test]
fn test_filter_is_exact_subset() {
    let file = write_csv(SAMPLE_CSV);
    let table = load_transactions(file.path()).unwrap();

    let selections: Vec<Vec<&str>> = vec![
        vec![],
        vec!["North"],
        vec!["South", "West"],
        vec!["North", "South", "East", "West"],
    ];
    let ranges = [(0.0, 100.0), (80.25, 80.25), (99.99, 1200.5), (0.0, 5000.0)];

    for regions in &selections {
        for (min, max) in ranges {
            let criteria = FilterCriteria::new(regions.iter().copied(), min, max).unwrap();
            let filtered = apply(&table, &criteria);

            // every kept record satisfies both conditions
            for record in filtered.iter() {
                assert!(criteria.includes_region(&record.region));
                assert!(record.total_revenue >= min && record.total_revenue <= max);
            }

            // no satisfying record is excluded
            let expected = table
                .records()
                .iter()
                .filter(|r| {
                    regions.contains(&r.region.as_str())
                        && r.total_revenue >= min
                        && r.total_revenue <= max
                })
                .count();
            assert_eq!(filtered.len(), expected);
        }
    }
}

#[test]
fn test_filter_idempotent() {
    let file = write_csv(SAMPLE_CSV);
    let table = load_transactions(file.path()).unwrap();
    let criteria = FilterCriteria::new(["North", "East"], 50.0, 2000.0).unwrap();

    let first: Vec<&Transaction> = apply(&table, &criteria).records().to_vec();
    let second: Vec<&Transaction> = apply(&table, &criteria).records().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_default_criteria_keep_everything() {
    let file = write_csv(SAMPLE_CSV);
    let table = load_transactions(file.path()).unwrap();
    let criteria = FilterCriteria::all(&table);
    assert_eq!(apply(&table, &criteria).len(), table.len());
}

#[test]
fn test_source_table_untouched() {
    let table = example_table();
    let before = table.records().to_vec();
    let criteria = FilterCriteria::new(["B"], 0.0, 10.0).unwrap();
    let filtered = apply(&table, &criteria);

    assert!(filtered.is_empty());
    assert_eq!(table.records(), before.as_slice());
}
