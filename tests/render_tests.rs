mod common;

use common::{write_csv, SAMPLE_CSV};
use sales_dashboard::render::{Dashboard, Panel, RenderBody, View};
use sales_dashboard::utils::config::{parse_config, DashboardConfig, NO_DATA_MESSAGE};
use sales_dashboard::filter::FilterCriteria;

fn dashboard() -> Dashboard {
    let file = write_csv(SAMPLE_CSV);
    Dashboard::load(file.path(), &DashboardConfig::default()).unwrap()
}

#[test]
fn test_overview_default_criteria() {
    let dashboard = dashboard();
    let model = dashboard
        .render(View::Overview, &dashboard.default_criteria())
        .unwrap();

    assert_eq!(model.source_records, 6);
    assert_eq!(model.filtered_records, 6);

    let metrics = model.metrics().unwrap();
    assert!((metrics.total_revenue - 4770.74).abs() < 1e-9);

    match &model.panels()[0] {
        Panel::Bar { data, .. } => {
            assert_eq!(data.rows()[0].key, "East");
            assert_eq!(data.rows()[0].values[0], 2300.0);
        }
        other => panic!("expected bar panel, got {:?}", other),
    }
}

#[test]
fn test_charts_view() {
    let dashboard = dashboard();
    let criteria = FilterCriteria::new(["North", "South"], 0.0, 5000.0).unwrap();
    let model = dashboard.render(View::Charts, &criteria).unwrap();

    assert!(model.metrics().is_none());
    let kinds: Vec<&str> = model.panels().iter().map(Panel::title).collect();
    assert_eq!(
        kinds,
        vec!["Revenue Distribution by Region", "Customers by Region", "Filtered Data"]
    );

    match &model.panels()[2] {
        Panel::Records { records, .. } => assert_eq!(records.len(), 4),
        other => panic!("expected records panel, got {:?}", other),
    }
}

#[test]
fn test_data_table_grid() {
    let dashboard = dashboard();
    let model = dashboard
        .render(View::DataTable, &dashboard.default_criteria())
        .unwrap();

    match &model.panels()[0] {
        Panel::Grid { table, .. } => {
            let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
            assert_eq!(
                headers,
                vec!["Category", "Products Sold", "Regions", "Quantity Sold", "Total Value"]
            );
            assert_eq!(
                table.rows[0],
                vec!["Electronics", "2", "2", "5", "$3,500.50"]
            );
            assert_eq!(table.options.page_size, 10);
        }
        other => panic!("expected grid panel, got {:?}", other),
    }
}

#[test]
fn test_no_data_message() {
    let dashboard = dashboard();
    let criteria = FilterCriteria::new(["West"], 0.0, 100.0).unwrap();
    let model = dashboard.render(View::Overview, &criteria).unwrap();

    match &model.body {
        RenderBody::NoData { message } => assert_eq!(message, NO_DATA_MESSAGE),
        other => panic!("expected no data, got {:?}", other),
    }
}

#[test]
fn test_configured_defaults() {
    let file = write_csv(SAMPLE_CSV);
    let config = parse_config("[dashboard]\ndefault_view = \"charts\"\n[grid]\npage_size = 2\n")
        .unwrap();
    let dashboard = Dashboard::load(file.path(), &config).unwrap();

    assert_eq!(dashboard.default_view(), View::Charts);

    let model = dashboard
        .render(View::DataTable, &dashboard.default_criteria())
        .unwrap();
    match &model.panels()[0] {
        Panel::Grid { table, .. } => {
            assert_eq!(table.options.page_size, 2);
            assert_eq!(table.options.page_count, 2);
        }
        other => panic!("expected grid panel, got {:?}", other),
    }
}

#[test]
fn test_range_above_data_renders_no_data() {
    let dashboard = dashboard();
    let criteria = FilterCriteria::new(["East"], 5000.0, 9000.0).unwrap();

    for view in View::ALL {
        let model = dashboard.render(view, &criteria).unwrap();
        assert!(model.is_empty());
        assert_eq!(model.filtered_records, 0);
        assert_eq!(model.criteria.min_revenue(), 5000.0);
        assert_eq!(model.criteria.max_revenue(), 9000.0);
    }
}

#[test]
fn test_range_below_data_renders_no_data() {
    let dashboard = dashboard();
    let criteria = FilterCriteria::new(["North", "South"], 0.0, 50.0).unwrap();
    let model = dashboard.render(View::Overview, &criteria).unwrap();

    assert!(model.is_empty());
    assert!(model.metrics().is_none());
}
