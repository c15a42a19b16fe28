// Node report: totals, unpriced handling, text rendering, node file loading

mod common;

use common::priced_node;
use nodecost::config::ReportConfig;
use nodecost::models::Node;
use nodecost::report::{build_report, load_nodes, parse_nodes, render_text};

fn fleet() -> Vec<Node> {
    let mut web = priced_node("m1", 0.40, 4.0, 16e9);
    web.name.update("web-1", 10);
    let unpriced = priced_node("m2", 0.0, 2.0, 4e9);
    let mut db = priced_node("m3", 1.0, 8.0, 32e9);
    db.cpu_usage_percent = common::series(&[]);
    vec![web, unpriced, db]
}

#[test]
fn report_sums_known_costs() {
    let report = build_report(&fleet(), &ReportConfig::default());
    assert_eq!(report.nodes.len(), 3);
    assert_eq!(report.unpriced, 1);
    assert!((report.total_per_hour - 1.40).abs() < 1e-5);

    let ids: Vec<&str> = report.nodes.iter().map(|n| n.machine_id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2", "m3"]);
    assert!(report.nodes[0].up);
    assert!(report.nodes[1].breakdown.is_none());
    assert!(!report.nodes[2].up);
    assert!(report.nodes[2].breakdown.is_some());
}

#[test]
fn report_only_priced_drops_unknown_costs() {
    let config = ReportConfig {
        only_priced: true,
        ..Default::default()
    };
    let report = build_report(&fleet(), &config);
    assert_eq!(report.nodes.len(), 2);
    assert_eq!(report.unpriced, 1);
    assert!(report.nodes.iter().all(|n| n.breakdown.is_some()));
}

#[test]
fn report_of_no_nodes_is_empty() {
    let report = build_report(&[], &ReportConfig::default());
    assert!(report.nodes.is_empty());
    assert_eq!(report.total_per_hour, 0.0);
    assert_eq!(report.unpriced, 0);
}

#[test]
fn render_text_lines() {
    let config = ReportConfig {
        precision: 2,
        ..Default::default()
    };
    let report = build_report(&fleet(), &config);
    let text = render_text(&report, &config);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "m1 web-1 up cpu=0.08 memory=0.32 total=0.40 USD/h"
    );
    assert_eq!(lines[1], "m2 - up cost unknown");
    assert!(lines[2].starts_with("m3 - down cpu="));
    assert_eq!(lines[3], "total=1.40 USD/h unpriced=1");
}

#[test]
fn report_json_keeps_unknown_breakdown_as_null() {
    let report = build_report(&fleet(), &ReportConfig::default());
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["nodes"][1]["breakdown"].is_null());
    assert!(json["nodes"][0]["breakdown"]["cpuUsagePerHour"].is_number());
}

#[test]
fn parse_nodes_skips_entries_without_machine_id() {
    let json = r#"[
        {"machineId": "m1", "pricePerHour": 0.4,
         "cpuCapacity": {"from": 0, "step": 15, "data": [4]},
         "memoryTotalBytes": {"from": 0, "step": 15, "data": [16000000000]}},
        {"pricePerHour": 1.0}
    ]"#;
    let nodes = parse_nodes(json).unwrap();
    assert_eq!(nodes.len(), 1);
    let b = nodes[0].price_breakdown().unwrap();
    assert!((b.costs.cpu_usage_per_hour - 0.08).abs() < 1e-6);
}

#[test]
fn parse_nodes_rejects_malformed_json() {
    assert!(parse_nodes("{not json").is_err());
    assert!(parse_nodes(r#"[{"machineId": "m1", "uptime": {"from": 0, "step": 0}}]"#).is_err());
}

#[tokio::test]
async fn load_nodes_reads_serialized_fleet() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nodes.json");
    std::fs::write(&path, serde_json::to_string(&fleet()).unwrap()).unwrap();

    let nodes = load_nodes(&path).await.unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].name.value(), "web-1");
    let report = build_report(&nodes, &ReportConfig::default());
    assert_eq!(report.unpriced, 1);
    assert!((report.total_per_hour - 1.40).abs() < 1e-5);
}

#[tokio::test]
async fn load_nodes_missing_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(load_nodes(dir.path().join("absent.json")).await.is_err());
}
