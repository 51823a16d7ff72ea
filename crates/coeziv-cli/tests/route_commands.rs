use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("coeziv-cli");
    cmd.env("NO_COLOR", "1").env("RUST_LOG", "error");
    cmd
}

#[test]
fn default_route_prefers_calm_roads() {
    cli()
        .arg("route")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from A to F (3 edges):"))
        .stdout(predicate::str::contains(" - D via A-D"))
        .stdout(predicate::str::contains(" - E via D-E"))
        .stdout(predicate::str::contains(" - F via E-F"))
        .stdout(predicate::str::contains("Total cost: 8.26"));
}

#[test]
fn json_route_matches_api_shape() {
    let output = cli()
        .args(["--format", "json", "route", "--src", "A", "--dst", "F"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["nodes"], serde_json::json!(["A", "D", "E", "F"]));
    assert_eq!(json["edges"], serde_json::json!(["A-D", "D-E", "E-F"]));
    assert!((json["total_time_min"].as_f64().unwrap() - 7.16).abs() < 1e-9);
}

#[test]
fn malformed_weights_fall_back_to_defaults() {
    cli()
        .args(["route", "--alpha", "fast", "--beta", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 8.26"));
}

#[test]
fn negative_weight_is_accepted_as_argument() {
    cli()
        .args(["route", "--alpha", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 8.26"));
}

#[test]
fn same_source_and_destination_is_empty_route() {
    cli()
        .args(["route", "--src", "C", "--dst", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from C to C (0 edges):"))
        .stdout(predicate::str::contains("Total time: 0.00 min"));
}

#[test]
fn unknown_node_error_is_friendly() {
    cli()
        .args(["route", "--src", "A", "--dst", "Z"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no route found between A and Z"))
        .stderr(predicate::str::contains("unknown node: Z"));
}

#[test]
fn graph_lists_base_roads() {
    cli()
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: A, B, C, D, E, F"))
        .stdout(predicate::str::contains("Roads (7):"))
        .stdout(predicate::str::contains("_rev").not());
}

#[test]
fn export_then_route_from_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("network.json");

    cli()
        .args(["export", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 6 nodes and 7 roads"));

    assert!(path.exists());

    cli()
        .arg("--network")
        .arg(&path)
        .args(["route", "--src", "B", "--dst", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from B to D"));
}

#[test]
fn missing_network_file_is_reported() {
    let dir = tempdir().expect("create temp dir");

    cli()
        .arg("--network")
        .arg(dir.path().join("absent.json"))
        .arg("graph")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load road network"));
}

#[test]
fn invalid_network_file_is_rejected() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("network.json");
    std::fs::write(
        &path,
        r#"{"nodes":["A","B"],"edges":[{"id":"A-B","from":"A","to":"B","length_km":-1.0,"speed_kmh":50.0,"tension":0.2,"traffic":1.0}]}"#,
    )
    .expect("write network");

    cli()
        .arg("--network")
        .arg(&path)
        .arg("graph")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid road network"));
}
