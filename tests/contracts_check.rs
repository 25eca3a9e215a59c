use assert_cmd::cargo::cargo_bin_cmd;
use jsonschema::JSONSchema;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn run_json(home: &Path, source: &Path, args: &[&str]) -> Value {
    let mut cmd = cargo_bin_cmd!("storecheck");
    cmd.env("HOME", home)
        .args(["--json", "--source", source.to_str().unwrap()])
        .args(args);

    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

fn make_fixture_catalog(base: &Path) -> PathBuf {
    let catalog = json!([
        {"id": 1, "title": "Gold Ring", "price": 24.5, "rating": {"rate": 4.1, "count": 120}},
        {"id": 2, "title": "  ", "price": -3, "rating": {"rate": 6.2, "count": 4}},
        {"title": "No Id Widget", "price": 1.0, "rating": {"rate": 9.9, "count": 1}}
    ]);
    let path = base.join("products.json");
    fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
    path
}

#[test]
fn check_report_payload_matches_contract() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    let catalog = make_fixture_catalog(tmp.path());

    let out = run_json(&home, &catalog, &["check"]);
    assert_eq!(out["ok"], true);
    validate("check_report.schema.json", &out["data"]);

    // The defect list mixes present and absent product ids on purpose.
    assert_eq!(out["data"]["defects_found"], 4);
    assert_eq!(out["data"]["defects"][3]["product_id"], Value::Null);
}

#[test]
fn rules_payload_matches_contract() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    let catalog = make_fixture_catalog(tmp.path());

    let out = run_json(&home, &catalog, &["rules"]);
    assert_eq!(out["ok"], true);
    validate("rules_list.schema.json", &out["data"]);
}
