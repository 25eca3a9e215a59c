use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = make_fixture_catalog(tmp.path());

        Self {
            _tmp: tmp,
            home,
            catalog,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("storecheck");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn write_catalog(&self, name: &str, body: &Value) -> PathBuf {
        let path = self.home.join(name);
        fs::write(
            &path,
            serde_json::to_string_pretty(body).expect("serialize catalog"),
        )
        .expect("write catalog");
        path
    }

    pub fn run_json(&self, source: &Path, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--source")
            .arg(source.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Three products, exactly one of them with a negative price.
fn make_fixture_catalog(base: &Path) -> PathBuf {
    let catalog = json!([
        {
            "id": 1,
            "title": "Gold Ring",
            "price": 24.5,
            "rating": {"rate": 4.1, "count": 120}
        },
        {
            "id": 2,
            "title": "Mens Cotton Jacket",
            "price": -5,
            "rating": {"rate": 3.8, "count": 67}
        },
        {
            "id": 3,
            "title": "Wireless Mouse",
            "price": 11.99,
            "rating": {"rate": 4.9, "count": 203}
        }
    ]);
    let path = base.join("products.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&catalog).expect("serialize catalog"),
    )
    .expect("write fixture catalog");
    path
}
