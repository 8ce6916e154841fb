//! Integration tests for the gk binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temp workspace with an explicit config, so user config files never leak in
fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let base = temp.path().canonicalize().expect("Failed to canonicalize temp dir");
    let config = base.join("gpkgkit.yml");
    fs::write(&config, "escape_html: true\n").expect("Failed to write config");
    (temp, base, config)
}

fn touch(base: &Path, rel: &str) {
    let path = base.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn gk(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gk").expect("gk binary should build");
    cmd.arg("--config").arg(config);
    cmd
}

// =============================================================================
// locate
// =============================================================================

#[test]
fn test_locate_in_working_dir() {
    let (_temp, base, config) = workspace();
    touch(&base, "test_data/b.gpkg");
    touch(&base, "test_data/a.gpkg");

    let expected = base.join("test_data").join("a.gpkg");
    gk(&config)
        .current_dir(&base)
        .arg("locate")
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn test_locate_with_dir_flag() {
    let (_temp, base, config) = workspace();
    touch(&base, "site/data/x.gpkg");
    touch(&base, "site/test_data/a.gpkg");

    let expected = base.join("site").join("data").join("x.gpkg");
    gk(&config)
        .args(["locate", "--dir"])
        .arg(base.join("site"))
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn test_locate_uses_config_base_dir() {
    let (_temp, base, config) = workspace();
    touch(&base, "site/parks.gpkg");
    fs::write(&config, format!("base_dir: {}\n", base.join("site").display())).unwrap();

    gk(&config)
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains("parks.gpkg"));
}

#[test]
fn test_locate_nothing_found() {
    let (_temp, base, config) = workspace();

    gk(&config)
        .current_dir(&base)
        .arg("locate")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No .gpkg file found"));
}

// =============================================================================
// render
// =============================================================================

#[test]
fn test_render_with_set() {
    let (_temp, base, config) = workspace();
    let template = base.join("hello.hbs");
    fs::write(&template, "Hello, {{Name}}!").unwrap();

    gk(&config)
        .arg("render")
        .arg(&template)
        .args(["--set", "Name=World"])
        .assert()
        .success()
        .stdout("Hello, World!");
}

#[test]
fn test_render_with_data_file_and_override() {
    let (_temp, base, config) = workspace();
    let template = base.join("layers.hbs");
    fs::write(&template, "{{title}}:{{#each layers}} {{name}}{{/each}}").unwrap();
    let data = base.join("data.yml");
    fs::write(&data, "title: Parks\nlayers:\n  - name: parks\n  - name: trails\n").unwrap();

    gk(&config)
        .arg("render")
        .arg(&template)
        .arg("--data")
        .arg(&data)
        .args(["--set", "title=Layers"])
        .assert()
        .success()
        .stdout("Layers: parks trails");
}

#[test]
fn test_render_raw_skips_escaping() {
    let (_temp, base, config) = workspace();
    let template = base.join("html.hbs");
    fs::write(&template, "{{body}}").unwrap();

    gk(&config)
        .arg("render")
        .arg(&template)
        .args(["--set", "body=<b>bold</b>"])
        .assert()
        .success()
        .stdout("&lt;b&gt;bold&lt;/b&gt;");

    gk(&config)
        .arg("render")
        .arg(&template)
        .args(["--set", "body=<b>bold</b>", "--raw"])
        .assert()
        .success()
        .stdout("<b>bold</b>");
}

#[test]
fn test_render_undefined_key_writes_partial_output() {
    let (_temp, base, config) = workspace();
    let template = base.join("partial.hbs");
    fs::write(&template, "Hello, {{Name}}! You have {{Count}} layers.").unwrap();

    gk(&config)
        .arg("render")
        .arg(&template)
        .args(["--set", "Name=World"])
        .assert()
        .failure()
        .stdout("Hello, World! You have ")
        .stderr(predicate::str::contains("Failed to render"));
}

#[test]
fn test_render_parse_error_writes_nothing() {
    let (_temp, base, config) = workspace();
    let template = base.join("broken.hbs");
    fs::write(&template, "before {{#each layers}}{{this}}").unwrap();

    gk(&config)
        .arg("render")
        .arg(&template)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parse"));
}
