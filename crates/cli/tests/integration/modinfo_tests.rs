//! `modscript modinfo` integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn modinfo_prints_json() {
    let (env, path) = TestEnv::with_fixture("modinfo.lua", "workshop-378160973/modinfo.lua");

    env
        .cmd()
        .arg("modinfo")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Global Positions""#))
        .stdout(predicate::str::contains(r#""api_version_dst": 10"#));
}

#[test]
fn modinfo_respects_locale() {
    let (env, path) = TestEnv::with_fixture("modinfo.lua", "workshop-378160973/modinfo.lua");

    env
        .cmd()
        .args(["modinfo", "--locale", "zh"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("全球定位"));
}

#[test]
fn modinfo_exposes_folder_name() {
    let env = TestEnv::empty();
    let path = env.write_file(
        "workshop-1274919201/modinfo.lua",
        "name = folder_name\nconfiguration_options = {}\n",
    );

    env
        .cmd()
        .arg("modinfo")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "workshop-1274919201""#));

    env
        .cmd()
        .args(["modinfo", "--folder-name", "custom"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "custom""#));
}

#[test]
fn modinfo_reports_missing_section() {
    let env = TestEnv::empty();
    let path = env.write_file("modinfo.lua", r#"name = "No options""#);

    env
        .cmd()
        .arg("modinfo")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing the 'configuration_options' section"));
}

#[test]
fn modinfo_reports_script_errors() {
    let env = TestEnv::empty();
    let path = env.write_file("modinfo.lua", "name = ");

    env
        .cmd()
        .arg("modinfo")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has an error and could not be run"));
}

#[test]
fn modinfo_missing_file_fails() {
    let env = TestEnv::empty();

    env
        .cmd()
        .args(["modinfo", "nope.lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read nope.lua"));
}
