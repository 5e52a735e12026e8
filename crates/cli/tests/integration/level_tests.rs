//! `modscript level` integration tests.

use std::fs;

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn level_prints_json() {
    let (env, path) = TestEnv::with_fixture("leveldataoverride.master.lua", "leveldataoverride.lua");

    env
        .cmd()
        .arg("level")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "SURVIVAL_TOGETHER""#))
        .stdout(predicate::str::contains(r#""value": true"#));
}

#[test]
fn level_writes_output_file() {
    let (env, path) = TestEnv::with_fixture("leveldataoverride.cave.lua", "leveldataoverride.lua");
    let out = env.path().join("level.json");

    env
        .cmd()
        .arg("level")
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["id"], "DST_CAVE");
    assert_eq!(json["background_node_range"][1], 1.0);
}
