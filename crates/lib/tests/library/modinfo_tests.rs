//! Tests for parsing `modinfo.lua` manifests.

use modscript_lib::{OptionValue, SandboxOptions, ScriptError, parse_mod_info, parse_mod_info_with};

use super::common::fixture;

#[test]
fn parses_basic_fields() -> modscript_lib::Result<()> {
  let info = parse_mod_info(&fixture("modinfo.lua"))?;

  assert_eq!(info.name, "Global Positions");
  assert_eq!(info.author, "rezecib");
  assert_eq!(info.version, "2.4.1");
  assert_eq!(info.api_version, 10);
  assert_eq!(info.api_version_dst, 10);
  assert_eq!(info.priority, -1.5);
  assert!(info.dst_compatible);
  assert!(info.all_clients_require_mod);
  assert!(!info.client_only_mod);
  assert!(!info.shipwrecked_compatible);
  assert_eq!(info.icon, "modicon.tex");
  assert_eq!(info.icon_atlas, "modicon.xml");
  assert_eq!(info.server_filter_tags, vec!["global positions", "map"]);
  Ok(())
}

#[test]
fn translations_follow_the_locale() -> modscript_lib::Result<()> {
  let source = fixture("modinfo.lua");

  let zh = parse_mod_info_with(&source, &SandboxOptions::new().with_locale("zh"))?;
  assert_eq!(zh.name, "全球定位");
  assert_eq!(zh.configuration_options[0].label, "玩家指示");

  let fr = parse_mod_info_with(&source, &SandboxOptions::new().with_locale("fr"))?;
  assert_eq!(fr.name, "Global Positions");
  assert_eq!(fr.configuration_options[0].label, "Player Indicators");
  Ok(())
}

#[test]
fn options_are_mapped_in_order_and_malformed_entries_skipped() -> modscript_lib::Result<()> {
  let info = parse_mod_info(&fixture("modinfo.lua"))?;

  let names: Vec<_> = info.configuration_options.iter().map(|o| o.name.as_str()).collect();
  assert_eq!(names, vec!["SHOWPLAYERSOPTIONS", "SHOWFIREICONS", "OVERRIDEMODE", ""]);

  let players = info.option("SHOWPLAYERSOPTIONS").expect("option");
  assert_eq!(players.default, Some(OptionValue::Number(2.0)));
  assert_eq!(players.options.len(), 3);
  assert_eq!(players.options[0].description, "Always");
  assert_eq!(players.options[0].data, Some(OptionValue::Number(3.0)));

  let fire = info.option("SHOWFIREICONS").expect("option");
  assert_eq!(fire.default, Some(OptionValue::Bool(true)));
  assert!(fire.client);
  assert_eq!(fire.tags, vec!["map", "fire"]);
  assert_eq!(fire.options[1].data, Some(OptionValue::Bool(false)));
  Ok(())
}

#[test]
fn missing_descriptions_are_synthesized_from_data() -> modscript_lib::Result<()> {
  let info = parse_mod_info(&fixture("modinfo.lua"))?;

  let mode = info.option("OVERRIDEMODE").expect("option");
  let descriptions: Vec<_> = mode.options.iter().map(|i| i.description.as_str()).collect();
  assert_eq!(descriptions, vec!["off", "on"]);
  assert_eq!(mode.default, Some(OptionValue::from("off")));

  let header = &info.configuration_options[3];
  assert_eq!(header.options[0].description, "0");
  Ok(())
}

#[test]
fn folder_name_and_locale_are_bound() -> modscript_lib::Result<()> {
  let options = SandboxOptions::new()
    .with_folder_name("workshop-378160973")
    .with_locale("zh");
  let info = parse_mod_info_with(
    r#"
      name = folder_name .. ":" .. locale
      configuration_options = {}
    "#,
    &options,
  )?;
  assert_eq!(info.name, "workshop-378160973:zh");
  Ok(())
}

#[test]
fn minimal_manifest_never_fails_on_absent_fields() -> modscript_lib::Result<()> {
  let info = parse_mod_info("configuration_options = {}")?;
  assert!(info.name.is_empty());
  assert!(info.server_filter_tags.is_empty());
  assert!(info.configuration_options.is_empty());
  Ok(())
}

#[test]
fn missing_options_section_is_distinct_from_empty() {
  let err = parse_mod_info(r#"name = "No options""#).unwrap_err();
  assert!(
    matches!(&err, ScriptError::MissingSection { section } if section == "configuration_options"),
    "got {:?}",
    err
  );
  assert!(!err.is_execution());
}

#[test]
fn syntax_errors_are_execution_errors() {
  let err = parse_mod_info("name = ").unwrap_err();
  assert!(matches!(err, ScriptError::Execution { .. }), "got {:?}", err);
  assert!(err.to_string().contains("modinfo.lua"), "got {}", err);
}

#[test]
fn scripts_cannot_touch_the_filesystem() {
  let err = parse_mod_info(r#"local f = io.open("/etc/passwd") configuration_options = {}"#).unwrap_err();
  assert!(err.is_execution(), "got {:?}", err);

  let err = parse_mod_info(r#"dofile("/etc/passwd")"#).unwrap_err();
  assert!(err.is_execution(), "got {:?}", err);
}

#[test]
fn runaway_manifest_is_aborted() {
  let options = SandboxOptions::new().with_instruction_limit(50_000);
  let err = parse_mod_info_with("while true do end", &options).unwrap_err();
  assert!(matches!(err, ScriptError::ExecutionLimit { .. }), "got {:?}", err);
}

#[test]
fn mod_info_serializes_with_script_keys() -> modscript_lib::Result<()> {
  let info = parse_mod_info(&fixture("modinfo.lua"))?;
  let json = serde_json::to_value(&info).expect("serialize");

  assert_eq!(json["api_version_dst"], 10);
  assert_eq!(json["configuration_options"][1]["default"], true);
  assert_eq!(json["configuration_options"][0]["options"][0]["data"], 3.0);
  Ok(())
}
