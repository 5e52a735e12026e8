//! Independent parses on separate threads.

use std::thread;

use modscript_lib::{
  ModInfo, Result, SandboxOptions, ScriptError, parse_level_overrides, parse_mod_info, parse_mod_info_with,
};

use super::common::fixture;

#[test]
fn parses_run_in_parallel_without_shared_state() {
  let modinfo = fixture("modinfo.lua");
  let level = fixture("leveldataoverride.master.lua");

  thread::scope(|scope| {
    let handles: Vec<_> = (0..8)
      .map(|i| {
        let modinfo = &modinfo;
        let level = &level;
        scope.spawn(move || {
          let locale = if i % 2 == 0 { "zh" } else { "en" };
          let info = parse_mod_info_with(modinfo, &SandboxOptions::new().with_locale(locale)).unwrap();
          let overrides = parse_level_overrides(level).unwrap();
          (locale, info.name, overrides.id)
        })
      })
      .collect();

    for handle in handles {
      let (locale, name, id) = handle.join().unwrap();
      let expected = if locale == "zh" { "全球定位" } else { "Global Positions" };
      assert_eq!(name, expected);
      assert_eq!(id, "SURVIVAL_TOGETHER");
    }
  });
}

#[test]
fn failed_parse_is_returned_to_the_spawning_thread() {
  let handle = thread::spawn(|| -> Result<ModInfo> { parse_mod_info("error('bad manifest')") });
  let err = handle.join().unwrap().unwrap_err();
  assert!(matches!(err, ScriptError::Execution { .. }), "got {:?}", err);
  assert!(err.to_string().contains("bad manifest"), "got {}", err);
}

#[test]
fn script_errors_are_send_and_sync() {
  fn assert_send_sync<T: Send + Sync + 'static>() {}
  assert_send_sync::<ScriptError>();
  assert_send_sync::<Result<ModInfo>>();
}
