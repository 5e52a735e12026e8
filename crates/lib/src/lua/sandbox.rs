//! Isolated interpreter for untrusted configuration scripts.
//!
//! Each [`Sandbox`] owns a fresh Lua state with only the `string`, `table` and
//! `math` libraries, the base library minus its file loaders, and three
//! injected globals: `folder_name`, `locale` and `ChooseTranslationTable`.
//! `print` is routed to `tracing` instead of stdout.

use std::cell::Cell;
use std::rc::Rc;

use mlua::{HookTriggers, LuaOptions, StdLib, VmState};
use mlua::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{
  DEFAULT_INSTRUCTION_LIMIT, DEFAULT_MEMORY_LIMIT, FOLDER_NAME_GLOBAL, HOOK_INTERVAL, LOCALE_GLOBAL,
  PROTECTED_CALLS, REMOVED_BASE_FUNCTIONS, TRANSLATION_GLOBAL,
};
use crate::error::{Result, ScriptError};
use crate::lua::access::as_string;
use crate::lua::translate::create_translation_function;

/// Bindings and limits for one sandboxed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxOptions {
  /// Package directory name exposed as `folder_name`.
  pub folder_name: String,
  /// Locale exposed as `locale` and used by `ChooseTranslationTable`.
  pub locale: String,
  /// Abort the script after this many VM instructions. `None` disables the check.
  pub instruction_limit: Option<u64>,
  /// Cap on interpreter allocations in bytes. `None` disables the cap.
  pub memory_limit: Option<usize>,
}

impl Default for SandboxOptions {
  fn default() -> Self {
    Self {
      folder_name: String::new(),
      locale: String::new(),
      instruction_limit: Some(DEFAULT_INSTRUCTION_LIMIT),
      memory_limit: Some(DEFAULT_MEMORY_LIMIT),
    }
  }
}

impl SandboxOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_folder_name(mut self, folder_name: impl Into<String>) -> Self {
    self.folder_name = folder_name.into();
    self
  }

  pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
    self.locale = locale.into();
    self
  }

  pub fn with_instruction_limit(mut self, limit: u64) -> Self {
    self.instruction_limit = Some(limit);
    self
  }

  pub fn with_memory_limit(mut self, bytes: usize) -> Self {
    self.memory_limit = Some(bytes);
    self
  }

  /// Drop both the instruction and memory limits.
  pub fn unlimited(mut self) -> Self {
    self.instruction_limit = None;
    self.memory_limit = None;
    self
  }
}

/// Which part of the executed script is handed to the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
  /// The value of the chunk's `return` statement (`leveldataoverride.lua`).
  Returned,
  /// The global table after execution (`modinfo.lua`).
  Globals,
}

/// A single-use interpreter.
///
/// Created per parse and consumed by [`Sandbox::run`]; the Lua state is torn
/// down when `run` returns, on success and on failure alike.
pub struct Sandbox {
  lua: Lua,
  instruction_limit: Option<u64>,
  exhausted: Rc<Cell<bool>>,
}

impl Sandbox {
  /// Create the interpreter and bind the injected globals.
  pub fn new(options: &SandboxOptions) -> Result<Self> {
    let lua = Lua::new_with(StdLib::STRING | StdLib::TABLE | StdLib::MATH, LuaOptions::default())
      .map_err(ScriptError::Sandbox)?;
    register_globals(&lua, options).map_err(ScriptError::Sandbox)?;

    if let Some(bytes) = options.memory_limit {
      lua.set_memory_limit(bytes).map_err(ScriptError::Sandbox)?;
    }

    let exhausted = Rc::new(Cell::new(false));
    if let Some(limit) = options.instruction_limit {
      install_budget(&lua, limit, exhausted.clone()).map_err(ScriptError::Sandbox)?;
      guard_protected_calls(&lua, exhausted.clone()).map_err(ScriptError::Sandbox)?;
    }

    Ok(Self {
      lua,
      instruction_limit: options.instruction_limit,
      exhausted,
    })
  }

  /// Execute `source` and hand the selected root to `map`.
  ///
  /// The root only lives for the duration of `map`; whatever `map` returns must
  /// be owned data copied out of it.
  pub fn run<T, F>(self, source: &str, chunk: &str, root: Root, map: F) -> Result<T>
  where
    F: FnOnce(LuaValue) -> Result<T>,
  {
    debug!(chunk = %chunk, root = ?root, "executing script");

    let loaded = self.lua.load(source).set_name(format!("={}", chunk));
    let value = match root {
      Root::Returned => loaded.eval::<LuaValue>(),
      Root::Globals => loaded.exec().map(|()| LuaValue::Table(self.lua.globals())),
    };

    let value = match value {
      Ok(value) => value,
      Err(source) => return Err(self.execution_error(chunk, source)),
    };
    if let (Some(limit), true) = (self.instruction_limit, self.exhausted.get()) {
      return Err(ScriptError::ExecutionLimit {
        chunk: chunk.to_string(),
        limit,
      });
    }

    trace!(chunk = %chunk, kind = value.type_name(), "script finished");
    map(value)
  }

  fn execution_error(&self, chunk: &str, source: LuaError) -> ScriptError {
    match self.instruction_limit {
      Some(limit) if self.exhausted.get() => ScriptError::ExecutionLimit {
        chunk: chunk.to_string(),
        limit,
      },
      _ => ScriptError::Execution {
        chunk: chunk.to_string(),
        source,
      },
    }
  }
}

/// Create a sandbox, run `source` in it and map the selected root.
pub fn run<T, F>(source: &str, chunk: &str, root: Root, options: &SandboxOptions, map: F) -> Result<T>
where
  F: FnOnce(LuaValue) -> Result<T>,
{
  Sandbox::new(options)?.run(source, chunk, root, map)
}

fn register_globals(lua: &Lua, options: &SandboxOptions) -> LuaResult<()> {
  let globals = lua.globals();

  for name in REMOVED_BASE_FUNCTIONS {
    globals.raw_remove(*name)?;
  }

  let print = lua.create_function(|_, args: LuaMultiValue| {
    let line = args.iter().map(printable).collect::<Vec<_>>().join("\t");
    debug!(target: "modscript::script", "{}", line);
    Ok(())
  })?;
  globals.set("print", print)?;

  globals.set(FOLDER_NAME_GLOBAL, options.folder_name.as_str())?;
  globals.set(LOCALE_GLOBAL, options.locale.as_str())?;
  globals.set(TRANSLATION_GLOBAL, create_translation_function(lua, &options.locale)?)?;

  Ok(())
}

fn printable(value: &LuaValue) -> String {
  match value {
    LuaValue::Nil => "nil".to_string(),
    LuaValue::Boolean(b) => b.to_string(),
    other => as_string(other).unwrap_or_else(|| other.type_name().to_string()),
  }
}

/// Abort execution once roughly `limit` instructions have run.
///
/// After the budget is spent every further hook tick raises again.
fn install_budget(lua: &Lua, limit: u64, exhausted: Rc<Cell<bool>>) -> LuaResult<()> {
  let executed = Cell::new(0u64);
  lua.set_hook(
    HookTriggers::new().every_nth_instruction(HOOK_INTERVAL),
    move |_lua, _debug| {
      let total = executed.get() + u64::from(HOOK_INTERVAL);
      executed.set(total);
      if total >= limit {
        exhausted.set(true);
        return Err(budget_error(limit));
      }
      Ok(VmState::Continue)
    },
  )
}

/// Wrap `pcall` and `xpcall` so a spent budget cannot be caught by the script.
fn guard_protected_calls(lua: &Lua, exhausted: Rc<Cell<bool>>) -> LuaResult<()> {
  let globals = lua.globals();

  for name in PROTECTED_CALLS {
    let original: LuaFunction = globals.raw_get(*name)?;
    let exhausted = exhausted.clone();
    let guarded = lua.create_function(move |_, args: LuaMultiValue| {
      let results = original.call::<LuaMultiValue>(args)?;
      if exhausted.get() {
        return Err(LuaError::runtime("instruction limit exceeded inside a protected call"));
      }
      Ok(results)
    })?;
    globals.raw_set(*name, guarded)?;
  }

  Ok(())
}

fn budget_error(limit: u64) -> LuaError {
  LuaError::runtime(format!("instruction limit of {} exceeded", limit))
}
