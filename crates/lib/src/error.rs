//! Error types for script parsing.

use thiserror::Error;

/// Errors surfaced while turning a script into a typed record.
///
/// Absent optional keys are never errors; they take their zero value.
#[derive(Debug, Error)]
pub enum ScriptError {
  /// The script itself failed: syntax error or a runtime error it raised.
  #[error("failed to execute {chunk}: {source}")]
  Execution {
    chunk: String,
    #[source]
    source: mlua::Error,
  },

  /// The script ran past its instruction budget and was aborted.
  #[error("{chunk} exceeded the limit of {limit} instructions")]
  ExecutionLimit { chunk: String, limit: u64 },

  /// The script ran, but a structurally required table is absent.
  #[error("missing required section '{section}'")]
  MissingSection { section: String },

  /// The sandbox could not be prepared. Never caused by script content.
  #[error("failed to prepare sandbox: {0}")]
  Sandbox(#[source] mlua::Error),
}

impl ScriptError {
  pub fn missing_section(section: impl Into<String>) -> Self {
    Self::MissingSection {
      section: section.into(),
    }
  }

  /// True when the script could not be run to completion.
  pub fn is_execution(&self) -> bool {
    matches!(self, Self::Execution { .. } | Self::ExecutionLimit { .. })
  }

  pub fn is_missing_section(&self) -> bool {
    matches!(self, Self::MissingSection { .. })
  }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
