//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary working directory for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Copy a library fixture into the environment under `name`.
    pub fn with_fixture(fixture: &str, name: &str) -> (Self, PathBuf) {
        let env = Self::empty();
        let source = fixture_path(fixture);
        let content = fs::read_to_string(&source).unwrap_or_else(|e| panic!("read {}: {}", source.display(), e));
        let path = env.write_file(name, &content);
        (env, path)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` (relative to the environment), creating parents.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write file");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("modscript").expect("binary not built");
        cmd.current_dir(self.dir.path());
        cmd
    }
}

/// Fixtures are shared with the library's tests.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("lib")
        .join("tests")
        .join("fixtures")
        .join(name)
}
