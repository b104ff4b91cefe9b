//! Common test utilities and helpers

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path of a file in the fixtures directory
pub fn fixture_path(relative_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/common/fixtures")
        .join(relative_path)
}

/// Load a fixture file from the fixtures directory
pub fn load_fixture(relative_path: &str) -> String {
    let fixture_path = fixture_path(relative_path);
    std::fs::read_to_string(&fixture_path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {:?}: {}", fixture_path, e))
}

/// A throwaway project tree
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Copy of `fixtures/project` plus a vendored dependency that must be ignored
    pub fn from_fixture() -> Self {
        let project = Self::new();
        copy_dir(&fixture_path("project"), project.root());
        project.write(
            "node_modules/ui-kit/Button.jsx",
            "export const Button = () => <button>Welcome home</button>;\n",
        );
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to a root-relative path, creating parent directories
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write test file");
        path
    }
}

fn copy_dir(from: &Path, to: &Path) {
    for entry in walkdir::WalkDir::new(from) {
        let entry = entry.expect("walk fixture");
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).unwrap();
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
}
