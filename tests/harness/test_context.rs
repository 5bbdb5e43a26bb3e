//! Shared testing harness for `spritelst` integration tests.

use assert_cmd::Command;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment whose `src/resources/` holds the given entries.
    ///
    /// Names ending in `/` become directories; everything else an empty file.
    pub(crate) fn with_resources(entries: &[&str]) -> Self {
        let ctx = Self::new();
        fs::create_dir_all(ctx.resources_dir()).expect("Failed to create resources directory");
        for entry in entries {
            ctx.add_resource(entry);
        }
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to `src/resources` inside the work directory.
    pub(crate) fn resources_dir(&self) -> PathBuf {
        self.work_dir.join("src").join("resources")
    }

    /// Path to the generated manifest.
    pub(crate) fn manifest_path(&self) -> PathBuf {
        self.resources_dir().join("sprites.lst")
    }

    /// Add a file (or a directory, for names ending in `/`) to `src/resources`.
    pub(crate) fn add_resource(&self, entry: &str) {
        match entry.strip_suffix('/') {
            Some(dir) => fs::create_dir_all(self.resources_dir().join(dir))
                .expect("Failed to create resource directory"),
            None => fs::write(self.resources_dir().join(entry), b"")
                .expect("Failed to create resource file"),
        }
    }

    /// Write raw content to the manifest path.
    pub(crate) fn write_manifest(&self, content: &str) {
        fs::write(self.manifest_path(), content).expect("Failed to write manifest");
    }

    /// Raw manifest content.
    pub(crate) fn read_manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).expect("Failed to read manifest")
    }

    /// Manifest lines as a set; enumeration order is not part of the contract.
    pub(crate) fn manifest_lines(&self) -> BTreeSet<String> {
        let content = self.read_manifest();
        if content.is_empty() {
            return BTreeSet::new();
        }
        content.split('\n').map(str::to_string).collect()
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("spritelst").expect("Failed to locate spritelst binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Execute a closure with the work directory as the current directory.
    pub(crate) fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

/// Set of owned strings from literals.
pub(crate) fn line_set(lines: &[&str]) -> BTreeSet<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
