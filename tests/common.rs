#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated sandbox: its own HOME (so no real config is read) and data file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn data(&self) -> String {
        self.path("work_log.json").to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `worklog --data <sandbox data>` with HOME pointing into the sandbox.
    pub fn wl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("worklog");
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--data", &self.data()]);
        cmd
    }

    pub fn add(&self, date: &str, start: &str, end: &str) {
        self.wl().args(["add", date, start, end]).assert().success();
    }

    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data()).expect("read data file")
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let p = self.path(name);
        fs::write(&p, content).expect("write fixture");
        p
    }
}

pub fn as_str(p: &Path) -> &str {
    p.to_str().expect("utf-8 path")
}
