//! Shared fixture for CLI integration tests.
//!
//! Every command runs with `--config` pointing into a fresh temp dir so the
//! user's own configuration never leaks into assertions.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("greenmind").join("config.toml");

        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_config(&self, content: &str) {
        let parent = self.config_path.parent().expect("config path has a parent");
        fs::create_dir_all(parent).expect("Failed to create config dir");
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// greenmind with this fixture's config path
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("greenmind").expect("Failed to find greenmind binary");
        cmd.arg("--config").arg(&self.config_path);
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Home directory used by `unresolved_command`
    pub fn home_dir(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// XDG config directory used by `unresolved_command`
    pub fn xdg_config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("xdg")
    }

    /// greenmind without `--config`: path resolution sees only the
    /// environment, with HOME and XDG_CONFIG_HOME inside the temp dir
    #[allow(deprecated)]
    pub fn unresolved_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("greenmind").expect("Failed to find greenmind binary");
        cmd.env("HOME", self.home_dir());
        cmd.env("XDG_CONFIG_HOME", self.xdg_config_dir());
        cmd.env_remove("GREENMIND_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run with `--format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run greenmind");

        assert!(
            output.status.success(),
            "greenmind {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

pub const MISTRAL_CONFIG: &str = r#"
[[models]]
id = "mistral-7b"
display_name = "Mistral 7B"
co2_per_token = 0.0007
water_per_token = 0.00035
efficiency = 9

[[comparison]]
name = "Mistral 7B"
co2 = 45.0
water = 22.0
efficiency = 9
cost = "very_low"
performance = "medium"
"#;
