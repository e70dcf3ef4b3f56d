mod common;
use common::TestFixture;
use predicates::prelude::*;
use std::process::Output;

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "greenmind failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_env_var_used_without_flag() {
    let fixture = TestFixture::new();
    fixture.write_config(common::MISTRAL_CONFIG);

    fixture
        .unresolved_command()
        .env("GREENMIND_CONFIG", fixture.config_path())
        .args(["models", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("mistral-7b\n"));
}

#[test]
fn test_flag_beats_env_var() {
    let fixture = TestFixture::new();
    let env_config = fixture.path("env.toml");
    std::fs::write(
        &env_config,
        format!("replace_builtin = true\n{}", common::MISTRAL_CONFIG),
    )
    .unwrap();

    fixture
        .unresolved_command()
        .env("GREENMIND_CONFIG", &env_config)
        .arg("--config")
        .arg(fixture.config_path())
        .args(["models", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gpt-4\n"))
        .stdout(predicate::str::contains("mistral-7b").not());
}

#[cfg(target_os = "linux")]
#[test]
fn test_blank_env_var_falls_back_to_xdg_dir() {
    let fixture = TestFixture::new();

    let output = fixture
        .unresolved_command()
        .env("GREENMIND_CONFIG", "   ")
        .args(["init", "--format", "json"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    let expected = fixture.xdg_config_dir().join("greenmind").join("config.toml");
    assert_eq!(json["content"]["config_path"], expected.to_str().unwrap());
    assert!(expected.exists());
}

#[test]
fn test_tilde_in_flag_expands_against_home() {
    let fixture = TestFixture::new();

    fixture
        .unresolved_command()
        .args(["--config", "~/custom.toml", "init"])
        .assert()
        .success();

    assert!(fixture.home_dir().join("custom.toml").exists());
}

#[test]
fn test_tilde_in_env_var_expands_against_home() {
    let fixture = TestFixture::new();

    let output = fixture
        .unresolved_command()
        .env("GREENMIND_CONFIG", "~/env/config.toml")
        .args(["init", "--format", "json"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    let expected = fixture.home_dir().join("env").join("config.toml");
    assert_eq!(json["content"]["config_path"], expected.to_str().unwrap());
    assert!(expected.exists());
}
