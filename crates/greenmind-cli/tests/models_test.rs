mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_models_quiet_lists_ids_in_table_order() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["models", "--quiet"])
        .assert()
        .success()
        .stdout("gpt-4\ngpt-3.5-turbo\nclaude-3\nllama-2-70b\nllama-2-7b\npalm-2\n");
}

#[test]
fn test_models_json() {
    let fixture = TestFixture::new();

    let json = fixture.json(&["models"]);

    assert_eq!(json["content"]["token_ratio"], 1.3);
    assert_eq!(json["content"]["models"][0]["id"], "gpt-4");
    assert_eq!(json["content"]["models"][0]["efficiency"], 7);
    assert_eq!(json["badge"]["label"], "6 model(s)");
}

#[test]
fn test_models_table() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("CO2 g/TOKEN"))
        .stdout(predicate::str::contains("LLaMA 2 7B"))
        .stdout(predicate::str::contains("0.0008"));
}

#[test]
fn test_replace_builtin_config() {
    let fixture = TestFixture::new();
    fixture.write_config(&format!("replace_builtin = true\n{}", common::MISTRAL_CONFIG));

    fixture
        .command()
        .args(["models", "--quiet"])
        .assert()
        .success()
        .stdout("mistral-7b\n");
}

#[test]
fn test_invalid_config_is_an_error() {
    let fixture = TestFixture::new();
    fixture.write_config(
        r#"
[[models]]
id = "broken"
co2_per_token = 0.001
water_per_token = 0.001
efficiency = 12
"#,
    );

    fixture
        .command()
        .arg("models")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken"));
}
