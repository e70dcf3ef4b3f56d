mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_estimate_gpt35_plain() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["estimate", "--model", "gpt-3.5-turbo", "--words", "50", "--usage", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPT-3.5 Turbo (gpt-3.5-turbo)"))
        .stdout(predicate::str::contains("CO₂ Emissions   0.65g"))
        .stdout(predicate::str::contains("Water Usage     0.325L"))
        .stdout(predicate::str::contains("9/10"))
        .stdout(predicate::str::contains(
            "Great choice! This model is environmentally efficient.",
        ));
}

#[test]
fn test_estimate_gpt4_json() {
    let fixture = TestFixture::new();

    let json = fixture.json(&["estimate", "--model", "gpt-4", "--words", "100", "--usage", "5"]);
    let content = &json["content"];

    assert!((content["co2_grams"].as_f64().unwrap() - 2.6).abs() < 1e-9);
    assert!((content["water_liters"].as_f64().unwrap() - 1.3).abs() < 1e-9);
    assert_eq!(content["efficiency"], 7);
    assert_eq!(content["verdict"], "moderate");
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_estimate_quiet() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["estimate", "--model", "gpt-4", "--words", "100", "--usage", "5", "--quiet"])
        .assert()
        .success()
        .stdout("2.60g 1.300L 7/10\n");
}

#[test]
fn test_missing_inputs_are_reported_not_calculated() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["estimate", "--model", "gpt-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing input"))
        .stdout(predicate::str::contains("  - prompt length"))
        .stdout(predicate::str::contains("  - daily usage count"))
        .stdout(predicate::str::contains("CO₂ Emissions").not());

    let json = fixture.json(&["estimate"]);
    assert_eq!(
        json["content"]["missing_fields"],
        serde_json::json!(["model", "prompt length", "daily usage count"])
    );
}

#[test]
fn test_unknown_model_lists_valid_ids() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["estimate", "--model", "bard", "--words", "10", "--usage", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Unknown model 'bard'"))
        .stderr(predicate::str::contains("gpt-3.5-turbo"));
}

#[test]
fn test_zero_words_rejected_by_parser() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["estimate", "--model", "gpt-4", "--words", "0", "--usage", "1"])
        .assert()
        .failure();
}

#[test]
fn test_configured_model_is_estimable() {
    let fixture = TestFixture::new();
    fixture.write_config(common::MISTRAL_CONFIG);

    let json = fixture.json(&["estimate", "--model", "mistral-7b", "--words", "100", "--usage", "10"]);

    assert_eq!(json["content"]["model_name"], "Mistral 7B");
    assert!((json["content"]["co2_grams"].as_f64().unwrap() - 0.91).abs() < 1e-9);
}
