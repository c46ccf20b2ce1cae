use refinance::app::App;
use refinance::{Config, RefinanceError, RefinanceForm, RefinanceReport};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn form() -> RefinanceForm {
    RefinanceForm {
        current_loan_amount: "200000".into(),
        current_interest_rate: "6".into(),
        remaining_term: "25".into(),
        new_loan_amount: "200000".into(),
        new_interest_rate: "4".into(),
        new_loan_term: "25".into(),
    }
}

#[test]
fn app_exports_json_after_calculation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.json");
    let mut app = App::new(path.clone()).with_form(form());
    app.calculate();

    assert_eq!(app.export().unwrap(), path);
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["monthly_savings_display"], "232.93");
    assert_eq!(json["savings_tone"], "Positive");
    assert_eq!(json["current"]["monthly_payment_display"], "1,288.60");
}

#[test]
fn report_export_matches_to_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = RefinanceReport::from_form(&form());
    report.export(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), report.to_json().unwrap());
}

#[test]
fn config_round_trip_and_overwrite_guard() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refinance.toml");

    let written = Config::write_default(&path, false).unwrap();
    assert_eq!(Config::load_or_default(&path).unwrap(), written);
    assert!(matches!(
        Config::write_default(&path, false),
        Err(RefinanceError::ConfigExists { .. })
    ));
    assert!(Config::write_default(&path, true).is_ok());
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refinance.toml");
    fs::write(&path, "export_path = [").unwrap();
    assert!(matches!(
        Config::load_or_default(&path),
        Err(RefinanceError::Toml(_))
    ));
}

#[test]
fn custom_export_path_is_used() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(&path, "export_path = \"elsewhere.json\"\n").unwrap();
    let cfg = Config::load_or_default(&path).unwrap();
    assert_eq!(cfg.export_path, PathBuf::from("elsewhere.json"));
}
