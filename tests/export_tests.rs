//! Export round trips through real files

use carry_drift::export::{write_csv_file, write_json_file, BASE_COLUMNS, TREND_COLUMNS};
use carry_drift::prelude::*;
use tempfile::TempDir;

fn analysis(show_commentary: bool) -> CarryAnalysis {
    let engine = CarryEngine::new(AnalysisConfig {
        show_commentary,
        ..Default::default()
    })
    .unwrap();
    engine
        .run("Federal Reserve 5.50%\nEuropean Central Bank 4.50%\nBank of Japan 0.10%")
        .unwrap()
}

#[test]
fn test_csv_file_matches_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("carry_trade_analysis.csv");
    let analysis = analysis(true);

    write_csv_file(analysis.report.records(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    let expected: Vec<&str> = BASE_COLUMNS.iter().chain(TREND_COLUMNS.iter()).copied().collect();
    assert_eq!(headers, expected);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), analysis.report.len());

    // longs first, then shorts
    assert_eq!(&rows[0][0], "EUR/USD");
    assert_eq!(&rows[0][1], "Long");
    assert_eq!(&rows[0][2], "-1.0");
    assert_eq!(&rows[0][3], "Pay");
    assert_eq!(&rows[0][7], "Mixed");
    assert_eq!(&rows[3][1], "Short");
    assert_eq!(&rows[3][6], "Sell EUR, Buy USD");
}

#[test]
fn test_csv_file_without_commentary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.csv");
    let analysis = analysis(false);

    write_csv_file(analysis.report.records(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(reader.headers().unwrap().len(), BASE_COLUMNS.len());
}

#[test]
fn test_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("analysis.json");
    let analysis = analysis(true);

    write_json_file(analysis.report.records(), &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[1]["pair"], "USD/JPY");
    assert_eq!(rows[1]["trend"]["trend_bias"], "Strongly Bullish in Risk-On");
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    let analysis = analysis(false);
    let err = write_csv_file(analysis.report.records(), &path).unwrap_err();
    assert!(matches!(err, CarryError::Io(_)));
}
