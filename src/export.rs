//! CSV and JSON export of classified records

use crate::classifier::PairDifferential;
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Columns present on every row
pub const BASE_COLUMNS: [&str; 7] = [
    "Currency Pair",
    "Position",
    "Rate Differential (%)",
    "Carry",
    "Base Rate",
    "Quote Rate",
    "Description",
];

/// Columns added when trend commentary is enabled
pub const TREND_COLUMNS: [&str; 3] = ["Trend Bias", "Risk Level", "Market Behavior"];

/// Decimal rendering with at least one fractional digit, so `5` is written as `5.0`.
pub fn format_rate(value: f64) -> String {
    format!("{:?}", value)
}

/// Header row for a record set. Trend columns appear when any record carries commentary.
pub fn header(records: &[PairDifferential]) -> Vec<&'static str> {
    let mut columns = BASE_COLUMNS.to_vec();
    if records.iter().any(|r| r.trend.is_some()) {
        columns.extend(TREND_COLUMNS);
    }
    columns
}

/// Write records as CSV: header row, then one row per record in the given order.
pub fn write_csv<W: Write>(records: &[PairDifferential], writer: W) -> Result<()> {
    let columns = header(records);
    let with_trend = columns.len() > BASE_COLUMNS.len();

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&columns)?;

    for r in records {
        let mut row = vec![
            r.pair.to_string(),
            r.position.to_string(),
            format_rate(r.differential),
            r.carry.to_string(),
            format_rate(r.base_rate),
            format_rate(r.quote_rate),
            r.description.clone(),
        ];
        if with_trend {
            match &r.trend {
                Some(t) => row.extend([
                    t.trend_bias.to_string(),
                    t.risk_level.to_string(),
                    t.market_behavior.to_string(),
                ]),
                None => row.extend([String::new(), String::new(), String::new()]),
            }
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write records to a CSV file
pub fn write_csv_file(records: &[PairDifferential], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Render records as a CSV string
pub fn to_csv_string(records: &[PairDifferential]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render records as pretty-printed JSON
pub fn to_json_string(records: &[PairDifferential]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to a JSON file
pub fn write_json_file(records: &[PairDifferential], path: &Path) -> Result<()> {
    std::fs::write(path, to_json_string(records)?)?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
