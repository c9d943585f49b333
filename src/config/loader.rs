//! Load run configuration (JSON) and scenario tables (CSV)

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Reader;

use super::{RunConfig, ScenarioEntry};
use crate::error::Result;

/// Raw CSV row: `Label,NominalAnnualRate,InflationAnnualRate`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Label")]
    label: String,
    #[serde(rename = "NominalAnnualRate")]
    nominal_annual_rate: f64,
    #[serde(rename = "InflationAnnualRate")]
    inflation_annual_rate: f64,
}

impl From<CsvRow> for ScenarioEntry {
    fn from(row: CsvRow) -> Self {
        ScenarioEntry {
            label: row.label,
            nominal_annual_rate: row.nominal_annual_rate,
            inflation_annual_rate: row.inflation_annual_rate,
        }
    }
}

/// Load a run configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let file = File::open(path.as_ref())?;
    let config = load_config_from_reader(BufReader::new(file))?;
    log::info!("Loaded configuration from {}", path.as_ref().display());
    Ok(config)
}

/// Load a run configuration from any reader
pub fn load_config_from_reader<R: Read>(reader: R) -> Result<RunConfig> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioEntry>> {
    let file = File::open(path.as_ref())?;
    let scenarios = load_scenarios_from_reader(file)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.as_ref().display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioEntry>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into());
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "loan": { "principal": 250000.0 }, "display": { "rate_precision": 4 } }"#;
        let config = load_config_from_reader(json.as_bytes()).unwrap();

        assert_eq!(config.loan.principal, 250_000.0);
        assert_eq!(config.loan.term_periods, 240);
        assert_eq!(config.loan.annual_rate, 0.04);
        assert_eq!(config.display.rate_precision, 4);
        assert_eq!(config.display.amount_precision, 2);
        assert_eq!(config.scenarios.len(), 3);
        assert_eq!(config.retirement.monthly_payment, 2500.0);
    }

    #[test]
    fn test_json_scenarios_replace_defaults() {
        let json = r#"{
            "retirement": { "monthly_payment": 4000.0, "payout_periods": 300, "savings_periods": 360 },
            "scenarios": [
                { "label": "Flat", "nominal_annual_rate": 0.02, "inflation_annual_rate": 0.02 }
            ]
        }"#;
        let config = load_config_from_reader(json.as_bytes()).unwrap();

        assert_eq!(config.retirement.payout_periods, 300);
        assert_eq!(config.scenarios.len(), 1);
        assert_eq!(config.scenarios()[0].label, "Flat");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = load_config_from_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Json(_)));
    }

    #[test]
    fn test_load_scenarios_csv() {
        let data = "Label,NominalAnnualRate,InflationAnnualRate\n\
                    Bear,0.01,0.05\n\
                    Bull,0.08,0.02\n";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].label, "Bear");
        assert_eq!(scenarios[1].nominal_annual_rate, 0.08);
        assert_eq!(scenarios[1].inflation_annual_rate, 0.02);
    }

    #[test]
    fn test_bad_csv_rate_is_an_error() {
        let data = "Label,NominalAnnualRate,InflationAnnualRate\nBear,abc,0.05\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }

    #[test]
    fn test_bundled_data_matches_defaults() {
        let config = load_config("data/config.json").expect("Failed to load data/config.json");
        assert_eq!(config, RunConfig::default());

        let scenarios = load_scenarios("data/scenarios.csv").expect("Failed to load data/scenarios.csv");
        assert_eq!(scenarios, RunConfig::default().scenarios);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config("does/not/exist.json").unwrap_err();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
