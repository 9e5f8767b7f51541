//! CSV loaders for baseline and direct-data series
//!
//! File parsing stays outside the projection core: loaders turn exported
//! worksheet data into validated input series and nothing else. Column names
//! follow the source workbook's "Growth Overview" sheet.

use std::error::Error;
use std::path::Path;

use csv::Reader;
use log::debug;

use super::{BaselineSeries, DirectSeries};

/// Row of the growth-overview export
#[derive(Debug, serde::Deserialize)]
struct GrowthRow {
    #[serde(rename = "Total Verified Customers")]
    verified_customers: f64,
}

/// Row of the direct-data export with pre-split acquisition figures
#[derive(Debug, serde::Deserialize)]
struct DirectRow {
    #[serde(rename = "Installs")]
    installs: f64,
    #[serde(rename = "Spend")]
    spend: f64,
    #[serde(rename = "Verified Users")]
    verified_users: f64,
}

/// Load the historical verified-customer baseline from a CSV file
pub fn load_baseline<P: AsRef<Path>>(path: P) -> Result<BaselineSeries, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    baseline_from_csv(reader)
}

/// Load the baseline from any reader (e.g., string buffer, network stream)
pub fn load_baseline_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<BaselineSeries, Box<dyn Error>> {
    baseline_from_csv(Reader::from_reader(reader))
}

fn baseline_from_csv<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<BaselineSeries, Box<dyn Error>> {
    let mut values = Vec::new();
    for result in reader.deserialize() {
        let row: GrowthRow = result?;
        values.push(row.verified_customers);
    }
    debug!("loaded {} baseline months", values.len());
    Ok(BaselineSeries::new(values)?)
}

/// Load pre-split installs/spend/verified columns from a CSV file
pub fn load_direct<P: AsRef<Path>>(path: P) -> Result<DirectSeries, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    direct_from_csv(reader)
}

/// Load the direct-data series from any reader
pub fn load_direct_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<DirectSeries, Box<dyn Error>> {
    direct_from_csv(Reader::from_reader(reader))
}

fn direct_from_csv<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<DirectSeries, Box<dyn Error>> {
    let mut installs = Vec::new();
    let mut spend = Vec::new();
    let mut verified = Vec::new();

    for result in reader.deserialize() {
        let row: DirectRow = result?;
        installs.push(row.installs);
        spend.push(row.spend);
        verified.push(row.verified_users);
    }
    debug!("loaded {} direct-data months", installs.len());
    Ok(DirectSeries::new(installs, spend, verified)?)
}
