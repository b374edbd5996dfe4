//! CSV bar loading implementation.

use std::path::Path;

use sweepline_core::Bar;

use crate::BarSource;

/// Loads bar data from CSV files.
pub struct CsvLoader {
    path: std::path::PathBuf,
}

impl CsvLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BarSource for CsvLoader {
    fn load(&self) -> anyhow::Result<Vec<Bar>> {
        load_bars_from_csv(&self.path)
    }
}

/// Load bars from a CSV file.
///
/// Columns are found by header name (`timestamp`/`time`, `open`, `high`,
/// `low`, `close`, `volume`), falling back to the standard
/// timestamp,open,high,low,close,volume order. Timestamps may be in
/// seconds or milliseconds; rows are sorted chronologically before
/// returning.
pub fn load_bars_from_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Bar>> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b',').from_path(path)?;

    let headers = reader.headers()?.clone();
    let headers_lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    let position = |name: &str| headers_lower.iter().position(|h| h == name);
    let ts_col = headers_lower
        .iter()
        .position(|h| h.contains("timestamp") || h == "time")
        .unwrap_or(0);
    let open_col = position("open").unwrap_or(1);
    let high_col = position("high").unwrap_or(2);
    let low_col = position("low").unwrap_or(3);
    let close_col = position("close").unwrap_or(4);
    let volume_col = position("volume").unwrap_or(5);

    let mut bars = Vec::new();

    for result in reader.records() {
        let record = result?;

        let mut timestamp: f64 = record.get(ts_col).unwrap_or("0").parse()?;
        // Detect milliseconds (13+ digits) vs seconds (10 digits)
        if timestamp > 1e12 {
            timestamp /= 1000.0;
        }

        let open: f32 = record.get(open_col).unwrap_or("0").parse()?;
        let high: f32 = record.get(high_col).unwrap_or("0").parse()?;
        let low: f32 = record.get(low_col).unwrap_or("0").parse()?;
        let close: f32 = record.get(close_col).unwrap_or("0").parse()?;
        let volume: f32 = record.get(volume_col).unwrap_or("0").parse()?;

        bars.push(Bar::new(timestamp, open, high, low, close, volume));
    }

    // Sort by timestamp to ensure chronological order
    bars.sort_by(|a, b| a.timestamp.partial_cmp(&b.timestamp).unwrap());

    log::info!("loaded {} bars from CSV", bars.len());
    Ok(bars)
}
