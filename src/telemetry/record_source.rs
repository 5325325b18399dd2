use std::fs::File;
use std::path::Path;
use strum_macros::Display;

/// One flat sensor reading, field name to scalar value. Values keep the
/// dynamic typing of the source file: numeric cells become JSON numbers,
/// everything else stays a string.
pub type Reading = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Display)]
pub enum ReadingLoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// The file parsed but held no data rows. An empty source has nothing
    /// to cycle through, so this aborts startup like any other load error.
    Empty,
}

impl std::error::Error for ReadingLoadError {}
impl From<std::io::Error> for ReadingLoadError {
    fn from(value: std::io::Error) -> Self { ReadingLoadError::Io(value) }
}
impl From<csv::Error> for ReadingLoadError {
    fn from(value: csv::Error) -> Self { ReadingLoadError::Csv(value) }
}

/// The readings of one CSV file, loaded once at startup and immutable
/// afterwards. Row order is file order.
#[derive(Debug)]
pub struct RecordSource {
    readings: Vec<Reading>,
}

impl RecordSource {
    /// Loads the whole file into memory. The first row names the fields.
    ///
    /// # Errors
    /// [`ReadingLoadError`] when the file is missing, malformed or empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReadingLoadError> {
        let file = File::open(path)?;
        let mut csv_reader = csv::Reader::from_reader(file);
        let headers = csv_reader.headers()?.clone();
        let mut readings = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let mut reading = Reading::new();
            for (field, cell) in headers.iter().zip(row.iter()) {
                reading.insert(field.to_string(), parse_scalar(cell));
            }
            readings.push(reading);
        }
        Self::from_readings(readings)
    }

    /// Wraps an already-assembled sequence of readings.
    pub fn from_readings(readings: Vec<Reading>) -> Result<Self, ReadingLoadError> {
        if readings.is_empty() {
            return Err(ReadingLoadError::Empty);
        }
        Ok(Self { readings })
    }

    pub fn len(&self) -> usize { self.readings.len() }

    pub fn is_empty(&self) -> bool { self.readings.is_empty() }

    pub fn get(&self, index: usize) -> &Reading { &self.readings[index] }
}

/// Mirrors the dynamic typing of the course toolkit's CSV importer: cells
/// that parse as finite numbers are carried as numbers on the wire.
pub(super) fn parse_scalar(cell: &str) -> serde_json::Value {
    if let Ok(int) = cell.parse::<i64>() {
        return serde_json::Value::from(int);
    }
    if let Ok(float) = cell.parse::<f64>() {
        if float.is_finite() {
            return serde_json::Value::from(float);
        }
    }
    serde_json::Value::from(cell)
}
